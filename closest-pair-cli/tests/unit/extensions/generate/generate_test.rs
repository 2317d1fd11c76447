use super::*;
use crate::extensions::import::PointsReader;
use closest_pair::prelude::SeededRandom;
use std::io::BufReader;

#[test]
fn can_generate_points_within_range() {
    let random = SeededRandom::new(0);

    let points = generate_points(500, (-5, 5), &random).expect("cannot generate points");

    assert_eq!(points.len(), 500);
    assert!(points.iter().all(|point| (-5..=5).contains(&point.x()) && (-5..=5).contains(&point.y())));
}

#[test]
fn can_generate_same_points_with_same_seed() {
    let first = generate_points(100, (0, 1000), &SeededRandom::new(5)).expect("cannot generate points");
    let second = generate_points(100, (0, 1000), &SeededRandom::new(5)).expect("cannot generate points");

    assert_eq!(first, second);
}

#[test]
fn can_generate_points_with_single_value_range() {
    let points = generate_points(3, (7, 7), &SeededRandom::new(0)).expect("cannot generate points");

    assert_eq!(points, vec![Point::new(7, 7); 3]);
}

#[test]
fn can_reject_invalid_range() {
    let result = generate_points(10, (5, -5), &SeededRandom::new(0));

    assert_eq!(result.map(|_| ()).unwrap_err().to_string(), "invalid coordinate range: min 5 is greater than max -5");
}

#[test]
fn can_write_points_which_can_be_read_back() {
    let points = generate_points(50, (-100, 100), &SeededRandom::new(1)).expect("cannot generate points");
    let mut buffer = Vec::new();

    write_points(&mut buffer, points.as_slice()).expect("cannot write points");
    let read_points = BufReader::new(buffer.as_slice()).read_points().expect("cannot read points");

    assert_eq!(read_points, points);
}
