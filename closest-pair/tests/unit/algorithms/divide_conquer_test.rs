use super::*;
use crate::helpers::points::create_points;

fn create_views(points: &[Point]) -> (Vec<usize>, Vec<usize>) {
    let mut by_x = (0..points.len()).collect::<Vec<_>>();
    by_x.sort_by_key(|&idx| points[idx].x());

    let mut by_y = (0..points.len()).collect::<Vec<_>>();
    by_y.sort_by_key(|&idx| points[idx].y());

    (by_x, by_y)
}

#[test]
fn can_return_none_when_not_enough_points() {
    assert_eq!(closest_pair(&[]), None);
    assert_eq!(closest_pair(&[Point::new(1, 1)]), None);
}

parameterized_test! {can_match_brute_force_in_base_case, coordinates, {
    can_match_brute_force_in_base_case_impl(coordinates);
}}

can_match_brute_force_in_base_case! {
    case01_two_points: &[(0, 0), (3, 4)],
    case02_three_points: &[(1, 4), (6, 8), (7, 4)],
    case03_three_collinear: &[(9, 0), (0, 0), (4, 0)],
    case04_three_coincident: &[(2, 2), (2, 2), (2, 2)],
}

fn can_match_brute_force_in_base_case_impl(coordinates: &[(i32, i32)]) {
    let points = create_points(coordinates);

    let actual = closest_pair(&points);
    let expected = closest_pair_brute_force(&points);

    assert_eq!(distance_of_pair(actual.as_ref()), distance_of_pair(expected.as_ref()));
}

#[test]
fn can_find_closest_pair_in_triangle() {
    let pair = closest_pair(&create_points(&[(1, 4), (6, 8), (7, 4)])).expect("no pair");

    assert!(pair.contains(&Point::new(6, 8), &Point::new(7, 4)));
    assert_float_eq!(pair.distance(), 17_f64.sqrt());
}

#[test]
fn can_find_adjacent_pair_on_line() {
    let pair = closest_pair(&create_points(&[(3, 0), (0, 0), (2, 0), (1, 0)])).expect("no pair");

    assert_eq!(pair.distance(), 1.);
    assert_eq!((pair.first().x() - pair.second().x()).abs(), 1);
}

#[test]
fn can_find_pair_split_by_dividing_line() {
    let points = create_points(&[(-10, 0), (-5, 50), (-1, 0), (1, 0), (6, 50), (10, 0)]);

    let pair = closest_pair(&points).expect("no pair");

    assert!(pair.contains(&Point::new(-1, 0), &Point::new(1, 0)));
    assert_eq!(pair.distance(), 2.);
}

#[test]
fn can_find_pair_on_vertical_line() {
    let points = create_points(&[(0, 13), (0, 0), (0, 9), (0, 5), (0, 12)]);

    let pair = closest_pair(&points).expect("no pair");

    assert!(pair.contains(&Point::new(0, 12), &Point::new(0, 13)));
}

parameterized_test! {can_find_coincident_points, coordinates, {
    let points = create_points(coordinates);

    let pair = closest_pair(&points).expect("no pair");

    assert_eq!(pair.distance(), 0.);
}}

can_find_coincident_points! {
    case01_on_dividing_line: &[(0, 0), (5, 5), (5, 5), (10, 0)],
    case02_all_same: &[(7, 7), (7, 7), (7, 7), (7, 7), (7, 7), (7, 7), (7, 7)],
    case03_corner_packing: &[(-2, 0), (-2, 2), (0, 0), (0, 2), (0, 0), (0, 2), (2, 0), (2, 2)],
    case04_far_apart: &[(-100, -100), (40, 3), (3, 40), (100, 100), (-100, -100), (0, 70)],
}

#[test]
fn can_partition_y_view_by_x_halves() {
    let points = create_points(&[(4, 1), (4, 9), (0, 5), (4, 3), (8, 0), (4, 7)]);
    let (by_x, by_y) = create_views(&points);
    let mut search = ClosestPairSearch { points: &points, is_left: vec![false; points.len()] };
    let (left_x, right_x) = by_x.split_at(by_x.len() / 2);

    let (left_y, right_y) = search.partition_by_y(left_x, right_x, &by_y);

    let sorted = |indices: &[usize]| {
        let mut indices = indices.to_vec();
        indices.sort();
        indices
    };
    assert_eq!(sorted(&left_y), sorted(left_x));
    assert_eq!(sorted(&right_y), sorted(right_x));
    assert!(left_y.windows(2).all(|w| points[w[0]].y() <= points[w[1]].y()));
    assert!(right_y.windows(2).all(|w| points[w[0]].y() <= points[w[1]].y()));
}

#[test]
fn can_find_split_pair_closer_than_delta() {
    let points = create_points(&[(-10, 0), (-1, 0), (1, 1), (10, 0)]);
    let (by_x, by_y) = create_views(&points);
    let search = ClosestPairSearch { points: &points, is_left: vec![false; points.len()] };

    let pair = search.closest_split_pair(&by_x, &by_y, 9.).expect("no split pair");

    assert!(pair.contains(&Point::new(-1, 0), &Point::new(1, 1)));
}

#[test]
fn can_skip_split_pair_when_not_closer_than_delta() {
    let points = create_points(&[(-10, 0), (-1, 0), (1, 1), (10, 0)]);
    let (by_x, by_y) = create_views(&points);
    let search = ClosestPairSearch { points: &points, is_left: vec![false; points.len()] };

    assert_eq!(search.closest_split_pair(&by_x, &by_y, 5_f64.sqrt()), None);
}

#[test]
fn can_ignore_points_outside_of_strip() {
    let points = create_points(&[(-20, 0), (-19, 0), (0, 0), (5, 10), (30, 0), (31, 0)]);
    let (by_x, by_y) = create_views(&points);
    let search = ClosestPairSearch { points: &points, is_left: vec![false; points.len()] };

    assert_eq!(search.closest_split_pair(&by_x, &by_y, 3.), None);
}
