use super::*;
use crate::helpers::points::create_points;

fn create_pair(first: (i32, i32), second: (i32, i32)) -> PointPair {
    PointPair::new(Point::from(first), Point::from(second))
}

#[test]
fn can_display_pair() {
    assert_eq!(create_pair((1, 4), (7, 4)).to_string(), "(1,4) (7,4)");
}

#[test]
fn can_check_pair_content_regardless_of_order() {
    let pair = create_pair((1, 4), (7, 4));

    assert!(pair.contains(&Point::new(1, 4), &Point::new(7, 4)));
    assert!(pair.contains(&Point::new(7, 4), &Point::new(1, 4)));
    assert!(!pair.contains(&Point::new(7, 4), &Point::new(6, 8)));
}

#[test]
fn can_calculate_distance_for_present_points() {
    let (p, q) = (Point::new(1, 4), Point::new(7, 4));

    assert_eq!(distance(Some(&p), Some(&q)), 6.);
}

parameterized_test! {can_return_infinite_distance_for_absent_point, (p, q), {
    assert_eq!(distance(p.as_ref(), q.as_ref()), Float::INFINITY);
}}

can_return_infinite_distance_for_absent_point! {
    case01_first_absent: (None, Some(Point::new(1, 1))),
    case02_second_absent: (Some(Point::new(1, 1)), None),
    case03_both_absent: (None::<Point>, None::<Point>),
}

#[test]
fn can_calculate_symmetric_distance() {
    let points = create_points(&[(0, 0), (-3, 5), (12, -8), (1000, 2), (-41, -41)]);

    for p in points.iter() {
        for q in points.iter() {
            assert_eq!(distance(Some(p), Some(q)), distance(Some(q), Some(p)));
        }
    }
}

#[test]
fn can_calculate_distance_of_pair() {
    assert_eq!(distance_of_pair(Some(&create_pair((0, 0), (3, 4)))), 5.);
    assert_eq!(distance_of_pair(None), Float::INFINITY);
}

parameterized_test! {can_compare_distance, (a, b, expected), {
    assert_eq!(compare_distance(a.as_ref(), b.as_ref()), expected);
}}

can_compare_distance! {
    case01_less: (Some(create_pair((0, 0), (1, 0))), Some(create_pair((0, 0), (2, 0))), Ordering::Less),
    case02_greater: (Some(create_pair((0, 0), (5, 0))), Some(create_pair((0, 0), (2, 0))), Ordering::Greater),
    case03_equal: (Some(create_pair((0, 0), (3, 4))), Some(create_pair((1, 1), (6, 1))), Ordering::Equal),
    case04_absent_is_greater: (None, Some(create_pair((0, 0), (1000, 1000))), Ordering::Greater),
    case05_present_is_less: (Some(create_pair((0, 0), (1000, 1000))), None, Ordering::Less),
    case06_both_absent: (None, None, Ordering::Equal),
}

#[test]
fn can_keep_present_pair_when_minimum_is_searched_with_absent_one() {
    let pairs = [None, Some(create_pair((0, 0), (9, 9))), None];

    let best = pairs.iter().min_by(|a, b| compare_distance(a.as_ref(), b.as_ref())).copied().flatten();

    assert_eq!(best, Some(create_pair((0, 0), (9, 9))));
}
