#[cfg(test)]
#[path = "../../tests/unit/models/pair_test.rs"]
mod pair_test;

use crate::models::Point;
use crate::utils::{Float, compare_floats};
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result};

/// Represents a pair of points. The order of points is incidental.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointPair {
    first: Point,
    second: Point,
}

impl PointPair {
    /// Creates a new instance of `PointPair`.
    pub fn new(first: Point, second: Point) -> Self {
        Self { first, second }
    }

    /// Returns the first point.
    pub fn first(&self) -> &Point {
        &self.first
    }

    /// Returns the second point.
    pub fn second(&self) -> &Point {
        &self.second
    }

    /// Returns euclidean distance between points of the pair.
    pub fn distance(&self) -> Float {
        self.first.distance_to(&self.second)
    }

    /// Checks whether the pair consists of given points regardless of their order.
    pub fn contains(&self, a: &Point, b: &Point) -> bool {
        (self.first == *a && self.second == *b) || (self.first == *b && self.second == *a)
    }
}

impl Display for PointPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {}", self.first, self.second)
    }
}

/// Returns euclidean distance between two points. When any of points is absent, the distance is
/// infinite, so such pair never wins a minimum search.
pub fn distance(p: Option<&Point>, q: Option<&Point>) -> Float {
    match (p, q) {
        (Some(p), Some(q)) => p.distance_to(q),
        _ => Float::INFINITY,
    }
}

/// Returns distance between points of the pair or infinity when the pair is absent.
pub fn distance_of_pair(pair: Option<&PointPair>) -> Float {
    pair.map_or(Float::INFINITY, |pair| pair.distance())
}

/// Compares pairs by their distances. An absent pair is greater than any present one, two absent
/// pairs are equal.
pub fn compare_distance(a: Option<&PointPair>, b: Option<&PointPair>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => compare_floats(a.distance(), b.distance()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
