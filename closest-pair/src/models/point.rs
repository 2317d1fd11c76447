#[cfg(test)]
#[path = "../../tests/unit/models/point_test.rs"]
mod point_test;

use crate::utils::Float;
use std::fmt::{Display, Formatter, Result};

/// Specifies a coordinate type.
pub type Coordinate = i32;

/// Represents an immutable point on a two-dimensional plane.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    x: Coordinate,
    y: Coordinate,
}

impl Point {
    /// Creates a new instance of `Point`.
    pub fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }

    /// Returns x coordinate.
    pub fn x(&self) -> Coordinate {
        self.x
    }

    /// Returns y coordinate.
    pub fn y(&self) -> Coordinate {
        self.y
    }

    /// Returns euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> Float {
        // NOTE differences are taken in float domain as i32 subtraction can overflow
        let dx = self.x as Float - other.x as Float;
        let dy = self.y as Float - other.y as Float;

        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(Coordinate, Coordinate)> for Point {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
