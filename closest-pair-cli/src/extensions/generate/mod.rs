//! Contains functionality to generate random points.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/generate/generate_test.rs"]
mod generate_test;

use closest_pair::prelude::{Coordinate, GenericResult, Point, Random};
use std::io::Write;

/// Generates points with coordinates uniformly distributed on the closed interval [min, max].
pub fn generate_points(size: usize, range: (Coordinate, Coordinate), random: &dyn Random) -> GenericResult<Vec<Point>> {
    let (min, max) = range;
    if min > max {
        return Err(format!("invalid coordinate range: min {min} is greater than max {max}").into());
    }

    Ok((0..size).map(|_| Point::new(random.uniform_int(min, max), random.uniform_int(min, max))).collect())
}

/// Writes points, one per line, in the format which can be read back.
pub fn write_points<W: Write>(writer: &mut W, points: &[Point]) -> GenericResult<()> {
    points.iter().try_for_each(|point| writeln!(writer, "{} {}", point.x(), point.y()))?;

    Ok(())
}
