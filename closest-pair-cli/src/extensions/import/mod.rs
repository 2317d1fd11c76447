//! Contains functionality to read points from a flat list of integer coordinates.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/import/import_test.rs"]
mod import_test;

use closest_pair::prelude::{Coordinate, GenericError, GenericResult, Point};
use std::io::{BufRead, BufReader, Read};

/// A trait to read points.
pub trait PointsReader {
    /// Reads points from a flat list of coordinates separated by whitespaces and/or commas.
    fn read_points(self) -> GenericResult<Vec<Point>>;
}

impl<R: Read> PointsReader for BufReader<R> {
    fn read_points(self) -> GenericResult<Vec<Point>> {
        let mut coordinates = Vec::new();

        for line in self.lines() {
            collect_coordinates(line?.as_str(), &mut coordinates)?;
        }

        create_points(coordinates)
    }
}

impl PointsReader for String {
    fn read_points(self) -> GenericResult<Vec<Point>> {
        BufReader::new(self.as_bytes()).read_points()
    }
}

/// Parses points from inline text, e.g. "1,4 6,8 7,4".
pub fn parse_points(text: &str) -> GenericResult<Vec<Point>> {
    let mut coordinates = Vec::new();

    for line in text.lines() {
        collect_coordinates(line, &mut coordinates)?;
    }

    create_points(coordinates)
}

fn collect_coordinates(line: &str, coordinates: &mut Vec<Coordinate>) -> GenericResult<()> {
    let line = line.trim();
    if line.starts_with('#') {
        return Ok(());
    }

    line.split(|c: char| c.is_whitespace() || c == ',').filter(|token| !token.is_empty()).try_for_each(|token| {
        let value = token
            .parse::<Coordinate>()
            .map_err(|err| GenericError::from(format!("cannot parse coordinate '{token}': {err}")))?;
        coordinates.push(value);

        Ok(())
    })
}

fn create_points(coordinates: Vec<Coordinate>) -> GenericResult<Vec<Point>> {
    if coordinates.len() % 2 != 0 {
        return Err(format!("odd number of coordinates: {}", coordinates.len()).into());
    }

    Ok(coordinates.chunks_exact(2).map(|pair| Point::new(pair[0], pair[1])).collect())
}
