#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/formats_test.rs"]
mod formats_test;

use closest_pair::prelude::{Coordinate, Float, GenericError, GenericResult, Point, Solution};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

/// Specifies an output format of the solution.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// A human readable text.
    #[default]
    Text,
    /// A json object.
    Json,
}

impl FromStr for OutputFormat {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: '{value}'").into()),
        }
    }
}

/// A point in json output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonPoint {
    /// X coordinate.
    pub x: Coordinate,
    /// Y coordinate.
    pub y: Coordinate,
}

/// A solution in json output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonSolution {
    /// The first point of the closest pair.
    pub first: JsonPoint,
    /// The second point of the closest pair.
    pub second: JsonPoint,
    /// Distance between points.
    pub distance: Float,
    /// Algorithm name.
    pub algorithm: String,
}

impl From<&Point> for JsonPoint {
    fn from(point: &Point) -> Self {
        Self { x: point.x(), y: point.y() }
    }
}

impl From<&Solution> for JsonSolution {
    fn from(solution: &Solution) -> Self {
        Self {
            first: solution.pair.first().into(),
            second: solution.pair.second().into(),
            distance: solution.distance,
            algorithm: solution.algorithm.name().to_string(),
        }
    }
}

/// Writes solution in the given format.
pub fn write_solution<W: Write>(writer: &mut W, solution: &Solution, format: OutputFormat) -> GenericResult<()> {
    match format {
        OutputFormat::Text => write_text_solution(writer, solution),
        OutputFormat::Json => write_json_solution(writer, solution),
    }
}

/// Writes solution as a human readable text.
pub fn write_text_solution<W: Write>(writer: &mut W, solution: &Solution) -> GenericResult<()> {
    writeln!(writer, "{solution}")?;

    Ok(())
}

/// Writes solution as a json object.
pub fn write_json_solution<W: Write>(writer: &mut W, solution: &Solution) -> GenericResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &JsonSolution::from(solution))
        .map_err(|err| GenericError::from(format!("cannot write json solution: {err}")))?;
    writeln!(writer)?;

    Ok(())
}
