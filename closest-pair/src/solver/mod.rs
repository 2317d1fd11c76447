//! This module contains a solver facade which validates input, runs the chosen algorithm and
//! reports what was done.
//!
//! # Examples
//!
//! ```
//! use closest_pair::prelude::*;
//! use std::sync::Arc;
//!
//! let points = vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 0), Point::new(3, 0)];
//! let solution = Solver::default()
//!     .with_algorithm(Algorithm::BruteForce)
//!     .with_logger(Arc::new(|msg: &str| println!("{msg}")))
//!     .solve(&points)?;
//!
//! assert_eq!(solution.distance, 1.);
//! # Ok::<(), GenericError>(())
//! ```

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

use crate::algorithms::{closest_pair, closest_pair_brute_force};
use crate::models::{Point, PointPair};
use crate::utils::{Float, GenericError, GenericResult, InfoLogger, Timer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies an algorithm used to find the closest pair.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Algorithm {
    /// Recursive divide and conquer algorithm, O(n log n).
    #[default]
    DivideAndConquer,
    /// Compares all pairs, O(n²).
    BruteForce,
}

impl Algorithm {
    /// Returns a name of the algorithm which can be parsed back.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::DivideAndConquer => "divide-conquer",
            Algorithm::BruteForce => "brute-force",
        }
    }

    fn run(&self, points: &[Point]) -> Option<PointPair> {
        match self {
            Algorithm::DivideAndConquer => closest_pair(points),
            Algorithm::BruteForce => closest_pair_brute_force(points),
        }
    }
}

impl FromStr for Algorithm {
    type Err = GenericError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "divide-conquer" => Ok(Algorithm::DivideAndConquer),
            "brute-force" => Ok(Algorithm::BruteForce),
            _ => Err(format!("unknown algorithm: '{value}'").into()),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Keeps the found closest pair.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    /// The closest pair.
    pub pair: PointPair,
    /// Distance between points of the pair.
    pub distance: Float,
    /// An algorithm used to find the pair.
    pub algorithm: Algorithm,
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Closest Points {}", self.pair)?;
        write!(f, "Distance between them: {}", self.distance)
    }
}

/// Finds the closest pair of points with configured algorithm.
#[derive(Default)]
pub struct Solver {
    algorithm: Algorithm,
    logger: Option<InfoLogger>,
}

impl Solver {
    /// Sets algorithm to use.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets logger.
    pub fn with_logger(mut self, logger: InfoLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Solves the problem. Returns an error when less than two points are given.
    pub fn solve(&self, points: &[Point]) -> GenericResult<Solution> {
        if points.len() < 2 {
            return Err(format!("not enough points given: {}", points.len()).into());
        }

        self.log(format!("searching closest pair among {} points using {}", points.len(), self.algorithm).as_str());

        let (pair, duration) = Timer::measure_duration(|| self.algorithm.run(points));
        let pair = pair.ok_or_else(|| GenericError::from("cannot find closest pair"))?;
        let solution = Solution { pair, distance: pair.distance(), algorithm: self.algorithm };

        self.log(
            format!("found {} at distance {} in {}ms", solution.pair, solution.distance, duration.as_millis()).as_str(),
        );

        Ok(solution)
    }

    fn log(&self, message: &str) {
        if let Some(logger) = &self.logger {
            (logger)(message)
        }
    }
}
