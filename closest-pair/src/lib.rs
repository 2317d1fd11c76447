//! This crate finds the closest pair of points on a two-dimensional plane.
//!
//! Two algorithms are exposed:
//!
//! - **brute force**: compares every pair of points, O(n²);
//! - **divide and conquer**: splits points by median x-coordinate, solves both halves recursively
//!   and combines them by scanning a narrow strip around the dividing line, O(n log n).
//!
//! # Examples
//!
//! ```
//! use closest_pair::prelude::*;
//!
//! let points = vec![Point::new(1, 4), Point::new(6, 8), Point::new(7, 4)];
//! let pair = closest_pair(&points).expect("at least two points");
//!
//! assert_eq!(pair.to_string(), "(6,8) (7,4)");
//! assert!((pair.distance() - 17_f64.sqrt()).abs() < 1E-9);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/cross_check_test.rs"]
mod cross_check_test;

pub mod algorithms;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod utils;
