//! A crate which provides the way to read points, run closest pair solver and write results.
//!
//! # Examples
//!
//! ```
//! use closest_pair::prelude::*;
//! use closest_pair_cli::extensions::import::parse_points;
//! use closest_pair_cli::extensions::solve::write_text_solution;
//!
//! let points = parse_points("1,4 6,8 7,4")?;
//! let solution = Solver::default().solve(&points)?;
//!
//! let mut buffer = Vec::new();
//! write_text_solution(&mut buffer, &solution)?;
//!
//! assert!(String::from_utf8_lossy(&buffer).starts_with("Closest Points (6,8) (7,4)"));
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use closest_pair as core;

pub mod extensions;
