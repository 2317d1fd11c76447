//! This module reimports commonly used types.

pub use crate::algorithms::closest_pair;
pub use crate::algorithms::closest_pair_brute_force;

pub use crate::models::{compare_distance, distance, distance_of_pair};
pub use crate::models::{Coordinate, Point, PointPair};

pub use crate::solver::{Algorithm, Solution, Solver};

pub use crate::utils::compare_floats;
pub use crate::utils::Float;
pub use crate::utils::InfoLogger;
pub use crate::utils::{DefaultRandom, Random, SeededRandom};
pub use crate::utils::{GenericError, GenericResult};
