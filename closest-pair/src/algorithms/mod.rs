//! This module contains algorithms to find the closest pair of points.

mod brute_force;
pub use self::brute_force::closest_pair_brute_force;

mod divide_conquer;
pub use self::divide_conquer::closest_pair;
