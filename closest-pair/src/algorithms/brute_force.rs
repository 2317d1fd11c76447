#[cfg(test)]
#[path = "../../tests/unit/algorithms/brute_force_test.rs"]
mod brute_force_test;

use crate::models::{Point, PointPair};
use crate::utils::Float;

/// Finds the closest pair by comparing every point with all subsequent ones, O(n²).
///
/// Only a strictly smaller distance replaces the current best, so the first minimal pair in input
/// order wins. Returns `None` when less than two points are given.
pub fn closest_pair_brute_force(points: &[Point]) -> Option<PointPair> {
    let mut best: Option<(PointPair, Float)> = None;

    for (idx, first) in points.iter().enumerate() {
        for second in points.iter().skip(idx + 1) {
            let distance = first.distance_to(second);

            if best.as_ref().is_none_or(|(_, best_distance)| distance < *best_distance) {
                best = Some((PointPair::new(*first, *second), distance));
            }
        }
    }

    best.map(|(pair, _)| pair)
}
