#[cfg(test)]
#[path = "../../tests/unit/algorithms/divide_conquer_test.rs"]
mod divide_conquer_test;

use super::closest_pair_brute_force;
use crate::models::{Point, PointPair, compare_distance, distance_of_pair};
use crate::utils::Float;

/// Amount of points subsequent in y order within the strip which are checked for each point.
/// At most eight points fit into a `delta x 2*delta` box without violating `delta` separation
/// on each side, and such packing has coincident points, so six followers are enough.
const STRIP_LOOKAHEAD: usize = 6;

/// Point sets of this size or smaller are solved with brute force.
const BASE_CASE_SIZE: usize = 3;

/// Finds the closest pair using divide and conquer approach, O(n log n).
///
/// Returns `None` when less than two points are given.
pub fn closest_pair(points: &[Point]) -> Option<PointPair> {
    if points.len() < 2 {
        return None;
    }

    // views keep indices of the original points, so a point keeps its identity even when
    // coordinates are duplicated
    let mut by_x = (0..points.len()).collect::<Vec<_>>();
    by_x.sort_unstable_by_key(|&idx| points[idx].x());

    let mut by_y = (0..points.len()).collect::<Vec<_>>();
    by_y.sort_unstable_by_key(|&idx| points[idx].y());

    ClosestPairSearch { points, is_left: vec![false; points.len()] }.solve(&by_x, &by_y)
}

/// Keeps the state shared by all levels of recursion.
struct ClosestPairSearch<'a> {
    points: &'a [Point],
    /// Membership marks of the current partition, indexed by the original point index.
    is_left: Vec<bool>,
}

impl ClosestPairSearch<'_> {
    fn solve(&mut self, by_x: &[usize], by_y: &[usize]) -> Option<PointPair> {
        debug_assert_eq!(by_x.len(), by_y.len(), "sorted views have different size");

        if by_x.len() <= BASE_CASE_SIZE {
            let points = by_x.iter().map(|&idx| self.points[idx]).collect::<Vec<_>>();
            return closest_pair_brute_force(points.as_slice());
        }

        let mid = by_x.len() / 2;
        let (left_x, right_x) = by_x.split_at(mid);
        let (left_y, right_y) = self.partition_by_y(left_x, right_x, by_y);

        let left = self.solve(left_x, left_y.as_slice());
        let right = self.solve(right_x, right_y.as_slice());

        let delta = distance_of_pair(left.as_ref()).min(distance_of_pair(right.as_ref()));
        let split = self.closest_split_pair(by_x, by_y, delta);

        [left, right, split].into_iter().min_by(|a, b| compare_distance(a.as_ref(), b.as_ref())).flatten()
    }

    /// Splits y view into two parts which have exactly the same points as the given x halves.
    fn partition_by_y(&mut self, left_x: &[usize], right_x: &[usize], by_y: &[usize]) -> (Vec<usize>, Vec<usize>) {
        left_x.iter().for_each(|&idx| self.is_left[idx] = true);
        right_x.iter().for_each(|&idx| self.is_left[idx] = false);

        let (left_y, right_y): (Vec<_>, Vec<_>) = by_y.iter().copied().partition(|&idx| self.is_left[idx]);
        debug_assert_eq!(left_y.len(), left_x.len(), "partition of y view does not match x view");

        (left_y, right_y)
    }

    /// Finds the closest pair which is closer than `delta` and has points on different sides of
    /// the dividing line.
    fn closest_split_pair(&self, by_x: &[usize], by_y: &[usize], delta: Float) -> Option<PointPair> {
        let x_bar = self.points[by_x[by_x.len() / 2]].x() as Float;

        let strip = by_y
            .iter()
            .map(|&idx| self.points[idx])
            .filter(|point| (point.x() as Float - x_bar).abs() <= delta)
            .collect::<Vec<_>>();

        let mut best_distance = delta;
        let mut best_pair = None;

        for (idx, first) in strip.iter().enumerate() {
            for second in strip.iter().skip(idx + 1).take(STRIP_LOOKAHEAD) {
                let distance = first.distance_to(second);

                if distance < best_distance {
                    best_distance = distance;
                    best_pair = Some(PointPair::new(*first, *second));
                }
            }
        }

        best_pair
    }
}
