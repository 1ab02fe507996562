//! Delta evaluation and application of 2-opt and 3-opt moves.
//!
//! Deltas are exact incremental cost changes: adding a move's delta to the
//! pre-move total length equals the post-move total length, up to
//! floating-point tolerance. Index preconditions are internal contracts of
//! the sweep engines, asserted in debug builds only.

use crate::point::Point;
use crate::tour::Tour;

/// Change in tour length caused by the 2-opt move (i, j): replacing edges
/// (i, i+1) and (j, j+1) with (i, j) and (i+1, j+1).
///
/// Requires `i < j < n`. The edge after `j` wraps around to the start of
/// the tour when `j` is the last position; `i + 1` never wraps since
/// `i < j`.
pub fn two_opt_delta(tour: &Tour, i: usize, j: usize) -> f64 {
    let points = &tour.points;
    let n = points.len();
    debug_assert!(i < j && j < n, "invalid 2-opt indices ({}, {})", i, j);

    let j_next = &points[(j + 1) % n];

    -points[i].distance(&points[i + 1]) - points[j].distance(j_next)
        + points[i + 1].distance(j_next)
        + points[i].distance(&points[j])
}

/// Apply the 2-opt move (i, j) by reversing the segment between `i` and the
/// edge after `j`. Reversal is a bijection on the segment, so the tour stays
/// a permutation. Applying the same move twice restores the original tour.
pub fn apply_two_opt(tour: &mut Tour, i: usize, j: usize) {
    debug_assert!(i < j && j < tour.points.len());

    tour.points[i + 1..=j].reverse();
}

/// Change in tour length caused by the 3-opt move (i, j, k): removing edges
/// (i, i+1), (j, j+1) and (k, k+1), then reversing the two inner segments.
///
/// Requires `i < j < k ≤ n − 2`, so the successor of every removed edge is
/// in range without wraparound.
pub fn three_opt_delta(tour: &Tour, i: usize, j: usize, k: usize) -> f64 {
    let points = &tour.points;
    debug_assert!(
        i < j && j < k && k + 1 < points.len(),
        "invalid 3-opt indices ({}, {}, {})",
        i,
        j,
        k
    );

    edge(points, i, j) + edge(points, i + 1, k) + edge(points, j + 1, k + 1)
        - edge(points, i, i + 1)
        - edge(points, j, j + 1)
        - edge(points, k, k + 1)
}

/// Apply the 3-opt move (i, j, k): reverse the segment (i+1 ..= j), then the
/// segment (j+1 ..= k). The prefix and suffix stay untouched.
pub fn apply_three_opt(tour: &mut Tour, i: usize, j: usize, k: usize) {
    debug_assert!(i < j && j < k && k + 1 < tour.points.len());

    tour.points[i + 1..=j].reverse();
    tour.points[j + 1..=k].reverse();
}

fn edge(points: &[Point], a: usize, b: usize) -> f64 {
    points[a].distance(&points[b])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crossed_square() -> Tour {
        Tour::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ])
    }

    #[test]
    fn two_opt_delta_matches_recomputation() {
        let tour = crossed_square();
        let before = tour.total_length();

        for i in 0..tour.len() - 1 {
            for j in i + 1..tour.len() {
                let delta = two_opt_delta(&tour, i, j);
                let mut moved = tour.clone();
                apply_two_opt(&mut moved, i, j);
                assert!(
                    (before + delta - moved.total_length()).abs() < 1e-9,
                    "delta mismatch at ({}, {})",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn two_opt_is_self_inverse() {
        let tour = crossed_square();
        let mut moved = tour.clone();
        apply_two_opt(&mut moved, 0, 2);
        apply_two_opt(&mut moved, 0, 2);
        assert_eq!(moved.points, tour.points);
    }

    #[test]
    fn uncrossing_the_square_saves_the_diagonals() {
        let tour = crossed_square();
        // Swapping (0, 2) removes both diagonals and leaves the plain
        // square: from 2 + 2*sqrt(2) down to 4.
        let delta = two_opt_delta(&tour, 0, 2);
        assert!((tour.total_length() + delta - 4.0).abs() < 1e-9);

        let mut moved = tour.clone();
        apply_two_opt(&mut moved, 0, 2);
        assert!((moved.total_length() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn adjacent_two_opt_delta_is_zero() {
        // Removing and re-adding the same pair of edges around a single
        // point changes nothing.
        let tour = crossed_square();
        for i in 0..tour.len() - 1 {
            assert!(two_opt_delta(&tour, i, i + 1).abs() < 1e-12);
        }
    }

    #[test]
    fn three_opt_delta_matches_recomputation() {
        let tour = Tour::new(vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(1.0, 3.0),
            Point::new(5.0, 4.0),
            Point::new(2.0, 7.0),
            Point::new(6.0, 0.0),
            Point::new(3.0, 5.0),
        ]);
        let before = tour.total_length();
        let n = tour.len();

        for i in 0..n - 3 {
            for j in i + 1..n - 2 {
                for k in j + 1..n - 1 {
                    let delta = three_opt_delta(&tour, i, j, k);
                    let mut moved = tour.clone();
                    apply_three_opt(&mut moved, i, j, k);
                    assert!(
                        (before + delta - moved.total_length()).abs() < 1e-9,
                        "delta mismatch at ({}, {}, {})",
                        i,
                        j,
                        k
                    );
                }
            }
        }
    }

    #[test]
    fn three_opt_apply_preserves_prefix_and_suffix() {
        let tour = Tour::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(4.0, 0.0),
            Point::new(5.0, 0.0),
        ]);
        let mut moved = tour.clone();
        apply_three_opt(&mut moved, 0, 2, 4);

        assert_eq!(moved.points[0], tour.points[0]);
        assert_eq!(moved.points[5], tour.points[5]);
        // (i+1..=j) reversed, then (j+1..=k) reversed.
        assert_eq!(moved.points[1], tour.points[2]);
        assert_eq!(moved.points[2], tour.points[1]);
        assert_eq!(moved.points[3], tour.points[4]);
        assert_eq!(moved.points[4], tour.points[3]);
    }
}
