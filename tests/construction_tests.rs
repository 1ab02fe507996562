//! Unit tests for nearest-neighbor tour construction.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tsp_ls::{construct, Point, Tour};

/// Generate a reproducible scatter of points.
fn random_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Point::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
        .collect()
}

/// Check that a tour visits exactly the given points, each once.
fn assert_permutation(tour: &Tour, points: &[Point]) {
    assert_eq!(tour.len(), points.len());

    let mut expected: Vec<(u64, u64)> = points
        .iter()
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect();
    let mut actual: Vec<(u64, u64)> = tour
        .points
        .iter()
        .map(|p| (p.x.to_bits(), p.y.to_bits()))
        .collect();
    expected.sort();
    actual.sort();

    assert_eq!(actual, expected);
}

#[test]
fn test_empty_input() {
    let tour = construct::nearest_neighbor(&[]);
    assert!(tour.is_empty());
    assert_eq!(tour.total_length(), 0.0);
}

#[test]
fn test_two_point_tour() {
    let p0 = Point::new(0.0, 0.0);
    let p1 = Point::new(5.0, 12.0);
    let tour = construct::nearest_neighbor(&[p0, p1]);

    assert_eq!(tour.points, vec![p0, p1]);
    assert!((tour.total_length() - 2.0 * 13.0).abs() < 1e-12);
}

#[test]
fn test_starts_at_first_input_point() {
    let points = random_points(50, 3);
    let tour = construct::nearest_neighbor(&points);
    assert_eq!(tour.points[0], points[0]);
}

#[test]
fn test_tour_is_permutation_of_input() {
    for seed in 0..5 {
        let points = random_points(120, seed);
        let tour = construct::nearest_neighbor(&points);
        assert_permutation(&tour, &points);
    }
}

#[test]
fn test_unit_square_scenario() {
    // From (0, 0) the greedy walk follows the boundary, which is optimal.
    let points = [
        Point::new(0.0, 0.0),
        Point::new(0.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 0.0),
    ];
    let tour = construct::nearest_neighbor(&points);

    assert_eq!(tour.points, points.to_vec());
    assert!((tour.total_length() - 4.0).abs() < 1e-12);
}

#[test]
fn test_each_step_picks_the_nearest_remaining_point() {
    // Points on a line: greedy from the left end visits them in order.
    let points: Vec<Point> = (0..10).map(|i| Point::new(i as f64, 0.0)).collect();
    let tour = construct::nearest_neighbor(&points);
    assert_eq!(tour.points, points);
}
