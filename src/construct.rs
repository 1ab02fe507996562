//! Greedy nearest-neighbor tour construction.

use crate::point::Point;
use crate::tour::Tour;

/// Build an initial tour by the nearest-neighbor heuristic.
///
/// Starts at the first point in input order, then repeatedly appends the
/// unvisited point closest to the last appended one. Ties are broken in
/// favor of the first-encountered point. Returns an empty tour for empty
/// input.
///
/// O(n²): each step scans all remaining points. Visited points are tracked
/// with a mask over the input slice instead of removing them, so a step
/// never pays for element removal.
pub fn nearest_neighbor(points: &[Point]) -> Tour {
    if points.is_empty() {
        return Tour::new(Vec::new());
    }

    let n = points.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    let mut current = 0;
    visited[0] = true;
    order.push(points[0]);

    for _ in 1..n {
        let nearest = find_nearest(points, &visited, current);
        visited[nearest] = true;
        order.push(points[nearest]);
        current = nearest;
    }

    Tour::new(order)
}

/// Find the unvisited point nearest to `from`. Strict `<` keeps the
/// first-encountered point on ties.
fn find_nearest(points: &[Point], visited: &[bool], from: usize) -> usize {
    let mut nearest = usize::MAX;
    let mut min_distance = f64::INFINITY;

    for (i, point) in points.iter().enumerate() {
        if visited[i] {
            continue;
        }

        let distance = points[from].distance(point);
        if distance < min_distance {
            min_distance = distance;
            nearest = i;
        }
    }

    nearest
}
