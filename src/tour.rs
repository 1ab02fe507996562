//! Tour representation: an ordered, cyclic visiting sequence of points.

use crate::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An ordered sequence of points interpreted as a cycle: after the last
/// point the tour returns to the first.
///
/// Every improvement stage consumes a tour and leaves a permutation of the
/// same points behind; no stage ever adds or drops a point.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub points: Vec<Point>,
}

impl Tour {
    /// Create a tour visiting the given points in order.
    pub fn new(points: Vec<Point>) -> Self {
        Tour { points }
    }

    /// Number of points in the tour.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the tour is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Calculate the total length of the tour, including the closing edge
    /// from the last point back to the first. An empty tour has length 0.
    ///
    /// This is the ground-truth cost; every move delta in the local search
    /// must agree with it.
    pub fn total_length(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }

        let mut total = 0.0;
        for i in 0..self.points.len() - 1 {
            total += self.points[i].distance(&self.points[i + 1]);
        }
        total += self.points[self.points.len() - 1].distance(&self.points[0]);

        total
    }
}

impl From<Vec<Point>> for Tour {
    fn from(points: Vec<Point>) -> Self {
        Tour::new(points)
    }
}

impl fmt::Debug for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tour ({} points):", self.points.len())?;
        writeln!(f, "  Length: {:.2}", self.total_length())?;

        for (i, point) in self.points.iter().enumerate() {
            writeln!(f, "  {}: ({:.2}, {:.2})", i, point.x, point.y)?;
        }

        Ok(())
    }
}
