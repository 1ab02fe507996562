//! # TSP-LS
//!
//! Local search heuristics for the Euclidean Traveling Salesman Problem:
//! greedy tour construction followed by 2-opt, 3-opt and simulated
//! annealing improvement.
//!
//! The crate is a pure in-memory engine. It accepts a sequence of (x, y)
//! points, builds an initial [`Tour`] with [`construct::nearest_neighbor`],
//! and improves it with any combination of the three engines — each
//! consumes a tour and leaves an improved permutation of the same points
//! behind. Stage ordering, iteration budgets and file handling belong to
//! the caller.
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use tsp_ls::{construct, Annealing, AnnealingConfig, Point, TwoOpt, TwoOptConfig};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//!     Point::new(1.0, 0.0),
//! ];
//!
//! let mut tour = construct::nearest_neighbor(&points);
//! TwoOpt::new(TwoOptConfig::new()).optimize(&mut tour);
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(7);
//! Annealing::new(AnnealingConfig::new().with_iterations(1000)).optimize(&mut tour, &mut rng);
//! TwoOpt::new(TwoOptConfig::new()).optimize(&mut tour);
//!
//! assert!((tour.total_length() - 4.0).abs() < 1e-9);
//! ```

pub mod annealing;
pub mod config;
pub mod construct;
pub mod local_search;
pub mod point;
pub mod tour;

pub use annealing::{Annealing, AnnealingOutcome};
pub use config::{AnnealingConfig, ThreeOptConfig, TwoOptConfig};
pub use local_search::{SearchOutcome, Termination, ThreeOpt, TwoOpt};
pub use point::Point;
pub use tour::Tour;
