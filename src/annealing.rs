//! Simulated annealing over random 2-opt perturbations.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::AnnealingConfig;
use crate::local_search::moves::{apply_two_opt, two_opt_delta};
use crate::tour::Tour;

/// Statistics about a finished annealing run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnnealingOutcome {
    /// Perturbation steps executed.
    pub iterations: u64,
    /// Steps whose swap was applied.
    pub accepted: u64,
    /// Temperature after the last cooling step.
    pub final_temperature: f64,
}

/// A fixed-length stochastic walk meant to escape 2-opt local optima,
/// typically alternated with a following [`TwoOpt`](crate::TwoOpt) pass.
///
/// Not a neighborhood search: it runs for exactly the configured number of
/// iterations regardless of convergence. Worsening swaps are accepted with
/// the Metropolis probability `exp(-delta / temperature)`, and the
/// temperature cools after every step.
pub struct Annealing {
    pub config: AnnealingConfig,
}

impl Annealing {
    /// Create a new annealing engine with the given configuration.
    pub fn new(config: AnnealingConfig) -> Self {
        Annealing { config }
    }

    /// Run the walk, mutating the tour in place.
    ///
    /// The caller supplies the random source, so a seeded generator makes
    /// the whole run reproducible. Each step samples two distinct positions
    /// uniformly without replacement, evaluates the 2-opt swap of the
    /// (min, max) pair, applies it when improving or when the Metropolis
    /// draw passes, then cools:
    ///
    /// `temperature *= (1 - (step+1)/iterations)^0.25`
    ///
    /// Tours with fewer than two points are returned unchanged.
    pub fn optimize<R: Rng>(&self, tour: &mut Tour, rng: &mut R) -> AnnealingOutcome {
        let n = tour.len();
        let total = self.config.iterations;
        let mut temperature = self.config.initial_temperature;

        if n < 2 || total == 0 {
            return AnnealingOutcome {
                iterations: 0,
                accepted: 0,
                final_temperature: temperature,
            };
        }

        let mut accepted = 0u64;
        let mut length = tour.total_length();

        for step in 0..total {
            let pair = index::sample(rng, n, 2);
            let (a, b) = (pair.index(0), pair.index(1));
            let (lo, hi) = if a < b { (a, b) } else { (b, a) };

            let delta = two_opt_delta(tour, lo, hi);
            if delta < 0.0 || (-delta / temperature).exp() > rng.gen::<f64>() {
                apply_two_opt(tour, lo, hi);
                accepted += 1;
                length += delta;
                log::trace!("annealing step {}: length {:.2}", step, length);
            }

            temperature *= (1.0 - (step + 1) as f64 / total as f64).powf(0.25);
        }

        AnnealingOutcome {
            iterations: total,
            accepted,
            final_temperature: temperature,
        }
    }
}
