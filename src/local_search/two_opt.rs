//! 2-opt sweep engine: exhaustive neighborhood search to a local optimum.

use std::time::Instant;

use crate::config::TwoOptConfig;
use crate::tour::Tour;

use super::moves::{apply_two_opt, two_opt_delta};
use super::{SearchOutcome, Termination};

/// Improves a tour by repeatedly applying the best 2-opt move per anchor.
pub struct TwoOpt {
    pub config: TwoOptConfig,
}

impl TwoOpt {
    /// Create a new 2-opt engine with the given configuration.
    pub fn new(config: TwoOptConfig) -> Self {
        TwoOpt { config }
    }

    /// Run sweeps over the tour until no anchor has an improving move, or a
    /// budget runs out. The tour's total length never increases.
    ///
    /// One sweep visits every anchor `i`; for each it scans all partners
    /// `j >= i + 2` (the adjacent edge is skipped, its delta is provably
    /// zero), keeps the most negative delta, and applies that swap at once
    /// when it clears the threshold. Later anchors see the updated tour.
    ///
    /// The comparison budget is checked between sweeps, the wall-clock
    /// limit between anchors.
    pub fn optimize(&self, tour: &mut Tour) -> SearchOutcome {
        let n = tour.len();
        let start = Instant::now();

        let mut sweeps = 0u64;
        let mut comparisons = 0u64;
        let mut moves = 0u64;

        let mut improvement = true;
        while improvement && comparisons < self.config.max_comparisons {
            improvement = false;

            for i in 0..n.saturating_sub(1) {
                if let Some(limit) = self.config.time_limit {
                    if start.elapsed() >= limit {
                        log::debug!(
                            "2-opt: time limit hit after {} sweeps, {} moves",
                            sweeps,
                            moves
                        );
                        return SearchOutcome::new(
                            Termination::BudgetExhausted,
                            sweeps,
                            comparisons,
                            moves,
                        );
                    }
                }

                let mut best_delta = 0.0;
                let mut best_partner = None;

                for j in i + 2..n {
                    let delta = two_opt_delta(tour, i, j);
                    comparisons += 1;

                    if delta < -self.config.threshold && delta < best_delta {
                        best_delta = delta;
                        best_partner = Some(j);
                    }
                }

                if let Some(j) = best_partner {
                    apply_two_opt(tour, i, j);
                    moves += 1;
                    improvement = true;
                }
            }

            sweeps += 1;
            log::debug!(
                "2-opt sweep {}: {} comparisons, {} moves, length {:.2}",
                sweeps,
                comparisons,
                moves,
                tour.total_length()
            );
        }

        let termination = if improvement {
            Termination::BudgetExhausted
        } else {
            Termination::Converged
        };

        SearchOutcome::new(termination, sweeps, comparisons, moves)
    }
}
