//! Local search engines improving a tour by edge-exchange moves.
//!
//! Both engines sweep the tour anchor by anchor, keep the single best
//! improving move per anchor, and apply it immediately so later anchors in
//! the same sweep see the updated tour. A sweep that applies no move means
//! the tour is locally optimal for that neighborhood.

pub mod moves;
pub mod three_opt;
pub mod two_opt;

pub use three_opt::ThreeOpt;
pub use two_opt::TwoOpt;

use serde::{Deserialize, Serialize};

/// Why a sweep engine stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// A full sweep applied no move; the tour is a local optimum.
    Converged,
    /// The comparison budget or the wall-clock limit ran out first.
    BudgetExhausted,
}

/// Statistics about a finished local search run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub termination: Termination,
    /// Completed anchor sweeps.
    pub sweeps: u64,
    /// Inner-loop delta evaluations performed.
    pub comparisons: u64,
    /// Moves applied to the tour.
    pub moves: u64,
}

impl SearchOutcome {
    pub(crate) fn new(termination: Termination, sweeps: u64, comparisons: u64, moves: u64) -> Self {
        SearchOutcome {
            termination,
            sweeps,
            comparisons,
            moves,
        }
    }
}
