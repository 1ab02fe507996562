//! Configuration parameters for the improvement stages.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration settings for the 2-opt sweep engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwoOptConfig {
    /// Minimum magnitude of a negative delta to accept as an improvement;
    /// guards against floating-point noise accepting zero-delta moves.
    pub threshold: f64,
    /// Budget on inner-loop delta evaluations before forced termination.
    pub max_comparisons: u64,
    /// Optional wall-clock limit, checked between anchors.
    pub time_limit: Option<Duration>,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        TwoOptConfig {
            threshold: 1e-6,
            max_comparisons: 1_000_000,
            time_limit: None,
        }
    }
}

impl TwoOptConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        TwoOptConfig::default()
    }

    /// Set the improvement threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the comparison budget.
    pub fn with_max_comparisons(mut self, max_comparisons: u64) -> Self {
        self.max_comparisons = max_comparisons;
        self
    }

    /// Set the wall-clock limit.
    pub fn with_time_limit(mut self, duration: Duration) -> Self {
        self.time_limit = Some(duration);
        self
    }
}

/// Configuration settings for the 3-opt sweep engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreeOptConfig {
    /// Minimum magnitude of a negative delta to accept as an improvement.
    pub threshold: f64,
    /// Budget on inner-loop delta evaluations before forced termination.
    pub max_comparisons: u64,
}

impl Default for ThreeOptConfig {
    fn default() -> Self {
        ThreeOptConfig {
            threshold: 1e-12,
            max_comparisons: 10_000_000_000,
        }
    }
}

impl ThreeOptConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        ThreeOptConfig::default()
    }

    /// Set the improvement threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the comparison budget.
    pub fn with_max_comparisons(mut self, max_comparisons: u64) -> Self {
        self.max_comparisons = max_comparisons;
        self
    }
}

/// Configuration settings for the simulated annealing engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnealingConfig {
    /// Exact number of perturbation steps to run.
    pub iterations: u64,
    /// Starting value for the cooling schedule.
    pub initial_temperature: f64,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        AnnealingConfig {
            iterations: 100_000,
            initial_temperature: 100.0,
        }
    }
}

impl AnnealingConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        AnnealingConfig::default()
    }

    /// Set the number of perturbation steps.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the initial temperature.
    pub fn with_initial_temperature(mut self, temperature: f64) -> Self {
        self.initial_temperature = temperature;
        self
    }
}
