use serde::{Deserialize, Serialize};

use super::defaults;

/// Scoring subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Floor for divisors (work hours, base cost).
    pub epsilon: f64,
    /// Default financial-axis weight when a scenario does not set one.
    pub w_financial: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            epsilon: defaults::DEFAULT_EPSILON,
            w_financial: defaults::DEFAULT_W_FINANCIAL,
        }
    }
}
