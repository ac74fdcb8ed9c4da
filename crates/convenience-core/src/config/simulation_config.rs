use serde::{Deserialize, Serialize};

use super::defaults;

/// Monte Carlo configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of runs per simulation.
    pub runs: usize,
    /// Fixed seed for reproducible runs. `None` uses the thread-local generator.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            runs: defaults::DEFAULT_RUNS,
            seed: None,
        }
    }
}

/// Finite-difference sensitivity configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SensitivityConfig {
    /// Half-width of the symmetric stencil.
    pub delta: f64,
}

impl Default for SensitivityConfig {
    fn default() -> Self {
        Self {
            delta: defaults::DEFAULT_DELTA,
        }
    }
}
