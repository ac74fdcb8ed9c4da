/// Monte Carlo and sensitivity errors.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("run count must be at least 1, got {runs}")]
    InvalidRuns { runs: usize },

    #[error("invalid distribution for {field}: {reason}")]
    InvalidDistribution { field: String, reason: String },

    #[error("finite-difference delta must be positive and finite, got {delta}")]
    InvalidDelta { delta: f64 },
}
