//! # convenience-simulation
//!
//! Uncertainty analysis over the scoring pipeline:
//! symmetric finite-difference sensitivity, per-field option sampling, and
//! Monte Carlo aggregation (mean, median, population stdev, 95% normal CI).

pub mod distributions;
pub mod monte_carlo;
pub mod sampler;
pub mod sensitivity;
pub mod summary;

pub use distributions::FieldDistribution;
pub use monte_carlo::{monte_carlo, MonteCarloSimulator};
pub use sampler::OptionSampler;
pub use sensitivity::{sensitivity, FieldSensitivity, SensitivityAnalyzer};
pub use summary::SimulationSummary;
