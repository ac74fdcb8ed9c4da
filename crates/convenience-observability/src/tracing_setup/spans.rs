//! Span definitions per operation: scoring, simulation, sensitivity, learning.

/// Create a scoring span.
#[macro_export]
macro_rules! scoring_span {
    ($option:expr) => {
        tracing::debug_span!("convenience.scoring", option = %$option)
    };
}

/// Create a Monte Carlo simulation span.
#[macro_export]
macro_rules! simulation_span {
    ($runs:expr, $seeded:expr) => {
        tracing::info_span!("convenience.simulation", runs = $runs, seeded = $seeded)
    };
}

/// Create a sensitivity span.
#[macro_export]
macro_rules! sensitivity_span {
    ($parameter:expr, $delta:expr) => {
        tracing::debug_span!("convenience.sensitivity", parameter = %$parameter, delta = $delta)
    };
}

/// Create a learning span.
#[macro_export]
macro_rules! learning_span {
    ($features:expr) => {
        tracing::debug_span!("convenience.learning", features = $features)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const SCORING: &str = "convenience.scoring";
    pub const SIMULATION: &str = "convenience.simulation";
    pub const SENSITIVITY: &str = "convenience.sensitivity";
    pub const LEARNING: &str = "convenience.learning";
}
