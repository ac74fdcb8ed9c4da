//! Error handling for the convenience engine.
//! One error enum per subsystem, `thiserror` only.

mod config_error;
mod learning_error;
mod simulation_error;

pub use config_error::ConfigError;
pub use learning_error::LearningError;
pub use simulation_error::SimulationError;

/// Top-level error type for the convenience engine.
#[derive(Debug, thiserror::Error)]
pub enum ConvenienceError {
    #[error("invalid {field} category: {value:?}")]
    InvalidCategory { field: &'static str, value: String },

    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("unknown option field: {name:?}")]
    UnknownField { name: String },

    #[error("simulation error: {0}")]
    Simulation(#[from] SimulationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("learning error: {0}")]
    Learning(#[from] LearningError),
}

/// Convenience type alias used throughout the workspace.
pub type ConvenienceResult<T> = Result<T, ConvenienceError>;
