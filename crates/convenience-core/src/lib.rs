//! # convenience-core
//!
//! Foundation crate for the convenience score engine.
//! Defines the option/context data model, category tables, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ConvenienceConfig, Scenario};
pub use errors::{ConvenienceError, ConvenienceResult};
pub use model::{
    Availability, Context, DayType, DecisionOption, DistributionSpec, EvaluationResult,
    OpportunityEntry, OptionField, ScoreBreakdown, StressTolerance, TimeEconomics, Urgency,
    Weather,
};
