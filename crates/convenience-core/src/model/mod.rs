//! Value objects consumed and produced by the scoring pipeline.

pub mod categories;
pub mod context;
pub mod distribution;
pub mod economics;
pub mod evaluation;
pub mod fields;
pub mod option;

pub use categories::{Availability, DayType, StressTolerance, Urgency, Weather};
pub use context::Context;
pub use distribution::DistributionSpec;
pub use economics::TimeEconomics;
pub use evaluation::{EvaluationResult, ScoreBreakdown};
pub use fields::OptionField;
pub use option::{DecisionOption, OpportunityEntry};
