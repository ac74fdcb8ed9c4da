//! # convenience-learning
//!
//! Learns which options a user actually picks: a logistic choice model with
//! online gradient updates and an experience-based confidence, plus the
//! per-decision-type context importance table.

pub mod context_weights;
pub mod logistic;

pub use context_weights::{weighted_context_importance, ContextWeights, DecisionType};
pub use logistic::LogisticModel;
