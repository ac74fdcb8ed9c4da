//! # convenience-scoring
//!
//! Five-factor benefit aggregation normalized by baseline cost:
//! time × stress × opportunity × comfort × reliability benefits, minus the
//! extra cost, over the base cost, scaled by the financial weight.

pub mod engine;
pub mod factors;
pub mod formula;
pub mod multipliers;
pub mod rate;

pub use engine::ScoringEngine;
pub use formula::evaluate;
