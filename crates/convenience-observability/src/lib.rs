//! # convenience-observability
//!
//! Tracing subscriber installation and span macros shared by the scoring,
//! simulation, and learning crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, spans};
