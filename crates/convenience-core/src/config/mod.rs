//! Configuration for the convenience engine.
//! TOML engine settings (`ConvenienceConfig`) and JSON/TOML scenario input
//! (`Scenario`).

pub mod defaults;
mod convenience_config;
mod observability_config;
mod scenario;
mod scoring_config;
mod simulation_config;

pub use convenience_config::ConvenienceConfig;
pub use observability_config::ObservabilityConfig;
pub use scenario::Scenario;
pub use scoring_config::ScoringConfig;
pub use simulation_config::{SensitivityConfig, SimulationConfig};
