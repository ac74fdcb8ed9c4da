pub mod demo;
pub mod evaluate;
pub mod sensitivity;
pub mod simulate;

use std::path::Path;

use anyhow::{Context, Result};
use convenience_core::{ConvenienceConfig, Scenario};
use convenience_scoring::ScoringEngine;

pub(crate) fn load_scenario(path: &Path) -> Result<Scenario> {
    Scenario::load(path).with_context(|| format!("failed to load scenario {}", path.display()))
}

/// Engine for `scenario`. Weight precedence: explicit override, then the
/// scenario's own weight, then `[scoring] w_financial` from the config.
pub(crate) fn scenario_engine(
    config: &ConvenienceConfig,
    scenario: &Scenario,
    w_financial: Option<f64>,
) -> ScoringEngine {
    let w_financial =
        w_financial.unwrap_or_else(|| scenario.w_financial_or(config.scoring.w_financial));
    ScoringEngine::from_config(&config.scoring).with_w_financial(w_financial)
}
