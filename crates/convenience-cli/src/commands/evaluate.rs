use std::path::Path;

use anyhow::Result;
use convenience_core::traits::IScorer;
use convenience_core::{ConvenienceConfig, Scenario};

use crate::output::{self, Format};

pub fn run(
    config: &ConvenienceConfig,
    scenario: &Path,
    w_financial: Option<f64>,
    format: Format,
) -> Result<()> {
    let scenario = super::load_scenario(scenario)?;
    evaluate(config, &scenario, w_financial, format)
}

pub(crate) fn evaluate(
    config: &ConvenienceConfig,
    scenario: &Scenario,
    w_financial: Option<f64>,
    format: Format,
) -> Result<()> {
    let engine = super::scenario_engine(config, scenario, w_financial);
    let result = engine.evaluate(&scenario.option, &scenario.economics, &scenario.context)?;

    match format {
        Format::Json => output::print_json(&result)?,
        Format::Table => output::print_table(
            &format!("{} (w_financial = {})", result.option.name, engine.w_financial()),
            result.breakdown.entries(),
        ),
    }
    Ok(())
}
