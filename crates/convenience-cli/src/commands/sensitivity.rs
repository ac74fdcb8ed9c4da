use std::path::Path;

use anyhow::Result;
use convenience_core::model::OptionField;
use convenience_core::{ConvenienceConfig, Scenario};
use convenience_simulation::SensitivityAnalyzer;

use crate::output::{self, Format};

#[derive(Debug, Clone)]
pub enum Target {
    Field(String),
    All,
}

pub fn run(
    config: &ConvenienceConfig,
    scenario: &Path,
    target: Target,
    delta: Option<f64>,
    format: Format,
) -> Result<()> {
    let scenario = super::load_scenario(scenario)?;
    analyze(config, &scenario, &target, delta, format)
}

pub(crate) fn analyze(
    config: &ConvenienceConfig,
    scenario: &Scenario,
    target: &Target,
    delta: Option<f64>,
    format: Format,
) -> Result<()> {
    let analyzer = SensitivityAnalyzer::new(delta.unwrap_or(config.sensitivity.delta))?;
    let engine = super::scenario_engine(config, scenario, None);
    let (option, economics, context) = (&scenario.option, &scenario.economics, &scenario.context);

    let results = match target {
        Target::All => analyzer.all_fields(&engine, option, economics, context),
        Target::Field(name) => {
            let field: OptionField = name.parse()?;
            vec![analyzer.field_sensitivity(&engine, option, economics, context, field)]
        }
    };

    match format {
        Format::Json => output::print_json(&results)?,
        Format::Table => output::print_table(
            &format!("d(score)/d(field), delta = {}", analyzer.delta()),
            results.iter().map(|s| (s.field.name(), s.derivative)),
        ),
    }
    Ok(())
}
