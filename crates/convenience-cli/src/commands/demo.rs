use anyhow::Result;
use convenience_core::model::{DistributionSpec, OptionField};
use convenience_core::{ConvenienceConfig, Scenario};

use super::{evaluate, sensitivity, simulate};
use crate::output::Format;

const DEMO_SEED: u64 = 42;

/// Taxi versus bus: score, sensitivities, then a seeded simulation with an
/// uncertain fare and breakdown risk.
pub fn run(config: &ConvenienceConfig, format: Format) -> Result<()> {
    let mut scenario = Scenario::taxi_demo();
    scenario
        .distributions
        .insert(OptionField::ExtraCost, DistributionSpec::Uniform(10.0, 14.0));
    scenario
        .distributions
        .insert(OptionField::FailureProbability, DistributionSpec::Normal(0.1, 0.05));

    evaluate::evaluate(config, &scenario, None, format)?;
    println!();
    sensitivity::analyze(config, &scenario, &sensitivity::Target::All, None, format)?;
    println!();
    simulate::simulate(
        config,
        &scenario,
        None,
        Some(config.simulation.seed.unwrap_or(DEMO_SEED)),
        format,
    )
}
