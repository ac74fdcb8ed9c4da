use std::path::Path;

use anyhow::Result;
use convenience_core::{ConvenienceConfig, Scenario};
use convenience_scoring::ScoringEngine;
use convenience_simulation::{MonteCarloSimulator, OptionSampler};
use tracing::warn;

use crate::output::{self, Format};

pub fn run(
    config: &ConvenienceConfig,
    scenario: &Path,
    runs: Option<usize>,
    seed: Option<u64>,
    format: Format,
) -> Result<()> {
    let scenario = super::load_scenario(scenario)?;
    simulate(config, &scenario, runs, seed, format)
}

pub(crate) fn simulate(
    config: &ConvenienceConfig,
    scenario: &Scenario,
    runs: Option<usize>,
    seed: Option<u64>,
    format: Format,
) -> Result<()> {
    let engine = ScoringEngine::from_config(&config.scoring);
    let sampler = OptionSampler::from_scenario(scenario, engine)?;

    let mut simulator = MonteCarloSimulator::new(runs.unwrap_or(config.simulation.runs));
    if let Some(seed) = seed.or(config.simulation.seed) {
        simulator = simulator.with_seed(seed);
    }
    if scenario.distributions.is_empty() {
        warn!(
            option = %scenario.option.name,
            "no distributions declared; every run yields the deterministic score"
        );
    }
    let summary = simulator.run(&sampler)?;

    match format {
        Format::Json => output::print_json(&summary)?,
        Format::Table => {
            let fields: Vec<_> = sampler.sampled_fields().map(|f| f.name()).collect();
            let seed = match simulator.seed() {
                Some(seed) => format!("seed {seed}"),
                None => "unseeded".to_string(),
            };
            output::print_table(
                &format!(
                    "{}: {} runs ({seed}) over [{}]",
                    scenario.option.name,
                    simulator.runs(),
                    fields.join(", ")
                ),
                summary.entries(),
            );
        }
    }
    Ok(())
}
