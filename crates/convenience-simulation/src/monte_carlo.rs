//! Monte Carlo simulation over resampled options.
//!
//! Runs execute sequentially. A seeded simulator owns its own `StdRng`, so
//! the same seed reproduces the same sample sequence; an unseeded one draws
//! from the thread-local generator.

use convenience_core::config::SimulationConfig;
use convenience_core::errors::SimulationError;
use convenience_core::traits::IScoreSampler;
use convenience_observability::simulation_span;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::{debug, info};

use crate::summary::SimulationSummary;

/// Invoke `run_fn` exactly `runs` times and summarize the results.
///
/// `run_fn` owns all sampling; this function only aggregates.
pub fn monte_carlo<F>(mut run_fn: F, runs: usize) -> Result<SimulationSummary, SimulationError>
where
    F: FnMut() -> f64,
{
    if runs < 1 {
        return Err(SimulationError::InvalidRuns { runs });
    }
    let samples: Vec<f64> = (0..runs).map(|_| run_fn()).collect();
    SimulationSummary::from_samples(&samples)
}

/// Monte Carlo simulator driving an [`IScoreSampler`].
#[derive(Debug, Clone)]
pub struct MonteCarloSimulator {
    /// Number of runs.
    runs: usize,
    /// Random seed for reproducibility (None = thread-local generator).
    seed: Option<u64>,
}

impl MonteCarloSimulator {
    /// Create a simulator with the given run count. A zero count is reported
    /// when the simulation runs, not here.
    pub fn new(runs: usize) -> Self {
        Self { runs, seed: None }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            runs: config.runs,
            seed: config.seed,
        }
    }

    /// Set a deterministic seed for reproducible results.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw `runs` scores from `sampler`, in run order.
    pub fn samples(&self, sampler: &dyn IScoreSampler) -> Result<Vec<f64>, SimulationError> {
        if self.runs < 1 {
            return Err(SimulationError::InvalidRuns { runs: self.runs });
        }
        let mut samples = Vec::with_capacity(self.runs);
        match self.seed {
            Some(seed) => {
                let mut rng = StdRng::seed_from_u64(seed);
                Self::collect(sampler, &mut rng, self.runs, &mut samples);
            }
            None => {
                let mut rng = rand::thread_rng();
                Self::collect(sampler, &mut rng, self.runs, &mut samples);
            }
        }
        Ok(samples)
    }

    /// Run the simulation and summarize the score distribution.
    pub fn run(&self, sampler: &dyn IScoreSampler) -> Result<SimulationSummary, SimulationError> {
        let _span = simulation_span!(self.runs, self.seed.is_some()).entered();
        info!(runs = self.runs, seed = ?self.seed, "monte carlo simulation started");

        let samples = self.samples(sampler)?;
        let summary = SimulationSummary::from_samples(&samples)?;

        info!(
            mean = summary.mean,
            median = summary.median,
            stdev = summary.stdev,
            "monte carlo simulation finished"
        );
        Ok(summary)
    }

    fn collect(
        sampler: &dyn IScoreSampler,
        rng: &mut dyn RngCore,
        runs: usize,
        out: &mut Vec<f64>,
    ) {
        for i in 0..runs {
            let score = sampler.sample_score(rng);
            if !score.is_finite() {
                debug!(run = i, score, "non-finite sampled score");
            }
            out.push(score);
        }
    }
}

impl Default for MonteCarloSimulator {
    fn default() -> Self {
        Self::new(convenience_core::constants::DEFAULT_SIMULATION_RUNS)
    }
}
