//! Aggregate statistics over a sequence of sampled scores.

use convenience_core::constants::Z_95;
use convenience_core::errors::SimulationError;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Summary of an empirical score distribution.
///
/// The confidence interval is the normal approximation
/// `mean ± 1.96 × stdev / √N`. It is asymptotic: loose for small N or
/// skewed scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub runs: usize,
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation (divides by N).
    pub stdev: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

impl SimulationSummary {
    pub const KEYS: [&'static str; 5] = ["mean", "median", "stdev", "ci_low", "ci_high"];

    /// Summarize `samples`. Order of the samples does not matter.
    pub fn from_samples(samples: &[f64]) -> Result<Self, SimulationError> {
        let n = samples.len();
        if n == 0 {
            return Err(SimulationError::InvalidRuns { runs: 0 });
        }

        let mean = samples.iter().mean();
        let stdev = if n > 1 {
            samples.iter().population_std_dev()
        } else {
            0.0
        };
        let half_width = Z_95 * stdev / (n as f64).sqrt();

        Ok(Self {
            runs: n,
            mean,
            median: median(samples),
            stdev,
            ci_low: mean - half_width,
            ci_high: mean + half_width,
        })
    }

    /// Named statistics in display order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        let [mean, median, stdev, ci_low, ci_high] = Self::KEYS;
        [
            (mean, self.mean),
            (median, self.median),
            (stdev, self.stdev),
            (ci_low, self.ci_low),
            (ci_high, self.ci_high),
        ]
    }
}

/// Median of an unsorted, non-empty slice: middle value, or the mean of the
/// two middle values for even lengths.
fn median(samples: &[f64]) -> f64 {
    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}
