use serde::{Deserialize, Serialize};

use crate::errors::SimulationError;

/// How a sampled option field is drawn on each Monte Carlo run.
///
/// Serialized externally tagged: `{"uniform": [lo, hi]}` or
/// `{"normal": [mean, stdev]}`. Any other shape fails to deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionSpec {
    Uniform(f64, f64),
    Normal(f64, f64),
}

impl DistributionSpec {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Uniform(..) => "uniform",
            Self::Normal(..) => "normal",
        }
    }

    /// Analytic mean of the distribution.
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Uniform(lo, hi) => (lo + hi) / 2.0,
            Self::Normal(mean, _) => mean,
        }
    }

    /// True when every draw yields the same value.
    pub fn is_degenerate(&self) -> bool {
        match *self {
            Self::Uniform(lo, hi) => lo == hi,
            Self::Normal(_, stdev) => stdev == 0.0,
        }
    }

    /// Reject parameters that cannot be sampled. `field` names the option
    /// field the spec is attached to, for the error message.
    pub fn validate(&self, field: &str) -> Result<(), SimulationError> {
        let invalid = |reason: String| SimulationError::InvalidDistribution {
            field: field.to_string(),
            reason,
        };
        match *self {
            Self::Uniform(lo, hi) => {
                if !lo.is_finite() || !hi.is_finite() {
                    return Err(invalid(format!("uniform bounds must be finite, got [{lo}, {hi}]")));
                }
                if lo > hi {
                    return Err(invalid(format!("uniform lower bound {lo} exceeds upper bound {hi}")));
                }
                // The sampler scales draws by the span; it must stay finite.
                let span = hi - lo;
                if !(span.is_finite() && span <= f64::MAX / 2.0) {
                    return Err(invalid(format!("uniform range [{lo}, {hi}] is too wide to sample")));
                }
            }
            Self::Normal(mean, stdev) => {
                if !mean.is_finite() {
                    return Err(invalid(format!("normal mean must be finite, got {mean}")));
                }
                if !stdev.is_finite() || stdev < 0.0 {
                    return Err(invalid(format!(
                        "normal stdev must be finite and non-negative, got {stdev}"
                    )));
                }
            }
        }
        Ok(())
    }
}
