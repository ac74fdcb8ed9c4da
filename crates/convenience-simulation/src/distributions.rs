//! Compiled sampling distributions for option fields.

use convenience_core::errors::SimulationError;
use convenience_core::model::DistributionSpec;
use rand::distributions::{Distribution, Uniform};
use rand::RngCore;
use statrs::distribution::Normal;

/// A validated [`DistributionSpec`] ready to draw from.
///
/// Degenerate specs (`lo == hi`, `stdev == 0`) compile to a constant so
/// they reproduce the base value exactly.
#[derive(Debug, Clone)]
pub enum FieldDistribution {
    Constant(f64),
    Uniform(Uniform<f64>),
    Normal(Normal),
}

impl FieldDistribution {
    /// Validate and compile `spec` for the option field named `field`.
    pub fn compile(spec: &DistributionSpec, field: &str) -> Result<Self, SimulationError> {
        spec.validate(field)?;
        if spec.is_degenerate() {
            return Ok(Self::Constant(spec.mean()));
        }
        match *spec {
            DistributionSpec::Uniform(lo, hi) => Ok(Self::Uniform(Uniform::new_inclusive(lo, hi))),
            DistributionSpec::Normal(mean, stdev) => Normal::new(mean, stdev)
                .map(Self::Normal)
                .map_err(|e| SimulationError::InvalidDistribution {
                    field: field.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    pub fn sample(&self, rng: &mut dyn RngCore) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::Uniform(u) => u.sample(rng),
            Self::Normal(n) => n.sample(rng),
        }
    }
}
