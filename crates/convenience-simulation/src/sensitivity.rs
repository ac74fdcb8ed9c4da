//! Finite-difference sensitivity.
//!
//! ```text
//! ∂f/∂p ≈ (f(p + δ) − f(p − δ)) / 2δ
//! ```
//!
//! The default δ = 1e-4 is a general-purpose choice. Very small δ loses
//! precision to cancellation; large δ blurs curvature. Tune per parameter
//! scale.

use convenience_core::config::SensitivityConfig;
use convenience_core::constants::DEFAULT_SENSITIVITY_DELTA;
use convenience_core::errors::SimulationError;
use convenience_core::model::{Context, DecisionOption, OptionField, TimeEconomics};
use convenience_observability::sensitivity_span;
use convenience_scoring::ScoringEngine;
use serde::{Deserialize, Serialize};

/// Symmetric finite-difference derivative of `f` at `p`.
pub fn sensitivity<F>(f: F, p: f64, delta: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(p + delta) - f(p - delta)) / (2.0 * delta)
}

/// [`sensitivity`] with δ = 1e-4.
pub fn sensitivity_default<F>(f: F, p: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    sensitivity(f, p, DEFAULT_SENSITIVITY_DELTA)
}

/// Derivative of the score with respect to one option field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldSensitivity {
    pub field: OptionField,
    /// Field value the derivative was taken at.
    pub value: f64,
    pub derivative: f64,
}

/// Score sensitivities over option fields with a validated δ.
#[derive(Debug, Clone)]
pub struct SensitivityAnalyzer {
    delta: f64,
}

impl SensitivityAnalyzer {
    pub fn new(delta: f64) -> Result<Self, SimulationError> {
        if !(delta.is_finite() && delta > 0.0) {
            return Err(SimulationError::InvalidDelta { delta });
        }
        Ok(Self { delta })
    }

    pub fn from_config(config: &SensitivityConfig) -> Result<Self, SimulationError> {
        Self::new(config.delta)
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Derivative of an arbitrary single-parameter function.
    pub fn derivative<F>(&self, f: F, p: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        sensitivity(f, p, self.delta)
    }

    /// ∂score/∂field at the option's current value, everything else fixed.
    pub fn field_sensitivity(
        &self,
        engine: &ScoringEngine,
        option: &DecisionOption,
        economics: &TimeEconomics,
        context: &Context,
        field: OptionField,
    ) -> FieldSensitivity {
        let _span = sensitivity_span!(field, self.delta).entered();
        let value = field.get(option);
        let score_at = |p: f64| {
            let perturbed = field.with_value(option, p);
            engine.score_value(&perturbed, economics, context)
        };
        FieldSensitivity {
            field,
            value,
            derivative: self.derivative(score_at, value),
        }
    }

    /// Sensitivities for every numeric option field, in field order.
    pub fn all_fields(
        &self,
        engine: &ScoringEngine,
        option: &DecisionOption,
        economics: &TimeEconomics,
        context: &Context,
    ) -> Vec<FieldSensitivity> {
        OptionField::ALL
            .iter()
            .map(|f| self.field_sensitivity(engine, option, economics, context, *f))
            .collect()
    }
}

impl Default for SensitivityAnalyzer {
    fn default() -> Self {
        Self {
            delta: DEFAULT_SENSITIVITY_DELTA,
        }
    }
}
