use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::categories::StressTolerance;
use crate::errors::{ConvenienceError, ConvenienceResult};

/// One activity the option makes possible, priced by expected value.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OpportunityEntry {
    /// Fraction of the activity that fits into the freed time, [0, 1].
    #[serde(rename = "A", default)]
    pub availability: f64,
    /// Monetary value of completing the activity.
    #[serde(rename = "V", default)]
    pub value: f64,
    /// Probability the activity actually happens, [0, 1].
    #[serde(rename = "P", default)]
    pub probability: f64,
}

impl OpportunityEntry {
    pub fn new(availability: f64, value: f64, probability: f64) -> Self {
        Self {
            availability,
            value,
            probability,
        }
    }
}

/// The option under evaluation (e.g. a taxi instead of the bus).
///
/// Costs are relative to a baseline: `base_cost` is the baseline price used
/// for normalization and `extra_cost` the premium paid on top of it (negative
/// for a saving).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub name: String,
    pub base_cost: f64,
    #[serde(default)]
    pub extra_cost: f64,
    #[serde(default)]
    pub time_saved_hours: f64,
    #[serde(default)]
    pub comfort_improvement: f64,
    #[serde(default)]
    pub comfort_weight: f64,
    #[serde(default)]
    pub reliability_premium: f64,
    #[serde(default)]
    pub failure_cost: f64,
    #[serde(default)]
    pub failure_probability: f64,
    #[serde(default)]
    pub stress_baseline: f64,
    #[serde(default)]
    pub stress_cost_per_point: f64,
    #[serde(default)]
    pub stress_tolerance: StressTolerance,
    /// Situational stress factors, e.g. crowding or unpredictability.
    #[serde(default)]
    pub stress_multipliers: BTreeMap<String, f64>,
    #[serde(default)]
    pub opportunity_catalog: BTreeMap<String, OpportunityEntry>,
}

impl DecisionOption {
    /// Create an option with only a name and baseline cost; everything else zeroed.
    pub fn new(name: impl Into<String>, base_cost: f64) -> Self {
        Self {
            name: name.into(),
            base_cost,
            extra_cost: 0.0,
            time_saved_hours: 0.0,
            comfort_improvement: 0.0,
            comfort_weight: 0.0,
            reliability_premium: 0.0,
            failure_cost: 0.0,
            failure_probability: 0.0,
            stress_baseline: 0.0,
            stress_cost_per_point: 0.0,
            stress_tolerance: StressTolerance::default(),
            stress_multipliers: BTreeMap::new(),
            opportunity_catalog: BTreeMap::new(),
        }
    }

    /// Check numeric ranges. Category fields are already closed enums.
    ///
    /// A non-positive `base_cost` is accepted: scoring floors it rather than
    /// failing.
    pub fn validate(&self) -> ConvenienceResult<()> {
        let scalars = [
            ("base_cost", self.base_cost),
            ("extra_cost", self.extra_cost),
            ("time_saved_hours", self.time_saved_hours),
            ("comfort_improvement", self.comfort_improvement),
            ("comfort_weight", self.comfort_weight),
            ("reliability_premium", self.reliability_premium),
            ("failure_cost", self.failure_cost),
            ("failure_probability", self.failure_probability),
            ("stress_baseline", self.stress_baseline),
            ("stress_cost_per_point", self.stress_cost_per_point),
        ];
        for (field, value) in scalars {
            require_finite(field, value)?;
        }
        require_unit_interval("failure_probability", self.failure_probability)?;

        for (name, weight) in &self.stress_multipliers {
            require_finite(&format!("stress_multipliers.{name}"), *weight)?;
        }
        for (name, entry) in &self.opportunity_catalog {
            require_unit_interval(
                &format!("opportunity_catalog.{name}.A"),
                entry.availability,
            )?;
            require_finite(&format!("opportunity_catalog.{name}.V"), entry.value)?;
            require_unit_interval(
                &format!("opportunity_catalog.{name}.P"),
                entry.probability,
            )?;
        }
        Ok(())
    }
}

fn require_finite(field: &str, value: f64) -> ConvenienceResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConvenienceError::InvalidInput {
            field: field.to_string(),
            reason: format!("must be finite, got {value}"),
        })
    }
}

fn require_unit_interval(field: &str, value: f64) -> ConvenienceResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConvenienceError::InvalidInput {
            field: field.to_string(),
            reason: format!("must be within [0, 1], got {value}"),
        })
    }
}
