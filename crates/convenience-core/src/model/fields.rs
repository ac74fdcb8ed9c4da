//! Addressable numeric fields of a [`DecisionOption`].
//!
//! Used to declare per-field sampling distributions and to build
//! single-parameter score functions for sensitivity analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::option::DecisionOption;
use crate::errors::ConvenienceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionField {
    BaseCost,
    ExtraCost,
    TimeSavedHours,
    ComfortImprovement,
    ComfortWeight,
    ReliabilityPremium,
    FailureCost,
    FailureProbability,
    StressBaseline,
    StressCostPerPoint,
}

impl OptionField {
    pub const ALL: &'static [OptionField] = &[
        Self::BaseCost,
        Self::ExtraCost,
        Self::TimeSavedHours,
        Self::ComfortImprovement,
        Self::ComfortWeight,
        Self::ReliabilityPremium,
        Self::FailureCost,
        Self::FailureProbability,
        Self::StressBaseline,
        Self::StressCostPerPoint,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::BaseCost => "base_cost",
            Self::ExtraCost => "extra_cost",
            Self::TimeSavedHours => "time_saved_hours",
            Self::ComfortImprovement => "comfort_improvement",
            Self::ComfortWeight => "comfort_weight",
            Self::ReliabilityPremium => "reliability_premium",
            Self::FailureCost => "failure_cost",
            Self::FailureProbability => "failure_probability",
            Self::StressBaseline => "stress_baseline",
            Self::StressCostPerPoint => "stress_cost_per_point",
        }
    }

    /// Whether the field is a probability and must stay within [0, 1].
    pub fn is_probability(&self) -> bool {
        matches!(self, Self::FailureProbability)
    }

    pub fn get(&self, option: &DecisionOption) -> f64 {
        match self {
            Self::BaseCost => option.base_cost,
            Self::ExtraCost => option.extra_cost,
            Self::TimeSavedHours => option.time_saved_hours,
            Self::ComfortImprovement => option.comfort_improvement,
            Self::ComfortWeight => option.comfort_weight,
            Self::ReliabilityPremium => option.reliability_premium,
            Self::FailureCost => option.failure_cost,
            Self::FailureProbability => option.failure_probability,
            Self::StressBaseline => option.stress_baseline,
            Self::StressCostPerPoint => option.stress_cost_per_point,
        }
    }

    pub fn set(&self, option: &mut DecisionOption, value: f64) {
        let slot = match self {
            Self::BaseCost => &mut option.base_cost,
            Self::ExtraCost => &mut option.extra_cost,
            Self::TimeSavedHours => &mut option.time_saved_hours,
            Self::ComfortImprovement => &mut option.comfort_improvement,
            Self::ComfortWeight => &mut option.comfort_weight,
            Self::ReliabilityPremium => &mut option.reliability_premium,
            Self::FailureCost => &mut option.failure_cost,
            Self::FailureProbability => &mut option.failure_probability,
            Self::StressBaseline => &mut option.stress_baseline,
            Self::StressCostPerPoint => &mut option.stress_cost_per_point,
        };
        *slot = value;
    }

    /// Return a copy of `option` with this field replaced by `value`.
    pub fn with_value(&self, option: &DecisionOption, value: f64) -> DecisionOption {
        let mut updated = option.clone();
        self.set(&mut updated, value);
        updated
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OptionField {
    type Err = ConvenienceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| ConvenienceError::UnknownField {
                name: s.to_string(),
            })
    }
}
