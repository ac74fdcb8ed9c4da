//! Structured scenario input: one option, the decision maker's economics and
//! context, and optional sampling distributions for Monte Carlo runs.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, ConvenienceError, ConvenienceResult};
use crate::model::{
    Availability, Context, DayType, DecisionOption, DistributionSpec, OpportunityEntry,
    OptionField, StressTolerance, TimeEconomics, Urgency, Weather,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub option: DecisionOption,
    pub economics: TimeEconomics,
    #[serde(default)]
    pub context: Context,
    /// Financial-axis weight for this scenario. When absent, the engine's
    /// configured weight applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w_financial: Option<f64>,
    /// Per-field sampling distributions. Unknown field names and unknown
    /// distribution kinds fail to deserialize.
    #[serde(default)]
    pub distributions: BTreeMap<OptionField, DistributionSpec>,
}

impl Scenario {
    pub fn new(option: DecisionOption, economics: TimeEconomics, context: Context) -> Self {
        Self {
            option,
            economics,
            context,
            w_financial: None,
            distributions: BTreeMap::new(),
        }
    }

    /// Built-in taxi-versus-bus scenario.
    pub fn taxi_demo() -> Self {
        let mut option = DecisionOption::new("Taxi upgrade", 3.0);
        option.extra_cost = 12.0;
        option.time_saved_hours = 0.33;
        option.comfort_improvement = 0.6;
        option.comfort_weight = 10.0;
        option.reliability_premium = 0.1;
        option.failure_cost = 50.0;
        option.failure_probability = 0.1;
        option.stress_baseline = 4.0;
        option.stress_cost_per_point = 2.0;
        option.stress_tolerance = StressTolerance::MediumLow;
        option.stress_multipliers = BTreeMap::from([
            ("crowding".to_string(), 1.2),
            ("unpredictability".to_string(), 1.3),
            ("control".to_string(), 1.1),
        ]);
        option.opportunity_catalog =
            BTreeMap::from([("work".to_string(), OpportunityEntry::new(0.33, 20.0, 0.6))]);

        let economics = TimeEconomics::new(24_000.0, 1_800.0, 0.1);
        let context = Context {
            urgency: Urgency::Normal,
            day: DayType::Weekday,
            weather: Weather::Normal,
            availability: Availability::SemiFlexible,
            base_multiplier: 1.0,
            productivity_factor: 1.0,
            minimum_rate: 8.0,
        };
        Self::new(option, economics, context)
    }

    /// The scenario's own weight, or `fallback` when it does not set one.
    pub fn w_financial_or(&self, fallback: f64) -> f64 {
        self.w_financial.unwrap_or(fallback)
    }

    pub fn from_json(json: &str) -> ConvenienceResult<Self> {
        let scenario: Self = serde_json::from_str(json).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_toml(toml_str: &str) -> ConvenienceResult<Self> {
        let scenario: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load a scenario file. `.toml` files are parsed as TOML, anything else as JSON.
    pub fn load(path: &Path) -> ConvenienceResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let is_toml = path.extension().and_then(|e| e.to_str()) == Some("toml");
        let parsed: Result<Self, String> = if is_toml {
            toml::from_str(&content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str(&content).map_err(|e| e.to_string())
        };
        let scenario = parsed.map_err(|message| ConfigError::ParseError {
            path: path.display().to_string(),
            message,
        })?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Numeric range checks for every part of the scenario.
    pub fn validate(&self) -> ConvenienceResult<()> {
        self.option.validate()?;

        let numbers = [
            ("economics.annual_income", self.economics.annual_income),
            ("economics.annual_work_hours", self.economics.annual_work_hours),
            ("economics.overtime_premium", self.economics.overtime_premium),
            ("context.base_multiplier", self.context.base_multiplier),
            ("context.productivity_factor", self.context.productivity_factor),
            ("context.minimum_rate", self.context.minimum_rate),
            ("w_financial", self.w_financial.unwrap_or(defaults::DEFAULT_W_FINANCIAL)),
        ];
        for (field, value) in numbers {
            if !value.is_finite() {
                return Err(ConvenienceError::InvalidInput {
                    field: field.to_string(),
                    reason: format!("must be finite, got {value}"),
                });
            }
        }

        for (field, spec) in &self.distributions {
            spec.validate(field.name())?;
        }
        Ok(())
    }
}
