//! Top-level engine configuration with file + environment resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ObservabilityConfig, ScoringConfig, SensitivityConfig, SimulationConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CONVENIENCE_*`)
/// 2. TOML config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConvenienceConfig {
    pub scoring: ScoringConfig,
    pub simulation: SimulationConfig,
    pub sensitivity: SensitivityConfig,
    pub observability: ObservabilityConfig,
}

impl ConvenienceConfig {
    pub const ENV_RUNS: &'static str = "CONVENIENCE_RUNS";
    pub const ENV_SEED: &'static str = "CONVENIENCE_SEED";
    pub const ENV_LOG_LEVEL: &'static str = "CONVENIENCE_LOG_LEVEL";

    /// Load configuration: optional TOML file, then environment, then validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides_from(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `CONVENIENCE_*` overrides read through `lookup`.
    pub fn apply_env_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(Self::ENV_RUNS) {
            self.simulation.runs = raw.trim().parse().map_err(|_| ConfigError::ValidationFailed {
                field: Self::ENV_RUNS.to_string(),
                message: format!("expected a non-negative integer, got {raw:?}"),
            })?;
        }
        if let Some(raw) = lookup(Self::ENV_SEED) {
            let seed = raw.trim().parse().map_err(|_| ConfigError::ValidationFailed {
                field: Self::ENV_SEED.to_string(),
                message: format!("expected a u64 seed, got {raw:?}"),
            })?;
            self.simulation.seed = Some(seed);
        }
        if let Some(raw) = lookup(Self::ENV_LOG_LEVEL) {
            self.observability.log_level = raw.trim().to_lowercase();
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.scoring.epsilon.is_finite() && self.scoring.epsilon > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.epsilon".to_string(),
                message: "must be positive and finite".to_string(),
            });
        }
        if !self.scoring.w_financial.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "scoring.w_financial".to_string(),
                message: "must be finite".to_string(),
            });
        }
        if self.simulation.runs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "simulation.runs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !(self.sensitivity.delta.is_finite() && self.sensitivity.delta > 0.0) {
            return Err(ConfigError::ValidationFailed {
                field: "sensitivity.delta".to_string(),
                message: "must be positive and finite".to_string(),
            });
        }
        if !ObservabilityConfig::LEVELS.contains(&self.observability.log_level.as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!(
                    "must be one of {}",
                    ObservabilityConfig::LEVELS.join(", ")
                ),
            });
        }
        Ok(())
    }
}
