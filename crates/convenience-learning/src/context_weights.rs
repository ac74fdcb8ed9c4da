//! How much each context dimension matters, by decision type.

use std::fmt;
use std::str::FromStr;

use convenience_core::errors::ConvenienceError;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    #[default]
    Transportation,
    Food,
    Shopping,
    Services,
    Entertainment,
}

/// Importance of each context dimension, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContextWeights {
    pub weather: f64,
    pub time: f64,
    pub calendar: f64,
    pub location: f64,
}

impl DecisionType {
    pub const ALL: &'static [DecisionType] = &[
        Self::Transportation,
        Self::Food,
        Self::Shopping,
        Self::Services,
        Self::Entertainment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Transportation => "transportation",
            Self::Food => "food",
            Self::Shopping => "shopping",
            Self::Services => "services",
            Self::Entertainment => "entertainment",
        }
    }

    pub fn context_weights(&self) -> ContextWeights {
        let (weather, time, calendar, location) = match self {
            Self::Transportation => (0.8, 0.9, 0.7, 0.9),
            Self::Food => (0.6, 0.8, 0.8, 0.5),
            Self::Shopping => (0.4, 0.6, 0.5, 0.7),
            Self::Services => (0.3, 0.7, 0.9, 0.4),
            Self::Entertainment => (0.5, 0.8, 0.6, 0.8),
        };
        ContextWeights {
            weather,
            time,
            calendar,
            location,
        }
    }
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DecisionType {
    type Err = ConvenienceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name() == s)
            .ok_or_else(|| ConvenienceError::InvalidCategory {
                field: "decision_type",
                value: s.to_string(),
            })
    }
}

/// Context weights for a decision type given by name.
///
/// Unlike the scoring categories, an unknown name here is not an error: it
/// falls back to transportation weights.
pub fn weighted_context_importance(decision_type: &str) -> ContextWeights {
    let kind: DecisionType = decision_type.parse().unwrap_or_else(|_| {
        debug!(decision_type, "unknown decision type, using transportation weights");
        DecisionType::Transportation
    });
    kind.context_weights()
}
