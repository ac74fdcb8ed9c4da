use serde::{Deserialize, Serialize};

use super::categories::{Availability, DayType, Urgency, Weather};

/// Situational factors surrounding a decision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Context {
    pub urgency: Urgency,
    pub day: DayType,
    pub weather: Weather,
    pub availability: Availability,
    pub base_multiplier: f64,
    pub productivity_factor: f64,
    /// Hourly floor applied before the productivity adjustment.
    pub minimum_rate: f64,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            urgency: Urgency::default(),
            day: DayType::default(),
            weather: Weather::default(),
            availability: Availability::default(),
            base_multiplier: 1.0,
            productivity_factor: 1.0,
            minimum_rate: 0.0,
        }
    }
}
