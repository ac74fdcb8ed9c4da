//! Closed categorical inputs and their fixed scalar weights.
//!
//! Each enum maps to a constant table. Unknown names are rejected by
//! `FromStr` and by serde, never defaulted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConvenienceError;

/// How pressing the decision is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Emergency,
    Urgent,
    TimePressed,
    #[default]
    Normal,
    Relaxed,
}

impl Urgency {
    pub const ALL: &'static [Urgency] = &[
        Self::Emergency,
        Self::Urgent,
        Self::TimePressed,
        Self::Normal,
        Self::Relaxed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Emergency => "emergency",
            Self::Urgent => "urgent",
            Self::TimePressed => "time_pressed",
            Self::Normal => "normal",
            Self::Relaxed => "relaxed",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Emergency => 2.0,
            Self::Urgent => 1.5,
            Self::TimePressed => 1.2,
            Self::Normal => 1.0,
            Self::Relaxed => 0.8,
        }
    }
}

/// Calendar position of the decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    MondayMorning,
    RushHour,
    #[default]
    Weekday,
    Weekend,
    Holiday,
}

impl DayType {
    pub const ALL: &'static [DayType] = &[
        Self::MondayMorning,
        Self::RushHour,
        Self::Weekday,
        Self::Weekend,
        Self::Holiday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::MondayMorning => "monday_morning",
            Self::RushHour => "rush_hour",
            Self::Weekday => "weekday",
            Self::Weekend => "weekend",
            Self::Holiday => "holiday",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::MondayMorning => 1.3,
            Self::RushHour => 1.2,
            Self::Weekday => 1.0,
            Self::Weekend => 0.9,
            Self::Holiday => 0.7,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weather {
    Severe,
    RainSnow,
    ExtremeTemp,
    #[default]
    Normal,
}

impl Weather {
    pub const ALL: &'static [Weather] =
        &[Self::Severe, Self::RainSnow, Self::ExtremeTemp, Self::Normal];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Severe => "severe",
            Self::RainSnow => "rain_snow",
            Self::ExtremeTemp => "extreme_temp",
            Self::Normal => "normal",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Severe => 1.4,
            Self::RainSnow => 1.2,
            Self::ExtremeTemp => 1.1,
            Self::Normal => 1.0,
        }
    }
}

/// Schedule flexibility. Discounts only the time benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    Flexible,
    #[default]
    #[serde(alias = "semi")]
    SemiFlexible,
    Fixed,
}

impl Availability {
    pub const ALL: &'static [Availability] = &[Self::Flexible, Self::SemiFlexible, Self::Fixed];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Flexible => "flexible",
            Self::SemiFlexible => "semi_flexible",
            Self::Fixed => "fixed",
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Flexible => 1.0,
            Self::SemiFlexible => 0.7,
            Self::Fixed => 0.3,
        }
    }
}

/// Personal stress tolerance. Lower tolerance amplifies perceived stress cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StressTolerance {
    Low,
    MediumLow,
    #[default]
    Medium,
    MediumHigh,
    High,
}

impl StressTolerance {
    pub const ALL: &'static [StressTolerance] = &[
        Self::Low,
        Self::MediumLow,
        Self::Medium,
        Self::MediumHigh,
        Self::High,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::MediumLow => "medium_low",
            Self::Medium => "medium",
            Self::MediumHigh => "medium_high",
            Self::High => "high",
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Self::Low => 2.0,
            Self::MediumLow => 1.5,
            Self::Medium => 1.0,
            Self::MediumHigh => 0.7,
            Self::High => 0.4,
        }
    }
}

macro_rules! category_text {
    ($ty:ident, $field:literal $(, $alias:literal => $variant:ident)*) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = ConvenienceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s == $alias {
                        return Ok(Self::$variant);
                    }
                )*
                Self::ALL
                    .iter()
                    .copied()
                    .find(|c| c.name() == s)
                    .ok_or_else(|| ConvenienceError::InvalidCategory {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

category_text!(Urgency, "urgency");
category_text!(DayType, "day");
category_text!(Weather, "weather");
category_text!(Availability, "availability", "semi" => SemiFlexible);
category_text!(StressTolerance, "stress_tolerance");
