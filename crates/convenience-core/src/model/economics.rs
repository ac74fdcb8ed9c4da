use serde::{Deserialize, Serialize};

/// Income parameters used to price an hour of the decision maker's time.
///
/// `annual_work_hours` is not required to be positive: the rate engine floors
/// it at [`EPSILON`](crate::constants::EPSILON) instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeEconomics {
    pub annual_income: f64,
    pub annual_work_hours: f64,
    /// Fractional surcharge, e.g. 0.1 for +10%.
    #[serde(default)]
    pub overtime_premium: f64,
}

impl TimeEconomics {
    pub fn new(annual_income: f64, annual_work_hours: f64, overtime_premium: f64) -> Self {
        Self {
            annual_income,
            annual_work_hours,
            overtime_premium,
        }
    }
}
