//! Rate engine: prices one hour of the decision maker's time.

use convenience_core::constants::EPSILON;
use convenience_core::model::{Context, TimeEconomics};

/// Gross hourly rate: `annual_income / max(annual_work_hours, ε) × (1 + overtime_premium)`.
pub fn hourly_rate(economics: &TimeEconomics) -> f64 {
    hourly_rate_with_floor(economics, EPSILON)
}

/// [`hourly_rate`] with an explicit divisor floor.
pub fn hourly_rate_with_floor(economics: &TimeEconomics, epsilon: f64) -> f64 {
    let base = economics.annual_income / economics.annual_work_hours.max(epsilon);
    base * (1.0 + economics.overtime_premium)
}

/// `max(hourly_rate, minimum_rate) × productivity_factor`.
pub fn effective_rate(economics: &TimeEconomics, context: &Context) -> f64 {
    effective_rate_with_floor(economics, context, EPSILON)
}

pub fn effective_rate_with_floor(economics: &TimeEconomics, context: &Context, epsilon: f64) -> f64 {
    let rate = hourly_rate_with_floor(economics, epsilon).max(context.minimum_rate);
    rate * context.productivity_factor
}
