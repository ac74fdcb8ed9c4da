//! Context multiplier engine.
//!
//! ```text
//! contextMultiplier = baseMultiplier × M_urgency × M_day × M_weather
//! ```
//!
//! Availability is returned separately because it discounts only the time
//! benefit, not the whole score.

use convenience_core::model::Context;

pub fn context_multiplier(context: &Context) -> f64 {
    context.base_multiplier
        * context.urgency.multiplier()
        * context.day.multiplier()
        * context.weather.multiplier()
}

pub fn availability_multiplier(context: &Context) -> f64 {
    context.availability.multiplier()
}
