use convenience_core::model::{Context, DecisionOption, TimeEconomics};

use crate::multipliers::{availability_multiplier, context_multiplier};
use crate::rate::effective_rate_with_floor;

/// Time benefit: `timeSaved × effectiveRate × contextMultiplier × availability`.
///
/// Saved time is worth more under urgency, bad weather, or an inflexible
/// schedule.
pub fn calculate(
    option: &DecisionOption,
    economics: &TimeEconomics,
    context: &Context,
    epsilon: f64,
) -> f64 {
    option.time_saved_hours
        * effective_rate_with_floor(economics, context, epsilon)
        * context_multiplier(context)
        * availability_multiplier(context)
}
