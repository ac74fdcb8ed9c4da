use convenience_core::model::DecisionOption;

/// Reliability benefit: expected avoided-failure cost scaled by the premium.
///
/// Formula: `premium × failureCost × failureProbability`.
pub fn calculate(option: &DecisionOption) -> f64 {
    option.reliability_premium * option.failure_cost * option.failure_probability
}
