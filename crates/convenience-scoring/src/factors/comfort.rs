use convenience_core::model::DecisionOption;

/// Comfort benefit: `improvement × weight`.
pub fn calculate(option: &DecisionOption) -> f64 {
    option.comfort_improvement * option.comfort_weight
}
