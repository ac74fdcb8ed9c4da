use convenience_core::model::DecisionOption;

/// Stress benefit: `baseline × Π(situational multipliers) × toleranceFactor × costPerPoint`.
///
/// An empty multiplier map contributes 1.0.
pub fn calculate(option: &DecisionOption) -> f64 {
    let situation: f64 = option.stress_multipliers.values().product();
    option.stress_baseline
        * situation
        * option.stress_tolerance.factor()
        * option.stress_cost_per_point
}
