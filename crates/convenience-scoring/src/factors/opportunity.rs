use convenience_core::model::DecisionOption;

/// Opportunity benefit: `Σ A × V × P` over the catalog.
pub fn calculate(option: &DecisionOption) -> f64 {
    option
        .opportunity_catalog
        .values()
        .map(|e| e.availability * e.value * e.probability)
        .sum()
}
