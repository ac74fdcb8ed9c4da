use convenience_core::constants::EPSILON;
use convenience_core::model::{Context, DecisionOption, ScoreBreakdown, TimeEconomics};

use crate::factors;

/// Normalized convenience score.
///
/// ```text
/// B_total = B_time + B_stress + B_opportunity + B_comfort + B_reliability
/// score   = (B_total − extraCost) / max(baseCost, ε) × w_financial
/// ```
///
/// Returns the score and the breakdown of every intermediate term.
pub fn evaluate(
    option: &DecisionOption,
    economics: &TimeEconomics,
    context: &Context,
    w_financial: f64,
) -> (f64, ScoreBreakdown) {
    let breakdown = compute_breakdown(option, economics, context, w_financial, EPSILON);
    (breakdown.score, breakdown)
}

/// Compute every term with an explicit divisor floor.
pub fn compute_breakdown(
    option: &DecisionOption,
    economics: &TimeEconomics,
    context: &Context,
    w_financial: f64,
    epsilon: f64,
) -> ScoreBreakdown {
    let b_time = factors::time::calculate(option, economics, context, epsilon);
    let b_stress = factors::stress::calculate(option);
    let b_opportunity = factors::opportunity::calculate(option);
    let b_comfort = factors::comfort::calculate(option);
    let b_reliability = factors::reliability::calculate(option);

    let b_total = b_time + b_stress + b_opportunity + b_comfort + b_reliability;
    let score = normalize(b_total, option.extra_cost, option.base_cost, w_financial, epsilon);

    ScoreBreakdown {
        b_time,
        b_stress,
        b_opportunity,
        b_comfort,
        b_reliability,
        b_total,
        c_extra: option.extra_cost,
        c_base: option.base_cost,
        score,
    }
}

/// `(benefit − extra) / max(base, ε) × w_financial`.
pub fn normalize(b_total: f64, extra_cost: f64, base_cost: f64, w_financial: f64, epsilon: f64) -> f64 {
    (b_total - extra_cost) / base_cost.max(epsilon) * w_financial
}
