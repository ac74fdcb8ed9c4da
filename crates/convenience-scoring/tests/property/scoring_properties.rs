use std::collections::BTreeMap;

use convenience_core::model::*;
use convenience_scoring::multipliers::context_multiplier;
use convenience_scoring::{evaluate, factors};
use proptest::prelude::*;

fn arb_urgency() -> impl Strategy<Value = Urgency> {
    prop::sample::select(Urgency::ALL.to_vec())
}

fn arb_day() -> impl Strategy<Value = DayType> {
    prop::sample::select(DayType::ALL.to_vec())
}

fn arb_weather() -> impl Strategy<Value = Weather> {
    prop::sample::select(Weather::ALL.to_vec())
}

fn arb_availability() -> impl Strategy<Value = Availability> {
    prop::sample::select(Availability::ALL.to_vec())
}

fn arb_tolerance() -> impl Strategy<Value = StressTolerance> {
    prop::sample::select(StressTolerance::ALL.to_vec())
}

fn arb_context() -> impl Strategy<Value = Context> {
    (
        arb_urgency(),
        arb_day(),
        arb_weather(),
        arb_availability(),
        0.1f64..3.0,
        0.1f64..3.0,
        0.0f64..50.0,
    )
        .prop_map(
            |(urgency, day, weather, availability, base_multiplier, productivity_factor, minimum_rate)| {
                Context {
                    urgency,
                    day,
                    weather,
                    availability,
                    base_multiplier,
                    productivity_factor,
                    minimum_rate,
                }
            },
        )
}

fn arb_entry() -> impl Strategy<Value = OpportunityEntry> {
    (0.0f64..=1.0, 0.0f64..500.0, 0.0f64..=1.0)
        .prop_map(|(a, v, p)| OpportunityEntry::new(a, v, p))
}

fn arb_option() -> impl Strategy<Value = DecisionOption> {
    (
        (0.01f64..1_000.0, -100.0f64..100.0, 0.0f64..10.0, 0.0f64..1.0, 0.0f64..50.0),
        (0.0f64..1.0, 0.0f64..500.0, 0.0f64..=1.0, 0.0f64..10.0, 0.0f64..10.0),
        arb_tolerance(),
        prop::collection::btree_map("[a-z]{1,8}", 0.5f64..2.0, 0..4),
        prop::collection::btree_map("[a-z]{1,8}", arb_entry(), 0..4),
    )
        .prop_map(|(costs, risk, tolerance, stress_multipliers, opportunity_catalog)| {
            let (base_cost, extra_cost, time_saved_hours, comfort_improvement, comfort_weight) = costs;
            let (reliability_premium, failure_cost, failure_probability, stress_baseline, stress_cost_per_point) = risk;
            DecisionOption {
                name: "generated".to_string(),
                base_cost,
                extra_cost,
                time_saved_hours,
                comfort_improvement,
                comfort_weight,
                reliability_premium,
                failure_cost,
                failure_probability,
                stress_baseline,
                stress_cost_per_point,
                stress_tolerance: tolerance,
                stress_multipliers,
                opportunity_catalog,
            }
        })
}

fn arb_economics() -> impl Strategy<Value = TimeEconomics> {
    (0.0f64..500_000.0, 100.0f64..4_000.0, 0.0f64..1.0)
        .prop_map(|(income, hours, premium)| TimeEconomics::new(income, hours, premium))
}

// ── Finite scores ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_is_finite_for_valid_inputs(
        option in arb_option(),
        economics in arb_economics(),
        context in arb_context(),
        w in 0.0f64..5.0,
    ) {
        let (score, bd) = evaluate(&option, &economics, &context, w);
        prop_assert!(score.is_finite(), "score not finite: {}", score);
        for (name, value) in bd.entries() {
            prop_assert!(value.is_finite(), "{} not finite: {}", name, value);
        }
    }
}

// ── Context multiplier is strictly multiplicative ────────────────────────

proptest! {
    #[test]
    fn changing_urgency_rescales_by_table_ratio(
        context in arb_context(),
        to in arb_urgency(),
    ) {
        let before = context_multiplier(&context);
        let changed = Context { urgency: to, ..context };
        let expected = before / context.urgency.multiplier() * to.multiplier();
        prop_assert!((context_multiplier(&changed) - expected).abs() < 1e-9);
    }

    #[test]
    fn changing_day_rescales_by_table_ratio(
        context in arb_context(),
        to in arb_day(),
    ) {
        let before = context_multiplier(&context);
        let changed = Context { day: to, ..context };
        let expected = before / context.day.multiplier() * to.multiplier();
        prop_assert!((context_multiplier(&changed) - expected).abs() < 1e-9);
    }

    #[test]
    fn changing_weather_rescales_by_table_ratio(
        context in arb_context(),
        to in arb_weather(),
    ) {
        let before = context_multiplier(&context);
        let changed = Context { weather: to, ..context };
        let expected = before / context.weather.multiplier() * to.multiplier();
        prop_assert!((context_multiplier(&changed) - expected).abs() < 1e-9);
    }
}

// ── Opportunity value ignores catalog order ──────────────────────────────

proptest! {
    #[test]
    fn opportunity_value_invariant_under_reordering(
        catalog in prop::collection::btree_map("[a-z]{1,6}", arb_entry(), 0..8),
    ) {
        let entries: Vec<(String, OpportunityEntry)> = catalog.into_iter().collect();

        let mut forward = DecisionOption::new("f", 1.0);
        for (name, entry) in entries.iter() {
            forward.opportunity_catalog.insert(name.clone(), *entry);
        }
        let mut reversed = DecisionOption::new("r", 1.0);
        for (name, entry) in entries.iter().rev() {
            reversed.opportunity_catalog.insert(name.clone(), *entry);
        }

        let a = factors::opportunity::calculate(&forward);
        let b = factors::opportunity::calculate(&reversed);
        prop_assert!((a - b).abs() < 1e-9);

        let reverse_sum: f64 = entries
            .iter()
            .rev()
            .map(|(_, e)| e.availability * e.value * e.probability)
            .sum();
        prop_assert!((a - reverse_sum).abs() < 1e-9);
    }
}

// ── Empty product ────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn empty_stress_product_is_one(
        baseline in 0.0f64..10.0,
        cost in 0.0f64..10.0,
        tolerance in arb_tolerance(),
    ) {
        let mut option = DecisionOption::new("x", 1.0);
        option.stress_baseline = baseline;
        option.stress_cost_per_point = cost;
        option.stress_tolerance = tolerance;
        let empty = factors::stress::calculate(&option);

        option.stress_multipliers = BTreeMap::from([("neutral".to_string(), 1.0)]);
        prop_assert_eq!(empty, factors::stress::calculate(&option));
    }
}
