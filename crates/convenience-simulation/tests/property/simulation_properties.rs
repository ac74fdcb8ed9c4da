use convenience_simulation::{monte_carlo, sensitivity, SimulationSummary};
use proptest::prelude::*;

// ── Sensitivity of linear functions ──────────────────────────────────────

proptest! {
    #[test]
    fn linear_function_sensitivity_is_slope(
        a in -100.0f64..100.0,
        b in -100.0f64..100.0,
        p in -1_000.0f64..1_000.0,
        delta in 1e-3f64..1.0,
    ) {
        let d = sensitivity(|x| a * x + b, p, delta);
        prop_assert!((d - a).abs() < 1e-6 * (1.0 + a.abs() + p.abs()), "slope {} estimated {}", a, d);
    }
}

// ── Summary invariants ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn summary_bounds_hold(samples in prop::collection::vec(-1e6f64..1e6, 1..200)) {
        let s = SimulationSummary::from_samples(&samples).unwrap();
        let min = samples.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = samples.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let tol = 1e-6 * (1.0 + max.abs().max(min.abs()));

        prop_assert!(s.mean >= min - tol && s.mean <= max + tol);
        prop_assert!(s.median >= min && s.median <= max);
        prop_assert!(s.stdev >= 0.0);
        prop_assert!(s.ci_low <= s.mean && s.mean <= s.ci_high);
        prop_assert_eq!(s.runs, samples.len());
    }

    #[test]
    fn summary_ignores_sample_order(samples in prop::collection::vec(-1e3f64..1e3, 1..100)) {
        let forward = SimulationSummary::from_samples(&samples).unwrap();
        let mut reversed = samples.clone();
        reversed.reverse();
        let backward = SimulationSummary::from_samples(&reversed).unwrap();

        prop_assert_eq!(forward.median, backward.median);
        prop_assert!((forward.mean - backward.mean).abs() < 1e-9);
        prop_assert!((forward.stdev - backward.stdev).abs() < 1e-9);
    }

    #[test]
    fn constant_runs_have_zero_spread(value in -1e3f64..1e3, runs in 1usize..500) {
        let s = monte_carlo(|| value, runs).unwrap();
        prop_assert!((s.mean - value).abs() < 1e-9);
        prop_assert_eq!(s.median, value);
        prop_assert!(s.stdev < 1e-9);
    }
}
