//! Monte Carlo over the taxi scenario: determinism, degenerate distributions,
//! and build-time validation of distribution specs.

use std::collections::BTreeMap;

use convenience_core::config::Scenario;
use convenience_core::errors::{ConvenienceError, SimulationError};
use convenience_core::model::{DistributionSpec, OptionField};
use convenience_core::traits::{IScoreSampler, SamplerFn};
use convenience_scoring::{evaluate, ScoringEngine};
use convenience_simulation::{monte_carlo, MonteCarloSimulator, OptionSampler};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

fn taxi_sampler(distributions: BTreeMap<OptionField, DistributionSpec>) -> OptionSampler {
    let mut s = Scenario::taxi_demo();
    s.distributions = distributions;
    OptionSampler::from_scenario(&s, ScoringEngine::new()).unwrap()
}

fn exact_taxi_score() -> f64 {
    let s = Scenario::taxi_demo();
    evaluate(&s.option, &s.economics, &s.context, 1.0).0
}

// ── Single run ───────────────────────────────────────────────────────────

#[test]
fn single_run_collapses_interval_to_the_sample() {
    let sampler = taxi_sampler(BTreeMap::from([
        (OptionField::TimeSavedHours, DistributionSpec::Uniform(0.2, 0.5)),
    ]));
    let sim = MonteCarloSimulator::new(1).with_seed(9);

    let samples = sim.samples(&sampler).unwrap();
    let summary = sim.run(&sampler).unwrap();

    assert_eq!(summary.runs, 1);
    assert_eq!(summary.stdev, 0.0);
    assert_eq!(summary.mean, samples[0]);
    assert_eq!(summary.median, samples[0]);
    assert_eq!(summary.ci_low, summary.mean);
    assert_eq!(summary.ci_high, summary.mean);
}

#[test]
fn zero_runs_is_fatal() {
    let sampler = taxi_sampler(BTreeMap::new());
    let err = MonteCarloSimulator::new(0).run(&sampler).unwrap_err();
    assert!(matches!(err, SimulationError::InvalidRuns { runs: 0 }));
}

// ── Determinism ──────────────────────────────────────────────────────────

#[test]
fn same_seed_reproduces_sequence() {
    let sampler = taxi_sampler(BTreeMap::from([
        (OptionField::TimeSavedHours, DistributionSpec::Uniform(0.2, 0.5)),
        (OptionField::ExtraCost, DistributionSpec::Normal(12.0, 2.0)),
    ]));
    let a = MonteCarloSimulator::new(500).with_seed(12345).samples(&sampler).unwrap();
    let b = MonteCarloSimulator::new(500).with_seed(12345).samples(&sampler).unwrap();
    let c = MonteCarloSimulator::new(500).with_seed(54321).samples(&sampler).unwrap();

    assert_eq!(a, b, "same seed must reproduce the sequence");
    assert_ne!(a, c, "different seeds should diverge");
}

#[test]
fn unseeded_simulation_uses_thread_rng() {
    let sampler = taxi_sampler(BTreeMap::from([
        (OptionField::ExtraCost, DistributionSpec::Uniform(10.0, 14.0)),
    ]));
    let summary = MonteCarloSimulator::new(200).run(&sampler).unwrap();
    assert!(summary.mean.is_finite());
    assert!(summary.ci_low <= summary.mean && summary.mean <= summary.ci_high);
}

// ── Convergence ──────────────────────────────────────────────────────────

#[test]
fn degenerate_distributions_match_exact_score() {
    let sampler = taxi_sampler(BTreeMap::from([
        (OptionField::TimeSavedHours, DistributionSpec::Uniform(0.33, 0.33)),
        (OptionField::ExtraCost, DistributionSpec::Normal(12.0, 0.0)),
        (OptionField::FailureProbability, DistributionSpec::Normal(0.1, 0.0)),
    ]));
    let summary = MonteCarloSimulator::new(100_000).with_seed(1).run(&sampler).unwrap();
    let exact = exact_taxi_score();

    assert!(((summary.mean - exact) / exact).abs() < 0.05);
    assert!((summary.mean - exact).abs() < 1e-9, "mean {} vs exact {}", summary.mean, exact);
    assert!(summary.stdev < 1e-9);
}

#[test]
fn linear_field_mean_converges_to_score_at_mean() {
    // The score is linear in extra_cost, so E[score] = score(E[extra_cost]).
    let sampler = taxi_sampler(BTreeMap::from([
        (OptionField::ExtraCost, DistributionSpec::Uniform(8.0, 16.0)),
    ]));
    let summary = MonteCarloSimulator::new(50_000).with_seed(77).run(&sampler).unwrap();
    let exact = exact_taxi_score();

    assert!(((summary.mean - exact) / exact).abs() < 0.05);
    assert!(summary.stdev > 0.0);
}

#[test]
fn sampled_probability_is_clamped() {
    let sampler = taxi_sampler(BTreeMap::from([
        (OptionField::FailureProbability, DistributionSpec::Normal(0.5, 5.0)),
    ]));
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let option = sampler.sample_option(&mut rng);
        assert!((0.0..=1.0).contains(&option.failure_probability));
    }
}

#[test]
fn unsampled_fields_keep_base_values() {
    let sampler = taxi_sampler(BTreeMap::from([
        (OptionField::ComfortWeight, DistributionSpec::Uniform(5.0, 15.0)),
    ]));
    let base = Scenario::taxi_demo().option;
    let mut rng = StdRng::seed_from_u64(11);
    let option = sampler.sample_option(&mut rng);

    assert_eq!(option.extra_cost, base.extra_cost);
    assert_eq!(option.stress_multipliers, base.stress_multipliers);
    assert!((5.0..=15.0).contains(&option.comfort_weight));
    assert_eq!(sampler.sampled_fields().collect::<Vec<_>>(), vec![OptionField::ComfortWeight]);
}

// ── Build-time validation ────────────────────────────────────────────────

#[test]
fn unknown_field_name_fails_before_any_run() {
    let s = Scenario::taxi_demo();
    let named = BTreeMap::from([
        ("time_saved_hours".to_string(), DistributionSpec::Uniform(0.2, 0.5)),
        ("commute_time_hours".to_string(), DistributionSpec::Uniform(0.2, 0.5)),
    ]);
    let err = OptionSampler::from_named(
        ScoringEngine::new(),
        s.option,
        s.economics,
        s.context,
        &named,
    )
    .unwrap_err();
    assert!(matches!(err, ConvenienceError::UnknownField { ref name } if name == "commute_time_hours"));
}

#[test]
fn inverted_uniform_fails_when_sampler_is_built() {
    let mut s = Scenario::taxi_demo();
    s.distributions = BTreeMap::from([(OptionField::ExtraCost, DistributionSpec::Uniform(16.0, 8.0))]);
    let err = OptionSampler::from_scenario(&s, ScoringEngine::new()).unwrap_err();
    assert!(matches!(
        err,
        ConvenienceError::Simulation(SimulationError::InvalidDistribution { .. })
    ));
}

#[test]
fn overflowing_uniform_range_fails_before_any_run() {
    let mut s = Scenario::taxi_demo();
    s.distributions =
        BTreeMap::from([(OptionField::ExtraCost, DistributionSpec::Uniform(-1e308, 1e308))]);
    assert!(matches!(s.validate(), Err(ConvenienceError::Simulation(_))));

    let err = OptionSampler::from_scenario(&s, ScoringEngine::new()).unwrap_err();
    assert!(matches!(
        err,
        ConvenienceError::Simulation(SimulationError::InvalidDistribution { .. })
    ));
}

// ── Financial weight ─────────────────────────────────────────────────────

#[test]
fn sampler_uses_engine_weight_unless_scenario_sets_one() {
    let simulator = MonteCarloSimulator::new(3).with_seed(1);
    let engine = ScoringEngine::new().with_w_financial(2.0);

    let mut s = Scenario::taxi_demo();
    let sampler = OptionSampler::from_scenario(&s, engine.clone()).unwrap();
    let summary = simulator.run(&sampler).unwrap();
    assert!((summary.mean - 2.0 * exact_taxi_score()).abs() < 1e-9);
    assert_eq!(summary.stdev, 0.0);

    s.w_financial = Some(3.0);
    let sampler = OptionSampler::from_scenario(&s, engine).unwrap();
    let summary = simulator.run(&sampler).unwrap();
    assert!((summary.mean - 3.0 * exact_taxi_score()).abs() < 1e-9);
}

#[test]
fn simulator_reports_configured_runs_and_seed() {
    let config = convenience_core::config::SimulationConfig {
        runs: 250,
        seed: Some(9),
    };
    let simulator = MonteCarloSimulator::from_config(&config);
    assert_eq!(simulator.runs(), 250);
    assert_eq!(simulator.seed(), Some(9));
    assert_eq!(MonteCarloSimulator::default().seed(), None);
}

#[test]
fn scenario_json_distributions_drive_the_sampler() {
    let json = r#"{
        "option": {"name": "Taxi", "base_cost": 3.0, "extra_cost": 12.0, "time_saved_hours": 0.33},
        "economics": {"annual_income": 24000, "annual_work_hours": 1800, "overtime_premium": 0.1},
        "context": {"availability": "semi", "minimum_rate": 8.0},
        "w_financial": 2.0,
        "distributions": {
            "time_saved_hours": {"uniform": [0.2, 0.5]},
            "extra_cost": {"normal": [12.0, 2.0]}
        }
    }"#;
    let scenario = Scenario::from_json(json).unwrap();
    let sampler = OptionSampler::from_scenario(&scenario, ScoringEngine::new()).unwrap();
    assert_eq!(sampler.sampled_fields().count(), 2);

    let summary = MonteCarloSimulator::new(1_000).with_seed(5).run(&sampler).unwrap();
    assert!(summary.mean.is_finite());
}

#[test]
fn scenario_with_unknown_distribution_kind_is_rejected() {
    let json = r#"{
        "option": {"name": "Taxi", "base_cost": 3.0},
        "economics": {"annual_income": 24000, "annual_work_hours": 1800},
        "distributions": {"extra_cost": {"triangular": [1.0, 2.0, 3.0]}}
    }"#;
    assert!(matches!(
        Scenario::from_json(json),
        Err(ConvenienceError::Config(_))
    ));
}

// ── Closure-based runs ───────────────────────────────────────────────────

#[test]
fn closure_sampler_and_free_function_agree() {
    let sampler = SamplerFn(|rng: &mut dyn RngCore| rng.gen_range(0.0..1.0));
    let sim = MonteCarloSimulator::new(300).with_seed(21);
    let samples = sim.samples(&sampler).unwrap();

    let mut rng = StdRng::seed_from_u64(21);
    let summary = monte_carlo(|| sampler.sample_score(&mut rng), 300).unwrap();
    let from_sim = sim.run(&sampler).unwrap();

    assert_eq!(summary, from_sim);
    assert_eq!(samples.len(), 300);
}
