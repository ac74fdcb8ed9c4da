use convenience_core::config::ScoringConfig;
use convenience_core::constants::{DEFAULT_W_FINANCIAL, EPSILON};
use convenience_core::errors::ConvenienceResult;
use convenience_core::model::{Context, DecisionOption, EvaluationResult, ScoreBreakdown, TimeEconomics};
use convenience_core::traits::IScorer;
use convenience_observability::scoring_span;
use tracing::{debug, warn};

use crate::formula;

/// Scoring engine: the five-factor formula with a configured divisor floor
/// and financial weight.
///
/// Stateless across calls; every evaluation yields a fresh result.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    epsilon: f64,
    w_financial: f64,
}

impl ScoringEngine {
    /// Create an engine with ε = 1e-9 and w_financial = 1.0.
    pub fn new() -> Self {
        Self {
            epsilon: EPSILON,
            w_financial: DEFAULT_W_FINANCIAL,
        }
    }

    pub fn from_config(config: &ScoringConfig) -> Self {
        Self {
            epsilon: config.epsilon,
            w_financial: config.w_financial,
        }
    }

    /// Rescale the financial axis without changing the benefit accounting.
    pub fn with_w_financial(mut self, w_financial: f64) -> Self {
        self.w_financial = w_financial;
        self
    }

    pub fn w_financial(&self) -> f64 {
        self.w_financial
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Breakdown without wrapping it in an [`EvaluationResult`].
    pub fn breakdown(
        &self,
        option: &DecisionOption,
        economics: &TimeEconomics,
        context: &Context,
    ) -> ScoreBreakdown {
        formula::compute_breakdown(option, economics, context, self.w_financial, self.epsilon)
    }

    /// Scalar score only. Used by the simulation and sensitivity layers.
    pub fn score_value(
        &self,
        option: &DecisionOption,
        economics: &TimeEconomics,
        context: &Context,
    ) -> f64 {
        self.breakdown(option, economics, context).score
    }

    /// Evaluate several options against the same economics and context.
    pub fn evaluate_batch(
        &self,
        options: &[DecisionOption],
        economics: &TimeEconomics,
        context: &Context,
    ) -> ConvenienceResult<Vec<EvaluationResult>> {
        options
            .iter()
            .map(|o| IScorer::evaluate(self, o, economics, context))
            .collect()
    }

    fn evaluate_unchecked(
        &self,
        option: &DecisionOption,
        economics: &TimeEconomics,
        context: &Context,
    ) -> EvaluationResult {
        let _span = scoring_span!(option.name).entered();

        if option.base_cost <= 0.0 {
            warn!(
                base_cost = option.base_cost,
                "non-positive base cost floored at {:e}; score may be extreme",
                self.epsilon
            );
        }
        if economics.annual_work_hours <= 0.0 {
            warn!(
                annual_work_hours = economics.annual_work_hours,
                "non-positive work hours floored at {:e}",
                self.epsilon
            );
        }

        let breakdown = self.breakdown(option, economics, context);
        debug!(score = breakdown.score, b_total = breakdown.b_total, "option scored");

        EvaluationResult {
            option: option.clone(),
            breakdown,
            score: breakdown.score,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IScorer for ScoringEngine {
    fn evaluate(
        &self,
        option: &DecisionOption,
        economics: &TimeEconomics,
        context: &Context,
    ) -> ConvenienceResult<EvaluationResult> {
        option.validate()?;
        Ok(self.evaluate_unchecked(option, economics, context))
    }
}
