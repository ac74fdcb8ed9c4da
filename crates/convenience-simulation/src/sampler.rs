//! Option sampler: the per-run "resample, then rescore" step.

use std::collections::BTreeMap;

use convenience_core::config::Scenario;
use convenience_core::errors::ConvenienceResult;
use convenience_core::model::{Context, DecisionOption, DistributionSpec, OptionField, TimeEconomics};
use convenience_core::traits::IScoreSampler;
use convenience_scoring::ScoringEngine;
use rand::RngCore;
use tracing::debug;

use crate::distributions::FieldDistribution;

/// Resamples declared option fields and scores the result.
///
/// Every distribution is validated when the sampler is built, so a run can
/// never fail midway. Fields without a distribution keep their base value.
#[derive(Debug, Clone)]
pub struct OptionSampler {
    engine: ScoringEngine,
    base: DecisionOption,
    economics: TimeEconomics,
    context: Context,
    fields: Vec<(OptionField, FieldDistribution)>,
}

impl OptionSampler {
    pub fn new(
        engine: ScoringEngine,
        base: DecisionOption,
        economics: TimeEconomics,
        context: Context,
        distributions: &BTreeMap<OptionField, DistributionSpec>,
    ) -> ConvenienceResult<Self> {
        base.validate()?;
        let fields = distributions
            .iter()
            .map(|(field, spec)| {
                let compiled = FieldDistribution::compile(spec, field.name())?;
                debug!(field = %field, kind = spec.kind(), mean = spec.mean(), "distribution compiled");
                Ok((*field, compiled))
            })
            .collect::<ConvenienceResult<Vec<_>>>()?;

        debug!(
            option = %base.name,
            sampled_fields = fields.len(),
            "option sampler built"
        );
        Ok(Self {
            engine,
            base,
            economics,
            context,
            fields,
        })
    }

    /// Build from distributions keyed by field name. Unknown names are an
    /// error rather than being skipped.
    pub fn from_named(
        engine: ScoringEngine,
        base: DecisionOption,
        economics: TimeEconomics,
        context: Context,
        distributions: &BTreeMap<String, DistributionSpec>,
    ) -> ConvenienceResult<Self> {
        let typed = distributions
            .iter()
            .map(|(name, spec)| Ok((name.parse::<OptionField>()?, *spec)))
            .collect::<ConvenienceResult<BTreeMap<_, _>>>()?;
        Self::new(engine, base, economics, context, &typed)
    }

    /// Build from a scenario. The scenario's financial weight wins over the
    /// engine's when it sets one.
    pub fn from_scenario(scenario: &Scenario, engine: ScoringEngine) -> ConvenienceResult<Self> {
        let w_financial = scenario.w_financial_or(engine.w_financial());
        Self::new(
            engine.with_w_financial(w_financial),
            scenario.option.clone(),
            scenario.economics,
            scenario.context,
            &scenario.distributions,
        )
    }

    pub fn sampled_fields(&self) -> impl Iterator<Item = OptionField> + '_ {
        self.fields.iter().map(|(f, _)| *f)
    }

    /// Draw one option. Sampled probabilities are clamped to [0, 1].
    pub fn sample_option(&self, rng: &mut dyn RngCore) -> DecisionOption {
        let mut option = self.base.clone();
        for (field, dist) in &self.fields {
            let mut value = dist.sample(rng);
            if field.is_probability() {
                value = value.clamp(0.0, 1.0);
            }
            field.set(&mut option, value);
        }
        option
    }
}

impl IScoreSampler for OptionSampler {
    fn sample_score(&self, rng: &mut dyn RngCore) -> f64 {
        let option = self.sample_option(rng);
        self.engine.score_value(&option, &self.economics, &self.context)
    }
}
