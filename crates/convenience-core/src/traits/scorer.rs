use crate::errors::ConvenienceResult;
use crate::model::{Context, DecisionOption, EvaluationResult, TimeEconomics};

/// Scores a decision option against the decision maker's economics and context.
pub trait IScorer: Send + Sync {
    /// Produce the score and its full breakdown.
    fn evaluate(
        &self,
        option: &DecisionOption,
        economics: &TimeEconomics,
        context: &Context,
    ) -> ConvenienceResult<EvaluationResult>;

    /// Scalar score only.
    fn score(
        &self,
        option: &DecisionOption,
        economics: &TimeEconomics,
        context: &Context,
    ) -> ConvenienceResult<f64> {
        Ok(self.evaluate(option, economics, context)?.score)
    }
}
