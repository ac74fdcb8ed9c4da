use rand::RngCore;

/// One Monte Carlo run: resample parameters, recompute the score.
///
/// Implementations own the distribution sampling; the simulator only
/// aggregates the returned scores. Every parameter must already be validated
/// so a run cannot fail.
pub trait IScoreSampler {
    fn sample_score(&self, rng: &mut dyn RngCore) -> f64;
}

/// Adapts a closure into an [`IScoreSampler`].
pub struct SamplerFn<F>(pub F);

impl<F> IScoreSampler for SamplerFn<F>
where
    F: Fn(&mut dyn RngCore) -> f64,
{
    fn sample_score(&self, rng: &mut dyn RngCore) -> f64 {
        (self.0)(rng)
    }
}
