mod sampler;
mod scorer;

pub use sampler::{IScoreSampler, SamplerFn};
pub use scorer::IScorer;
