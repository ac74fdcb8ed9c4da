/// Preference-learning errors.
#[derive(Debug, thiserror::Error)]
pub enum LearningError {
    #[error("feature vector has {actual} entries, model expects {expected}")]
    FeatureLengthMismatch { expected: usize, actual: usize },

    #[error("learning rate must be positive and finite, got {rate}")]
    InvalidLearningRate { rate: f64 },
}
