use convenience_core::errors::LearningError;
use convenience_observability::learning_span;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default learning rate for [`LogisticModel::update`].
pub const DEFAULT_LEARNING_RATE: f64 = 0.05;
/// Default confidence steepness.
pub const DEFAULT_K_CONF: f64 = 0.2;
/// Default number of observations at which confidence reaches 0.5.
pub const DEFAULT_THETA: u32 = 20;

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Logistic choice model: `P(choose) = σ(w·x + b)`.
///
/// Updated one observed decision at a time; confidence grows with the number
/// of decisions seen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub bias: f64,
    pub k_conf: f64,
    pub theta: u32,
    /// Number of decisions observed.
    pub seen: u32,
}

impl LogisticModel {
    /// Zero-initialized model over `features` inputs.
    pub fn new(features: usize) -> Self {
        Self::with_weights(vec![0.0; features])
    }

    pub fn with_weights(weights: Vec<f64>) -> Self {
        Self {
            weights,
            bias: 0.0,
            k_conf: DEFAULT_K_CONF,
            theta: DEFAULT_THETA,
            seen: 0,
        }
    }

    fn check_len(&self, features: &[f64]) -> Result<(), LearningError> {
        if features.len() != self.weights.len() {
            return Err(LearningError::FeatureLengthMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }
        Ok(())
    }

    /// Probability the user picks the option described by `features`.
    pub fn predict_prob(&self, features: &[f64]) -> Result<f64, LearningError> {
        self.check_len(features)?;
        let z: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        Ok(sigmoid(z))
    }

    /// One online gradient step toward `actual_choice` (1.0 chosen, 0.0 not).
    pub fn update(
        &mut self,
        features: &[f64],
        actual_choice: f64,
        learning_rate: f64,
    ) -> Result<(), LearningError> {
        if !(learning_rate.is_finite() && learning_rate > 0.0) {
            return Err(LearningError::InvalidLearningRate {
                rate: learning_rate,
            });
        }
        let _span = learning_span!(features.len()).entered();

        let predicted = self.predict_prob(features)?;
        let delta = actual_choice - predicted;
        for (w, x) in self.weights.iter_mut().zip(features) {
            *w += learning_rate * delta * x;
        }
        self.bias += learning_rate * delta;
        self.seen += 1;

        debug!(predicted, actual_choice, seen = self.seen, "preference model updated");
        Ok(())
    }

    /// [`update`](Self::update) with the default learning rate.
    pub fn observe(&mut self, features: &[f64], actual_choice: f64) -> Result<(), LearningError> {
        self.update(features, actual_choice, DEFAULT_LEARNING_RATE)
    }

    /// `σ(k_conf × (seen − theta))`: 0.5 after `theta` decisions.
    pub fn confidence(&self) -> f64 {
        sigmoid(self.k_conf * (self.seen as f64 - self.theta as f64))
    }
}
