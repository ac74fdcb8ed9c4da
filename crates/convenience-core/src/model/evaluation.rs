use serde::{Deserialize, Serialize};

use super::option::DecisionOption;

/// Every intermediate value of one score computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub b_time: f64,
    pub b_stress: f64,
    pub b_opportunity: f64,
    pub b_comfort: f64,
    pub b_reliability: f64,
    pub b_total: f64,
    pub c_extra: f64,
    pub c_base: f64,
    pub score: f64,
}

impl ScoreBreakdown {
    /// Entry names in display order.
    pub const KEYS: [&'static str; 9] = [
        "B_time",
        "B_stress",
        "B_opportunity",
        "B_comfort",
        "B_reliability",
        "B_total",
        "C_extra",
        "C_base",
        "score",
    ];

    /// Named entries in display order.
    pub fn entries(&self) -> [(&'static str, f64); 9] {
        let values = [
            self.b_time,
            self.b_stress,
            self.b_opportunity,
            self.b_comfort,
            self.b_reliability,
            self.b_total,
            self.c_extra,
            self.c_base,
            self.score,
        ];
        let mut out = [("", 0.0); 9];
        for (slot, (key, value)) in out.iter_mut().zip(Self::KEYS.iter().zip(values)) {
            *slot = (*key, value);
        }
        out
    }

    /// Look up an entry by its display name.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries()
            .into_iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }
}

/// Immutable outcome of evaluating one option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub option: DecisionOption,
    pub breakdown: ScoreBreakdown,
    pub score: f64,
}
