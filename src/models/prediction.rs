use serde::{Deserialize, Serialize};

/// Upper bound on the number of recommendation strings in a prediction.
pub const MAX_RECOMMENDATIONS: usize = 5;

/// Derived, ephemeral prediction for one user. Recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitnessPrediction {
    pub user_id: String,
    pub predicted_weight_kg: f64,
    pub recommended_calories: i32,
    /// 0-100
    pub fitness_score: u8,
    pub recommendations: Vec<String>,
    pub next_goal: String,
}

/// Where a prediction came from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PredictionSource {
    /// Computed by the local formulas, as requested
    Local,
    /// Returned by the remote prediction service
    Remote,
    /// Remote was requested but failed; computed locally instead
    Fallback { reason: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionOutcome {
    pub prediction: FitnessPrediction,
    pub source: PredictionSource,
}

impl PredictionOutcome {
    pub fn used_fallback(&self) -> bool {
        matches!(self.source, PredictionSource::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&str> {
        match &self.source {
            PredictionSource::Fallback { reason } => Some(reason),
            _ => None,
        }
    }
}
