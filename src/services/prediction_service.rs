use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::{PredictionClient, PredictionRequest};
use crate::config::PredictionConfig;
use crate::error::{FitnessError, FitnessResult};
use crate::models::{FitnessPrediction, PredictionOutcome, PredictionSource, SessionContext};
use crate::services::fitness_score::{fitness_score, FitnessSignals};
use crate::services::metrics_calculator::{bmr, calorie_target, round_to_tenth, tdee};
use crate::services::recommendation_service::{
    generate_recommendations, next_goal, RecommendationProfile,
};

/// Energy content of one kilogram of body weight (kcal).
pub const KCAL_PER_KG: f64 = 7700.0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PredictionMode {
    #[default]
    Local,
    Remote,
}

impl std::str::FromStr for PredictionMode {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(PredictionMode::Local),
            "remote" => Ok(PredictionMode::Remote),
            _ => Err(FitnessError::invalid(format!("unknown prediction mode: {}", s))),
        }
    }
}

/// Builds predictions locally or through the remote model, falling back to
/// the local formulas whenever the remote call fails.
#[derive(Clone)]
pub struct PredictionService {
    config: PredictionConfig,
    client: Option<PredictionClient>,
}

impl PredictionService {
    /// Fails with `InvalidInput` when the config does not validate.
    pub fn new(config: PredictionConfig) -> FitnessResult<Self> {
        config.validate()?;

        let client = match PredictionClient::new(&config) {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("Prediction client unavailable, remote predictions will fall back: {}", e);
                None
            }
        };

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Predict for one user. Only caller errors (invalid or missing input)
    /// are returned as `Err`; remote failures become a fallback outcome.
    pub async fn predict(
        &self,
        session: &SessionContext,
        mode: PredictionMode,
    ) -> FitnessResult<PredictionOutcome> {
        session.validate()?;

        match mode {
            PredictionMode::Local => Ok(PredictionOutcome {
                prediction: self.predict_local(session)?,
                source: PredictionSource::Local,
            }),
            PredictionMode::Remote => self.predict_remote(session).await,
        }
    }

    /// Predict for several users concurrently. Each prediction is independent.
    pub async fn predict_many(
        &self,
        sessions: &[SessionContext],
        mode: PredictionMode,
    ) -> Vec<FitnessResult<PredictionOutcome>> {
        join_all(sessions.iter().map(|session| self.predict(session, mode))).await
    }

    /// Local formulas: calorie target from BMR/TDEE, composite score, linear
    /// weight projection over the horizon, rule-based advice.
    pub fn predict_local(&self, session: &SessionContext) -> FitnessResult<FitnessPrediction> {
        let profile = &session.profile;
        profile.validate()?;

        let bmr = bmr(profile.weight_kg, profile.height_cm, profile.age, profile.gender)?;
        let tdee = tdee(bmr, profile.activity_level);
        let recommended_calories = calorie_target(tdee, profile.goal);

        let signals = FitnessSignals::from_session(profile, &session.workouts, &session.metrics)?;
        let score = fitness_score(&signals);

        let predicted_weight = project_weight(
            profile.weight_kg,
            recommended_calories.saturating_sub(tdee),
            self.config.horizon_days,
        );

        let advice_profile = RecommendationProfile::from_profile(profile, signals.resting_heart_rate)?;

        tracing::debug!(
            user_id = %profile.id,
            bmr,
            tdee,
            recommended_calories,
            score,
            predicted_weight,
            "Computed local prediction"
        );

        Ok(FitnessPrediction {
            user_id: profile.id.clone(),
            predicted_weight_kg: predicted_weight,
            recommended_calories,
            fitness_score: score,
            recommendations: generate_recommendations(&advice_profile),
            next_goal: next_goal(profile.goal, score),
        })
    }

    async fn predict_remote(&self, session: &SessionContext) -> FitnessResult<PredictionOutcome> {
        let user_id = session.user_id();

        let remote = match &self.client {
            Some(client) => {
                let request = PredictionRequest::from(session);
                match client.predict(&request).await {
                    Ok(response) => response.into_prediction(user_id),
                    Err(e) => Err(e),
                }
            }
            None => Err(crate::api::ApiError::Unknown("prediction client unavailable".to_string())),
        };

        match remote {
            Ok(prediction) => {
                info!("Received remote prediction for user {}", user_id);
                Ok(PredictionOutcome {
                    prediction,
                    source: PredictionSource::Remote,
                })
            }
            Err(e) => {
                warn!("Remote prediction failed for user {}, using local model: {}", user_id, e);
                Ok(PredictionOutcome {
                    prediction: self.predict_local(session)?,
                    source: PredictionSource::Fallback {
                        reason: e.to_string(),
                    },
                })
            }
        }
    }
}

/// Linear projection: the daily calorie balance accumulated over the horizon,
/// at 7700 kcal per kg. Rounded to one decimal.
pub fn project_weight(current_weight_kg: f64, daily_balance_kcal: i32, horizon_days: u32) -> f64 {
    let change = f64::from(daily_balance_kcal) * f64::from(horizon_days) / KCAL_PER_KG;
    round_to_tenth(current_weight_kg + change)
}
