// Wire format of the prediction service. Field names are snake_case at this
// boundary and follow the service's schema, not the engine's type names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::models::{
    ActivityLevel, BodyMetricSample, FitnessGoal, FitnessPrediction, Gender, Intensity,
    SessionContext, UserProfile, WorkoutRecord, WorkoutType, MAX_RECOMMENDATIONS,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub user: UserPayload,
    pub workout_history: Vec<WorkoutPayload>,
    pub fitness_metrics: Vec<MetricPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserPayload {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub activity_level: ActivityLevel,
    pub goals: FitnessGoal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPayload {
    pub date: DateTime<Utc>,
    pub duration: u32,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub calories: u32,
    pub intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricPayload {
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vo2_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
}

/// Success body returned by the prediction service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResponse {
    pub predicted_weight: f64,
    pub recommended_calories: f64,
    pub fitness_score: f64,
    pub recommendations: Vec<String>,
    pub next_goal: String,
}

impl From<&UserProfile> for UserPayload {
    fn from(profile: &UserProfile) -> Self {
        Self {
            name: profile.name.clone(),
            age: profile.age,
            gender: profile.gender,
            weight: profile.weight_kg,
            height: profile.height_cm,
            activity_level: profile.activity_level,
            goals: profile.goal,
        }
    }
}

impl From<&WorkoutRecord> for WorkoutPayload {
    fn from(workout: &WorkoutRecord) -> Self {
        Self {
            date: workout.timestamp,
            duration: workout.duration_minutes,
            workout_type: workout.workout_type,
            calories: workout.calories,
            intensity: workout.intensity,
            notes: workout.notes.clone(),
        }
    }
}

impl From<&BodyMetricSample> for MetricPayload {
    fn from(sample: &BodyMetricSample) -> Self {
        Self {
            date: sample.timestamp,
            weight: sample.weight_kg,
            body_fat: sample.body_fat_pct,
            resting_heart_rate: sample.resting_heart_rate_bpm,
            vo2_max: sample.vo2_max,
            sleep_hours: sample.sleep_hours,
            stress_level: sample.stress_level,
        }
    }
}

impl From<&SessionContext> for PredictionRequest {
    fn from(session: &SessionContext) -> Self {
        Self {
            user: UserPayload::from(&session.profile),
            workout_history: session.workouts.iter().map(WorkoutPayload::from).collect(),
            fitness_metrics: session.metrics.iter().map(MetricPayload::from).collect(),
        }
    }
}

impl PredictionResponse {
    /// Map the service response onto the prediction record.
    ///
    /// Out-of-range values make the whole body count as malformed. Extra
    /// recommendations beyond the cap are dropped.
    pub fn into_prediction(self, user_id: &str) -> Result<FitnessPrediction, ApiError> {
        if !self.predicted_weight.is_finite() || self.predicted_weight <= 0.0 {
            return Err(ApiError::MalformedResponse(format!(
                "predicted_weight out of range: {}",
                self.predicted_weight
            )));
        }

        if !self.recommended_calories.is_finite()
            || self.recommended_calories.abs() > f64::from(i32::MAX)
        {
            return Err(ApiError::MalformedResponse(format!(
                "recommended_calories out of range: {}",
                self.recommended_calories
            )));
        }

        if !(0.0..=100.0).contains(&self.fitness_score) {
            return Err(ApiError::MalformedResponse(format!(
                "fitness_score out of range: {}",
                self.fitness_score
            )));
        }

        let mut recommendations = self.recommendations;
        recommendations.truncate(MAX_RECOMMENDATIONS);

        Ok(FitnessPrediction {
            user_id: user_id.to_string(),
            predicted_weight_kg: self.predicted_weight,
            recommended_calories: self.recommended_calories.round() as i32,
            fitness_score: self.fitness_score.round() as u8,
            recommendations,
            next_goal: self.next_goal,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn session() -> SessionContext {
        let profile = UserProfile::new(
            "user-1",
            "Alex Johnson",
            32,
            Gender::Male,
            78.0,
            178.0,
            ActivityLevel::Moderate,
            FitnessGoal::GainMuscle,
        );
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap();
        let workout = WorkoutRecord::new(
            "user-1",
            date,
            45,
            WorkoutType::Cardio,
            Intensity::High,
            585,
            Some("Felt great today!".to_string()),
        )
        .unwrap();
        let mut sample = BodyMetricSample::new("metric-0", "user-1", date);
        sample.weight_kg = Some(77.8);
        sample.stress_level = Some(4);

        SessionContext::with_history(profile, vec![workout], vec![sample])
    }

    #[test]
    fn test_request_shape() {
        let request = PredictionRequest::from(&session());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(
            value,
            json!({
                "user": {
                    "name": "Alex Johnson",
                    "age": 32,
                    "gender": "male",
                    "weight": 78.0,
                    "height": 178.0,
                    "activity_level": "moderate",
                    "goals": "gain_muscle"
                },
                "workout_history": [{
                    "date": "2024-01-15T08:00:00Z",
                    "duration": 45,
                    "type": "cardio",
                    "calories": 585,
                    "intensity": "high",
                    "notes": "Felt great today!"
                }],
                "fitness_metrics": [{
                    "date": "2024-01-15T08:00:00Z",
                    "weight": 77.8,
                    "stress_level": 4
                }]
            })
        );
    }

    fn response() -> PredictionResponse {
        PredictionResponse {
            predicted_weight: 79.1,
            recommended_calories: 2994.4,
            fitness_score: 71.6,
            recommendations: vec!["a".into(), "b".into()],
            next_goal: "Keep going".into(),
        }
    }

    #[test]
    fn test_response_mapping() {
        let prediction = response().into_prediction("user-1").unwrap();
        assert_eq!(prediction.user_id, "user-1");
        assert_eq!(prediction.predicted_weight_kg, 79.1);
        assert_eq!(prediction.recommended_calories, 2994);
        assert_eq!(prediction.fitness_score, 72);
        assert_eq!(prediction.next_goal, "Keep going");
    }

    #[test]
    fn test_response_recommendations_capped() {
        let mut body = response();
        body.recommendations = (0..8).map(|i| format!("tip {}", i)).collect();
        let prediction = body.into_prediction("user-1").unwrap();
        assert_eq!(prediction.recommendations.len(), 5);
        assert_eq!(prediction.recommendations[4], "tip 4");
    }

    #[test]
    fn test_out_of_range_response_is_malformed() {
        let mut body = response();
        body.fitness_score = 140.0;
        assert!(matches!(body.into_prediction("user-1"), Err(ApiError::MalformedResponse(_))));

        let mut body = response();
        body.predicted_weight = -3.0;
        assert!(matches!(body.into_prediction("user-1"), Err(ApiError::MalformedResponse(_))));
    }
}
