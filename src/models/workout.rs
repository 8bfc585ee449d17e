use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ensure_positive, FitnessError, FitnessResult};
use crate::services::calorie_burn::calories_burned;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    Cardio,
    Strength,
    Flexibility,
    Sports,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl WorkoutType {
    pub fn all() -> &'static [WorkoutType] {
        &[
            WorkoutType::Cardio,
            WorkoutType::Strength,
            WorkoutType::Flexibility,
            WorkoutType::Sports,
            WorkoutType::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Cardio => "cardio",
            WorkoutType::Strength => "strength",
            WorkoutType::Flexibility => "flexibility",
            WorkoutType::Sports => "sports",
            WorkoutType::Other => "other",
        }
    }
}

impl Intensity {
    pub fn all() -> &'static [Intensity] {
        &[Intensity::Low, Intensity::Medium, Intensity::High]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
        }
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for WorkoutType {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cardio" => Ok(WorkoutType::Cardio),
            "strength" => Ok(WorkoutType::Strength),
            "flexibility" => Ok(WorkoutType::Flexibility),
            "sports" => Ok(WorkoutType::Sports),
            "other" => Ok(WorkoutType::Other),
            _ => Err(FitnessError::invalid(format!("unknown workout type: {}", s))),
        }
    }
}

impl std::str::FromStr for Intensity {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(FitnessError::invalid(format!("unknown intensity: {}", s))),
        }
    }
}

/// A logged workout. Immutable once created; histories are kept most-recent-first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutRecord {
    pub id: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub duration_minutes: u32,
    pub workout_type: WorkoutType,
    pub intensity: Intensity,
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl WorkoutRecord {
    /// Create a workout with user-supplied calories
    pub fn new(
        user_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        duration_minutes: u32,
        workout_type: WorkoutType,
        intensity: Intensity,
        calories: u32,
        notes: Option<String>,
    ) -> FitnessResult<Self> {
        let record = Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            timestamp,
            duration_minutes,
            workout_type,
            intensity,
            calories,
            notes,
        };
        record.validate()?;
        Ok(record)
    }

    /// Create a workout whose calories come from the MET-based estimator
    pub fn with_estimated_calories(
        user_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        weight_kg: f64,
        duration_minutes: u32,
        workout_type: WorkoutType,
        intensity: Intensity,
        notes: Option<String>,
    ) -> FitnessResult<Self> {
        let calories = calories_burned(
            weight_kg,
            f64::from(duration_minutes),
            workout_type,
            intensity,
        )?;
        Self::new(
            user_id,
            timestamp,
            duration_minutes,
            workout_type,
            intensity,
            calories,
            notes,
        )
    }

    pub fn validate(&self) -> FitnessResult<()> {
        ensure_positive("duration_minutes", f64::from(self.duration_minutes))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_creation() {
        let now = Utc::now();
        let workout = WorkoutRecord::new(
            "user-1",
            now,
            45,
            WorkoutType::Strength,
            Intensity::High,
            380,
            Some("Felt great today!".to_string()),
        )
        .unwrap();

        assert_eq!(workout.user_id, "user-1");
        assert_eq!(workout.duration_minutes, 45);
        assert_eq!(workout.calories, 380);
        assert!(!workout.id.is_empty());
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = WorkoutRecord::new(
            "user-1",
            Utc::now(),
            0,
            WorkoutType::Cardio,
            Intensity::Low,
            0,
            None,
        );
        assert!(matches!(result, Err(FitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_estimated_calories() {
        // cardio/medium MET 7.5 * 80kg * 1h = 600
        let workout = WorkoutRecord::with_estimated_calories(
            "user-1",
            Utc::now(),
            80.0,
            60,
            WorkoutType::Cardio,
            Intensity::Medium,
            None,
        )
        .unwrap();
        assert_eq!(workout.calories, 600);
    }

    #[test]
    fn test_estimated_calories_requires_weight() {
        let result = WorkoutRecord::with_estimated_calories(
            "user-1",
            Utc::now(),
            0.0,
            60,
            WorkoutType::Cardio,
            Intensity::Medium,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(matches!("yoga".parse::<WorkoutType>(), Err(FitnessError::InvalidInput(_))));
        assert!(matches!("extreme".parse::<Intensity>(), Err(FitnessError::InvalidInput(_))));
        assert_eq!("HIGH".parse::<Intensity>().unwrap(), Intensity::High);
    }
}
