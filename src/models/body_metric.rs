use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, FitnessError, FitnessResult};

/// One body-metric observation. Every measurement is optional; partial
/// samples are normal and the score aggregator works with whatever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BodyMetricSample {
    pub id: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate_bpm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vo2_max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// 1 (calm) to 10 (maximal stress)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<u8>,
}

impl BodyMetricSample {
    /// Empty sample for `user_id` at `timestamp`; fill in the fields that were measured.
    pub fn new(id: impl Into<String>, user_id: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            user_id: user_id.into(),
            timestamp,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> FitnessResult<()> {
        if let Some(weight) = self.weight_kg {
            ensure_positive("weight_kg", weight)?;
        }
        if let Some(body_fat) = self.body_fat_pct {
            ensure_positive("body_fat_pct", body_fat)?;
        }
        if let Some(hr) = self.resting_heart_rate_bpm {
            ensure_positive("resting_heart_rate_bpm", hr)?;
        }
        if let Some(vo2) = self.vo2_max {
            ensure_positive("vo2_max", vo2)?;
        }
        if let Some(sleep) = self.sleep_hours {
            if !sleep.is_finite() || sleep < 0.0 {
                return Err(FitnessError::invalid(format!(
                    "sleep_hours must be non-negative, got {}",
                    sleep
                )));
            }
        }
        if let Some(stress) = self.stress_level {
            if !(1..=10).contains(&stress) {
                return Err(FitnessError::invalid(format!(
                    "stress_level must be between 1 and 10, got {}",
                    stress
                )));
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.weight_kg.is_none()
            && self.body_fat_pct.is_none()
            && self.resting_heart_rate_bpm.is_none()
            && self.vo2_max.is_none()
            && self.sleep_hours.is_none()
            && self.stress_level.is_none()
    }
}
