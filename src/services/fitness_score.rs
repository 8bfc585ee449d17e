//! Composite 0-100 fitness score.
//!
//! Each available signal is mapped onto a 0-100 sub-score and the result is
//! the average over the signals actually present. Missing signals are skipped
//! rather than imputed, so a sparse sample never drags the score down.

use serde::{Deserialize, Serialize};

use crate::error::FitnessResult;
use crate::models::{BodyMetricSample, UserProfile, WorkoutRecord};
use crate::services::metrics_calculator::bmi;
use crate::services::workout_summary::workouts_per_week;

/// Score returned when no signal is available.
pub const NEUTRAL_SCORE: u8 = 50;

const OPTIMAL_BMI: f64 = 22.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FitnessSignals {
    pub bmi: Option<f64>,
    pub workouts_per_week: Option<f64>,
    pub resting_heart_rate: Option<f64>,
    pub vo2_max: Option<f64>,
    pub sleep_hours: Option<f64>,
    pub stress_level: Option<f64>,
}

impl FitnessSignals {
    /// Collect signals for a user: BMI from the profile, training frequency
    /// from the workout history, and each body metric from the newest sample
    /// that carries it.
    pub fn from_session(
        profile: &UserProfile,
        workouts: &[WorkoutRecord],
        metrics: &[BodyMetricSample],
    ) -> FitnessResult<Self> {
        Ok(Self {
            bmi: Some(bmi(profile.weight_kg, profile.height_cm)?),
            workouts_per_week: workouts_per_week(workouts),
            resting_heart_rate: latest(metrics, |m| m.resting_heart_rate_bpm),
            vo2_max: latest(metrics, |m| m.vo2_max),
            sleep_hours: latest(metrics, |m| m.sleep_hours),
            stress_level: latest(metrics, |m| m.stress_level.map(f64::from)),
        })
    }

    pub fn count(&self) -> usize {
        [
            self.bmi,
            self.workouts_per_week,
            self.resting_heart_rate,
            self.vo2_max,
            self.sleep_hours,
            self.stress_level,
        ]
        .iter()
        .filter(|s| s.is_some())
        .count()
    }
}

fn latest<F>(metrics: &[BodyMetricSample], field: F) -> Option<f64>
where
    F: Fn(&BodyMetricSample) -> Option<f64>,
{
    metrics
        .iter()
        .filter_map(|m| field(m).map(|value| (m.timestamp, value)))
        .max_by_key(|(timestamp, _)| *timestamp)
        .map(|(_, value)| value)
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Optimum at 22, losing 5 points per BMI unit away from it.
pub fn bmi_score(bmi: f64) -> f64 {
    clamp_score(100.0 - ((bmi - OPTIMAL_BMI).abs() * 5.0).min(100.0))
}

/// 20 points per weekly workout up to 5, then 10 points off per extra workout.
pub fn workout_frequency_score(workouts_per_week: f64) -> f64 {
    let score = if workouts_per_week <= 5.0 {
        workouts_per_week * 20.0
    } else {
        100.0 - (workouts_per_week - 5.0) * 10.0
    };
    clamp_score(score)
}

pub fn resting_heart_rate_score(hr: f64) -> f64 {
    let score = if hr < 60.0 {
        100.0 - (60.0 - hr).max(0.0)
    } else if hr <= 70.0 {
        100.0
    } else {
        100.0 - ((hr - 70.0) * 3.0).min(100.0)
    };
    clamp_score(score)
}

pub fn vo2_max_score(vo2_max: f64) -> f64 {
    if vo2_max >= 40.0 {
        100.0
    } else if vo2_max >= 35.0 {
        80.0
    } else if vo2_max >= 30.0 {
        60.0
    } else {
        clamp_score(vo2_max * 2.0)
    }
}

/// Full marks for 7-9 hours.
pub fn sleep_score(hours: f64) -> f64 {
    if (7.0..=9.0).contains(&hours) {
        100.0
    } else if hours < 7.0 {
        clamp_score(hours * 100.0 / 7.0)
    } else {
        clamp_score(100.0 - (hours - 9.0) * 20.0)
    }
}

/// Stress on a 1-10 scale, lower is better.
pub fn stress_score(stress_level: f64) -> f64 {
    clamp_score(100.0 - stress_level * 10.0)
}

/// Average of the sub-scores of the signals present, rounded. 50 with no signals.
pub fn fitness_score(signals: &FitnessSignals) -> u8 {
    let scored = [
        signals.bmi.map(bmi_score),
        signals.workouts_per_week.map(workout_frequency_score),
        signals.resting_heart_rate.map(resting_heart_rate_score),
        signals.vo2_max.map(vo2_max_score),
        signals.sleep_hours.map(sleep_score),
        signals.stress_level.map(stress_score),
    ];

    let mut sum = 0.0;
    let mut count = 0u32;
    for sub_score in scored.into_iter().flatten() {
        sum += sub_score;
        count += 1;
    }

    if count == 0 {
        return NEUTRAL_SCORE;
    }

    let score = (sum / f64::from(count)).round();
    tracing::debug!(signals = count, score, "Computed fitness score");
    score.clamp(0.0, 100.0) as u8
}
