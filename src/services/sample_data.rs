// Deterministic demo data: a profile plus plausible workout and metric histories.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::FitnessResult;
use crate::models::{
    ActivityLevel, BodyMetricSample, FitnessGoal, Gender, Intensity, SessionContext, UserProfile,
    WorkoutRecord, WorkoutType,
};
use crate::services::calorie_burn::calories_burned;
use crate::services::metrics_calculator::round_to_tenth;

/// Probability that a given day has a workout.
const ACTIVE_DAY_PROBABILITY: f64 = 0.7;

/// Bands the metric random walks stay inside.
const WEIGHT_DRIFT: f64 = 0.2;
const BODY_FAT_RANGE: (f64, f64) = (3.0, 60.0);
const RESTING_HR_RANGE: (f64, f64) = (40.0, 100.0);
const VO2_MAX_RANGE: (f64, f64) = (20.0, 70.0);

pub fn demo_profile() -> UserProfile {
    UserProfile::new(
        "user-1",
        "Alex Johnson",
        32,
        Gender::Male,
        78.0,
        178.0,
        ActivityLevel::Moderate,
        FitnessGoal::GainMuscle,
    )
}

/// Generator for reproducible histories. The same seed and `as_of` always
/// produce the same data.
pub struct SampleDataGenerator {
    rng: StdRng,
    as_of: DateTime<Utc>,
}

impl SampleDataGenerator {
    pub fn new(seed: u64, as_of: DateTime<Utc>) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            as_of,
        }
    }

    /// Workouts over the last `days` days, most recent first, with roughly
    /// 30% rest days. Calories come from the MET estimator.
    pub fn workout_history(&mut self, profile: &UserProfile, days: u32) -> FitnessResult<Vec<WorkoutRecord>> {
        let mut workouts = Vec::new();

        for day in 0..days {
            if !self.rng.gen_bool(ACTIVE_DAY_PROBABILITY) {
                continue;
            }

            let workout_type = WorkoutType::all()[self.rng.gen_range(0..WorkoutType::all().len())];
            let intensity = Intensity::all()[self.rng.gen_range(0..Intensity::all().len())];
            let duration: u32 = self.rng.gen_range(30..90);
            let calories = calories_burned(profile.weight_kg, f64::from(duration), workout_type, intensity)?;
            let notes = self.rng.gen_bool(0.3).then(|| "Felt great today!".to_string());

            let mut workout = WorkoutRecord::new(
                profile.id.clone(),
                self.as_of - Duration::days(i64::from(day)),
                duration,
                workout_type,
                intensity,
                calories,
                notes,
            )?;
            workout.id = format!("workout-{}", day);
            workouts.push(workout);
        }

        Ok(workouts)
    }

    /// One full metric sample per day, most recent first, drifting slowly
    /// from the profile's baseline. Weight stays within 20% of the profile
    /// weight and the other walks within fixed physiological bands.
    pub fn metric_history(&mut self, profile: &UserProfile, days: u32) -> Vec<BodyMetricSample> {
        let weight_range = (
            profile.weight_kg * (1.0 - WEIGHT_DRIFT),
            profile.weight_kg * (1.0 + WEIGHT_DRIFT),
        );
        let mut weight = profile.weight_kg;
        let mut body_fat = 22.0;
        let mut resting_hr = 68.0;
        let mut vo2_max = 35.0;

        let mut samples = Vec::with_capacity(days as usize);

        // Walk forward in time from the oldest day, then reverse
        for day in (0..days).rev() {
            weight = walk(weight + self.rng.gen_range(-0.2..0.2), weight_range);
            body_fat = walk(body_fat + self.rng.gen_range(-0.2..0.1), BODY_FAT_RANGE);
            resting_hr = (resting_hr + self.rng.gen_range(-1.0..1.0_f64))
                .clamp(RESTING_HR_RANGE.0, RESTING_HR_RANGE.1)
                .round();
            vo2_max = walk(vo2_max + self.rng.gen_range(-0.05..0.15), VO2_MAX_RANGE);

            let mut sample = BodyMetricSample::new(
                format!("metric-{}", day),
                profile.id.clone(),
                self.as_of - Duration::days(i64::from(day)),
            );
            sample.weight_kg = Some(weight);
            sample.body_fat_pct = Some(body_fat);
            sample.resting_heart_rate_bpm = Some(resting_hr);
            sample.vo2_max = Some(vo2_max);
            sample.sleep_hours = Some(round_to_tenth(self.rng.gen_range(6.0..8.0)));
            sample.stress_level = Some(self.rng.gen_range(2..=8));
            samples.push(sample);
        }

        samples.reverse();
        samples
    }

    /// Demo session: the demo profile with `days` of workouts and metrics.
    pub fn session(&mut self, days: u32) -> FitnessResult<SessionContext> {
        let profile = demo_profile();
        let workouts = self.workout_history(&profile, days)?;
        let metrics = self.metric_history(&profile, days);
        Ok(SessionContext::with_history(profile, workouts, metrics))
    }
}

fn walk(value: f64, (min, max): (f64, f64)) -> f64 {
    round_to_tenth(value.clamp(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn as_of() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = SampleDataGenerator::new(42, as_of()).session(30).unwrap();
        let b = SampleDataGenerator::new(42, as_of()).session(30).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_histories_are_most_recent_first_and_valid() {
        let session = SampleDataGenerator::new(7, as_of()).session(30).unwrap();

        assert_eq!(session.validate(), Ok(()));
        assert!(!session.workouts.is_empty());
        assert!(session.workouts.len() <= 30);
        assert_eq!(session.metrics.len(), 30);

        assert!(session.workouts.windows(2).all(|w| w[0].timestamp > w[1].timestamp));
        assert!(session.metrics.windows(2).all(|m| m[0].timestamp > m[1].timestamp));
        assert_eq!(session.metrics[0].timestamp, as_of());
    }

    #[test]
    fn test_generated_workouts_within_bounds() {
        let profile = demo_profile();
        let workouts = SampleDataGenerator::new(1, as_of()).workout_history(&profile, 60).unwrap();

        for workout in &workouts {
            assert!((30..90).contains(&workout.duration_minutes));
            let expected = calories_burned(
                profile.weight_kg,
                f64::from(workout.duration_minutes),
                workout.workout_type,
                workout.intensity,
            )
            .unwrap();
            assert_eq!(workout.calories, expected);
        }
    }

    #[test]
    fn test_long_histories_stay_valid() {
        for seed in [7, 42] {
            let session = SampleDataGenerator::new(seed, as_of()).session(1000).unwrap();
            assert_eq!(session.validate(), Ok(()));
            assert_eq!(session.metrics.len(), 1000);

            for sample in &session.metrics {
                let body_fat = sample.body_fat_pct.unwrap();
                assert!((3.0..=60.0).contains(&body_fat), "body fat {}", body_fat);
                let hr = sample.resting_heart_rate_bpm.unwrap();
                assert!((40.0..=100.0).contains(&hr), "resting hr {}", hr);
                let vo2 = sample.vo2_max.unwrap();
                assert!((20.0..=70.0).contains(&vo2), "vo2 max {}", vo2);
                let weight = sample.weight_kg.unwrap();
                assert!((62.0..=94.0).contains(&weight), "weight {}", weight);
            }
        }
    }

    #[test]
    fn test_generated_metrics_stay_plausible() {
        let profile = demo_profile();
        let metrics = SampleDataGenerator::new(3, as_of()).metric_history(&profile, 30);

        for sample in &metrics {
            assert!(sample.validate().is_ok());
            let stress = sample.stress_level.unwrap();
            assert!((2..=8).contains(&stress));
            let sleep = sample.sleep_hours.unwrap();
            assert!((6.0..=8.0).contains(&sleep));
        }
    }
}
