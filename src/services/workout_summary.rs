// Aggregations over a workout history (the numbers behind the dashboard charts)

use chrono::{DateTime, Datelike, Duration, Utc};
use std::collections::BTreeMap;

use crate::models::{WorkoutRecord, WorkoutType};

/// Length of the window used to measure training frequency.
pub const FREQUENCY_WINDOW_DAYS: i64 = 28;

/// Average workouts per week over the 28 days ending at the most recent workout.
///
/// Returns `None` for an empty history: no workouts logged is "no signal",
/// not a frequency of zero.
pub fn workouts_per_week(history: &[WorkoutRecord]) -> Option<f64> {
    let latest = history.iter().map(|w| w.timestamp).max()?;
    let window_start = latest - Duration::days(FREQUENCY_WINDOW_DAYS);

    let count = history
        .iter()
        .filter(|w| w.timestamp > window_start)
        .count();

    Some(count as f64 / (FREQUENCY_WINDOW_DAYS as f64 / 7.0))
}

/// Total calories per 7-day bucket ending at `as_of`, oldest bucket first.
///
/// Workouts after `as_of` or older than `weeks` full weeks are ignored.
pub fn calories_by_week(history: &[WorkoutRecord], as_of: DateTime<Utc>, weeks: usize) -> Vec<u32> {
    let mut buckets = vec![0u32; weeks];
    let week = Duration::days(7);

    for workout in history {
        let age = as_of - workout.timestamp;
        if age < Duration::zero() {
            continue;
        }

        let weeks_back = (age.num_seconds() / week.num_seconds()) as usize;
        if weeks_back < weeks {
            let index = weeks - 1 - weeks_back;
            buckets[index] = buckets[index].saturating_add(workout.calories);
        }
    }

    buckets
}

/// Total minutes trained per workout type.
pub fn duration_by_type(history: &[WorkoutRecord]) -> BTreeMap<WorkoutType, u32> {
    let mut totals = BTreeMap::new();
    for workout in history {
        *totals.entry(workout.workout_type).or_insert(0) += workout.duration_minutes;
    }
    totals
}

/// Workout count per weekday, Monday first.
pub fn workouts_by_weekday(history: &[WorkoutRecord]) -> [u32; 7] {
    let mut counts = [0u32; 7];
    for workout in history {
        counts[workout.timestamp.weekday().num_days_from_monday() as usize] += 1;
    }
    counts
}

pub fn total_calories(history: &[WorkoutRecord]) -> u32 {
    history.iter().map(|w| w.calories).sum()
}
