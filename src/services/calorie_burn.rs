//! MET-based estimate of calories burned during a workout.

use crate::error::{ensure_positive, FitnessResult};
use crate::models::{Intensity, WorkoutType};

/// Metabolic equivalent for an activity type at an intensity.
pub fn met_value(workout_type: WorkoutType, intensity: Intensity) -> f64 {
    match (workout_type, intensity) {
        (WorkoutType::Cardio, Intensity::Low) => 5.0,
        (WorkoutType::Cardio, Intensity::Medium) => 7.5,
        (WorkoutType::Cardio, Intensity::High) => 10.0,
        (WorkoutType::Strength, Intensity::Low) => 3.0,
        (WorkoutType::Strength, Intensity::Medium) => 5.0,
        (WorkoutType::Strength, Intensity::High) => 6.0,
        (WorkoutType::Flexibility, Intensity::Low) => 2.5,
        (WorkoutType::Flexibility, Intensity::Medium) => 3.0,
        (WorkoutType::Flexibility, Intensity::High) => 4.0,
        (WorkoutType::Sports, Intensity::Low) => 4.0,
        (WorkoutType::Sports, Intensity::Medium) => 6.0,
        (WorkoutType::Sports, Intensity::High) => 8.0,
        (WorkoutType::Other, Intensity::Low) => 3.0,
        (WorkoutType::Other, Intensity::Medium) => 5.0,
        (WorkoutType::Other, Intensity::High) => 7.0,
    }
}

/// Calories burned = MET × weight (kg) × duration (h), rounded.
pub fn calories_burned(
    weight_kg: f64,
    duration_min: f64,
    workout_type: WorkoutType,
    intensity: Intensity,
) -> FitnessResult<u32> {
    ensure_positive("duration_min", duration_min)?;
    ensure_positive("weight_kg", weight_kg)?;

    let met = met_value(workout_type, intensity);
    Ok((met * weight_kg * (duration_min / 60.0)).round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FitnessError;

    #[test]
    fn test_met_table() {
        let expected = [
            (WorkoutType::Cardio, [5.0, 7.5, 10.0]),
            (WorkoutType::Strength, [3.0, 5.0, 6.0]),
            (WorkoutType::Flexibility, [2.5, 3.0, 4.0]),
            (WorkoutType::Sports, [4.0, 6.0, 8.0]),
            (WorkoutType::Other, [3.0, 5.0, 7.0]),
        ];

        for (workout_type, mets) in expected {
            for (intensity, met) in Intensity::all().iter().zip(mets) {
                assert_eq!(met_value(workout_type, *intensity), met, "{} {}", workout_type, intensity);
            }
        }
    }

    #[test]
    fn test_calories_burned() {
        // 10 MET × 70kg × 0.5h
        assert_eq!(calories_burned(70.0, 30.0, WorkoutType::Cardio, Intensity::High).unwrap(), 350);
        // 2.5 MET × 78kg × 0.75h = 146.25
        assert_eq!(
            calories_burned(78.0, 45.0, WorkoutType::Flexibility, Intensity::Low).unwrap(),
            146
        );
        // 5 MET × 78kg × 1.5h
        assert_eq!(calories_burned(78.0, 90.0, WorkoutType::Strength, Intensity::Medium).unwrap(), 585);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            calories_burned(70.0, 0.0, WorkoutType::Cardio, Intensity::Low),
            Err(FitnessError::InvalidInput(_))
        ));
        assert!(matches!(
            calories_burned(-70.0, 30.0, WorkoutType::Cardio, Intensity::Low),
            Err(FitnessError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_intensity_never_lowers_burn() {
        for workout_type in WorkoutType::all() {
            let burns: Vec<u32> = Intensity::all()
                .iter()
                .map(|i| calories_burned(75.0, 60.0, *workout_type, *i).unwrap())
                .collect();
            assert!(burns.windows(2).all(|w| w[0] <= w[1]), "{}: {:?}", workout_type, burns);
        }
    }
}
