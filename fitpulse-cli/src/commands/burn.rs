use anyhow::Result;
use clap::Args;
use fitpulse::models::{Intensity, WorkoutType};
use fitpulse::services::{calories_burned, met_value};

#[derive(Args)]
pub struct BurnCommand {
    /// Body weight in kg
    #[arg(short, long)]
    weight: f64,

    /// Workout duration in minutes
    #[arg(short, long)]
    duration: f64,

    /// Workout type (cardio, strength, flexibility, sports, other)
    #[arg(short = 't', long = "type")]
    workout_type: WorkoutType,

    /// Intensity (low, medium, high)
    #[arg(short, long, default_value = "medium")]
    intensity: Intensity,
}

impl BurnCommand {
    pub async fn execute(self) -> Result<()> {
        let calories = calories_burned(self.weight, self.duration, self.workout_type, self.intensity)?;
        let met = met_value(self.workout_type, self.intensity);

        println!(
            "Estimated burn: {} kcal ({} {} for {} min, MET {:.1})",
            calories, self.intensity, self.workout_type, self.duration, met
        );

        Ok(())
    }
}
