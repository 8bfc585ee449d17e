use anyhow::{Context, Result};
use chrono::Utc;
use clap::Args;
use dialoguer::{Input, Select};
use fitpulse::models::{Intensity, WorkoutRecord, WorkoutType};
use std::path::PathBuf;

use super::parse_date;
use crate::storage::{load_session, save_session};

#[derive(Args)]
pub struct WorkoutCommand {
    /// Session file (JSON) to append the workout to
    #[arg(short, long)]
    data: PathBuf,

    /// Workout type (cardio, strength, flexibility, sports, other); prompted when omitted
    #[arg(short = 't', long = "type")]
    workout_type: Option<WorkoutType>,

    /// Intensity (low, medium, high); prompted when omitted
    #[arg(short, long)]
    intensity: Option<Intensity>,

    /// Duration in minutes; prompted when omitted
    #[arg(short = 'm', long)]
    duration: Option<u32>,

    /// Calories burned; estimated from the profile weight when omitted
    #[arg(short, long)]
    calories: Option<u32>,

    /// Free-form notes
    #[arg(short, long)]
    notes: Option<String>,

    /// Workout date (YYYY-MM-DD), defaults to now
    #[arg(long)]
    date: Option<String>,
}

impl WorkoutCommand {
    pub async fn execute(self) -> Result<()> {
        let mut session = load_session(&self.data)?;

        let workout_type = match self.workout_type {
            Some(workout_type) => workout_type,
            None => select("Workout type", WorkoutType::all())?,
        };
        let intensity = match self.intensity {
            Some(intensity) => intensity,
            None => select("Intensity", Intensity::all())?,
        };
        let duration = match self.duration {
            Some(duration) => duration,
            None => Input::<u32>::new()
                .with_prompt("Duration (minutes)")
                .interact_text()?,
        };
        let timestamp = match self.date.as_deref() {
            Some(date) => parse_date(date)?,
            None => Utc::now(),
        };
        let notes = self.notes.filter(|n| !n.trim().is_empty());

        let workout = match self.calories {
            Some(calories) => WorkoutRecord::new(
                session.user_id(),
                timestamp,
                duration,
                workout_type,
                intensity,
                calories,
                notes,
            )?,
            None => WorkoutRecord::with_estimated_calories(
                session.user_id(),
                timestamp,
                session.profile.weight_kg,
                duration,
                workout_type,
                intensity,
                notes,
            )?,
        };

        let summary = format!(
            "{} min {} ({}), {} kcal",
            workout.duration_minutes, workout.workout_type, workout.intensity, workout.calories
        );

        session.record_workout(workout)?;
        save_session(&self.data, &session).context("Failed to save workout")?;

        println!("✓ Workout logged: {}", summary);
        println!("  {} workouts in {}", session.workouts.len(), self.data.display());

        Ok(())
    }
}

fn select<T: Copy + std::fmt::Display>(prompt: &str, options: &[T]) -> Result<T> {
    let index = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(0)
        .interact()?;
    Ok(options[index])
}
