use anyhow::Result;
use clap::Args;
use fitpulse::services::fitness_score::{
    bmi_score, resting_heart_rate_score, sleep_score, stress_score, vo2_max_score,
    workout_frequency_score,
};
use fitpulse::services::{fitness_score, FitnessSignals};
use std::path::PathBuf;

use crate::storage::load_session;
use crate::ui;

#[derive(Args)]
pub struct ScoreCommand {
    /// Session file (JSON) with profile, workouts and metrics
    #[arg(short, long)]
    data: PathBuf,
}

impl ScoreCommand {
    pub async fn execute(self) -> Result<()> {
        let session = load_session(&self.data)?;
        let signals =
            FitnessSignals::from_session(&session.profile, &session.workouts, &session.metrics)?;
        let score = fitness_score(&signals);

        ui::header(&format!("Fitness Score: {}", session.profile.name));

        let rows: [(&str, Option<f64>, fn(f64) -> f64); 6] = [
            ("BMI", signals.bmi, bmi_score),
            ("Workouts per week", signals.workouts_per_week, workout_frequency_score),
            ("Resting heart rate", signals.resting_heart_rate, resting_heart_rate_score),
            ("VO2 max", signals.vo2_max, vo2_max_score),
            ("Sleep hours", signals.sleep_hours, sleep_score),
            ("Stress level", signals.stress_level, stress_score),
        ];

        for (label, value, sub_score) in rows {
            match value {
                Some(value) => ui::field(
                    label,
                    format!("{:.1} (sub-score {:.0})", value, sub_score(value)),
                ),
                None => ui::field(label, "no data"),
            }
        }

        println!();
        println!("Signals used: {}/6", signals.count());
        println!("Fitness score: {}", ui::score(score));

        Ok(())
    }
}
