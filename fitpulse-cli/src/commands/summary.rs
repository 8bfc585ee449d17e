use anyhow::Result;
use chrono::Utc;
use clap::Args;
use fitpulse::services::workout_summary::{
    calories_by_week, duration_by_type, total_calories, workouts_by_weekday, workouts_per_week,
};
use std::path::PathBuf;

use crate::config::Config;
use crate::storage::load_session;
use crate::ui;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const RECENT_WORKOUTS: usize = 5;

#[derive(Args)]
pub struct SummaryCommand {
    /// Session file (JSON) with the workout history
    #[arg(short, long)]
    data: PathBuf,

    /// Number of weeks in the calorie chart
    #[arg(short, long, default_value = "4")]
    weeks: usize,
}

impl SummaryCommand {
    pub async fn execute(self, config: &Config) -> Result<()> {
        let session = load_session(&self.data)?;
        let history = &session.workouts;

        ui::header(&format!("Workout Summary: {}", session.profile.name));

        if history.is_empty() {
            println!("No workouts logged yet.");
            return Ok(());
        }

        ui::field("Workouts", history.len());
        ui::field("Total calories", format!("{} kcal", total_calories(history)));
        if let Some(per_week) = workouts_per_week(history) {
            ui::field("Workouts per week", format!("{:.2}", per_week));
        }

        // Chart ends at the newest workout so old histories still show data
        let as_of = history
            .iter()
            .map(|w| w.timestamp)
            .max()
            .unwrap_or_else(Utc::now);
        let weekly = calories_by_week(history, as_of, self.weeks);
        let max = weekly.iter().copied().max().unwrap_or(0);

        println!();
        println!("Calories by week (oldest first)");
        for (i, calories) in weekly.iter().enumerate() {
            let weeks_ago = weekly.len() - 1 - i;
            println!("  -{}w {:>6} {}", weeks_ago, calories, ui::bar(*calories, max));
        }

        println!();
        println!("Minutes by type");
        for (workout_type, minutes) in duration_by_type(history) {
            ui::field(workout_type.as_str(), minutes);
        }

        println!();
        println!("Workouts by weekday");
        let by_weekday = workouts_by_weekday(history);
        let busiest = by_weekday.iter().copied().max().unwrap_or(0);
        for (day, count) in WEEKDAYS.iter().zip(by_weekday) {
            println!("  {} {:>3} {}", day, count, ui::bar(count, busiest));
        }

        println!();
        println!("Recent workouts");
        for workout in history.iter().take(RECENT_WORKOUTS) {
            println!(
                "  {}  {:<11} {:<6} {:>3} min {:>5} kcal",
                workout.timestamp.format(&config.display.date_format),
                workout.workout_type.as_str(),
                workout.intensity.as_str(),
                workout.duration_minutes,
                workout.calories
            );
        }

        Ok(())
    }
}
