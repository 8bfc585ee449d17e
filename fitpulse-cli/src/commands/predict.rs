use anyhow::Result;
use clap::Args;
use colored::Colorize;
use fitpulse::models::{PredictionOutcome, PredictionSource};
use fitpulse::services::{PredictionMode, PredictionService};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::Config;
use crate::storage::load_session;
use crate::ui;

#[derive(Args)]
pub struct PredictCommand {
    /// Session file (JSON) with profile, workouts and metrics
    #[arg(short, long)]
    data: PathBuf,

    /// Ask the remote prediction service, falling back to the local model on failure
    #[arg(long, conflicts_with = "local")]
    remote: bool,

    /// Use the local model only
    #[arg(long)]
    local: bool,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

impl PredictCommand {
    fn mode(&self, config: &Config) -> PredictionMode {
        if self.remote {
            PredictionMode::Remote
        } else if self.local {
            PredictionMode::Local
        } else if config.display.prefer_remote {
            PredictionMode::Remote
        } else {
            PredictionMode::Local
        }
    }

    pub async fn execute(self, config: &Config) -> Result<()> {
        let session = load_session(&self.data)?;
        let mode = self.mode(config);
        let service = PredictionService::new(config.prediction.clone())?;

        let spinner = (mode == PredictionMode::Remote && !self.json).then(|| {
            let spinner = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                spinner.set_style(style);
            }
            spinner.set_message(format!("Contacting {}...", config.prediction.base_url));
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });

        let outcome = service.predict(&session, mode).await;

        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        let outcome = outcome?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print_outcome(&session.profile.name, config.prediction.horizon_days, &outcome);
        }

        Ok(())
    }
}

fn print_outcome(name: &str, horizon_days: u32, outcome: &PredictionOutcome) {
    let prediction = &outcome.prediction;

    ui::header(&format!("Prediction: {}", name));
    ui::field(
        &format!("Weight in {} days", horizon_days),
        format!("{:.1} kg", prediction.predicted_weight_kg),
    );
    ui::field(
        "Recommended intake",
        format!("{} kcal/day", prediction.recommended_calories),
    );
    ui::field("Fitness score", ui::score(prediction.fitness_score));
    ui::field("Next goal", &prediction.next_goal);

    println!();
    println!("Recommendations");
    for (i, recommendation) in prediction.recommendations.iter().enumerate() {
        println!("  {}. {}", i + 1, recommendation);
    }

    println!();
    match &outcome.source {
        PredictionSource::Local => println!("Source: local model"),
        PredictionSource::Remote => println!("{}", "✓ Source: remote prediction service".green()),
        PredictionSource::Fallback { reason } => {
            println!(
                "{}",
                "⚠ Remote prediction unavailable, used the local model".yellow()
            );
            println!("  Reason: {}", reason);
        }
    }
}
