use anyhow::{bail, Result};
use chrono::Utc;
use clap::Args;
use fitpulse::services::SampleDataGenerator;
use std::path::PathBuf;

use super::parse_date;
use crate::storage::save_session;

#[derive(Args)]
pub struct DemoCommand {
    /// Random seed; the same seed and date give the same session
    #[arg(short, long, default_value = "42")]
    seed: u64,

    /// Days of history to generate
    #[arg(long, default_value = "30")]
    days: u32,

    /// Last day of the history (YYYY-MM-DD), defaults to now
    #[arg(long)]
    as_of: Option<String>,

    /// Write the session to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(short, long)]
    force: bool,
}

impl DemoCommand {
    pub async fn execute(self) -> Result<()> {
        let as_of = match self.as_of.as_deref() {
            Some(date) => parse_date(date)?,
            None => Utc::now(),
        };

        let session = SampleDataGenerator::new(self.seed, as_of).session(self.days)?;

        match self.output {
            Some(path) => {
                if path.exists() && !self.force {
                    bail!("{} already exists, use --force to overwrite", path.display());
                }

                save_session(&path, &session)?;

                println!("✓ Demo session written to: {}", path.display());
                println!(
                    "  {} workouts, {} metric samples for {}",
                    session.workouts.len(),
                    session.metrics.len(),
                    session.profile.name
                );
                println!();
                println!("Try: fitpulse predict --data {}", path.display());
            }
            None => println!("{}", serde_json::to_string_pretty(&session)?),
        }

        Ok(())
    }
}
