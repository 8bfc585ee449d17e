mod body_fat;
mod burn;
mod config_cmd;
mod demo;
mod metrics;
mod predict;
mod recommend;
mod score;
mod summary;
mod workout;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::config::Config;

pub use body_fat::BodyFatCommand;
pub use burn::BurnCommand;
pub use demo::DemoCommand;
pub use metrics::MetricsCommand;
pub use predict::PredictCommand;
pub use recommend::RecommendCommand;
pub use score::ScoreCommand;
pub use summary::SummaryCommand;
pub use workout::WorkoutCommand;

#[derive(Parser)]
#[command(name = "fitpulse")]
#[command(about = "Fitness metrics, scoring and weight predictions", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITPULSE_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show BMI, BMR, TDEE, calorie target and ideal weight for a profile
    Metrics(MetricsCommand),

    /// Estimate body fat with the U.S. Navy formula
    BodyFat(BodyFatCommand),

    /// Estimate calories burned by a workout
    Burn(BurnCommand),

    /// Compute the fitness score from a session's data
    Score(ScoreCommand),

    /// Show personalized recommendations
    Recommend(RecommendCommand),

    /// Manage workouts
    #[command(subcommand)]
    Workout(WorkoutSubcommands),

    /// Summarize the workout history
    Summary(SummaryCommand),

    /// Predict weight, calories and fitness score
    Predict(PredictCommand),

    /// Generate a sample session
    Demo(DemoCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum WorkoutSubcommands {
    /// Log a new workout into a session file
    Log(WorkoutCommand),
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub async fn execute(self) -> Result<()> {
        if self.verbose {
            tracing::debug!("Verbose mode enabled");
        }

        let config_path = self.config;

        match self.command {
            Commands::Metrics(cmd) => cmd.execute().await,
            Commands::BodyFat(cmd) => cmd.execute().await,
            Commands::Burn(cmd) => cmd.execute().await,
            Commands::Score(cmd) => cmd.execute().await,
            Commands::Recommend(cmd) => cmd.execute().await,
            Commands::Workout(subcmd) => match subcmd {
                WorkoutSubcommands::Log(cmd) => cmd.execute().await,
            },
            Commands::Summary(cmd) => cmd.execute(&load_config(config_path.as_deref())?).await,
            Commands::Predict(cmd) => cmd.execute(&load_config(config_path.as_deref())?).await,
            Commands::Demo(cmd) => cmd.execute().await,
            Commands::Config(subcmd) => {
                let path = Config::resolve_path(config_path.as_deref())?;
                match subcmd {
                    ConfigSubcommands::Show => config_cmd::show_config(&path).await,
                    ConfigSubcommands::Init { force } => config_cmd::init_config(&path, force).await,
                }
            }
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let path = Config::resolve_path(explicit)?;
    Config::load_from(&path)
}

/// Parse a `YYYY-MM-DD` date as noon UTC.
pub(crate) fn parse_date(value: &str) -> Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", value))?;
    let noon = date
        .and_hms_opt(12, 0, 0)
        .with_context(|| format!("Invalid date '{}'", value))?;
    Ok(Utc.from_utc_datetime(&noon))
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
