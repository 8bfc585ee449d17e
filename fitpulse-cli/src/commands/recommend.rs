use anyhow::Result;
use clap::Args;
use fitpulse::services::{
    fitness_score, generate_recommendations, next_goal, FitnessSignals, RecommendationProfile,
};
use std::path::PathBuf;

use crate::storage::load_session;
use crate::ui;

#[derive(Args)]
pub struct RecommendCommand {
    /// Session file (JSON) with the user profile and metrics
    #[arg(short, long)]
    data: PathBuf,
}

impl RecommendCommand {
    pub async fn execute(self) -> Result<()> {
        let session = load_session(&self.data)?;
        let signals =
            FitnessSignals::from_session(&session.profile, &session.workouts, &session.metrics)?;
        let profile = RecommendationProfile::from_profile(&session.profile, signals.resting_heart_rate)?;
        let recommendations = generate_recommendations(&profile);

        ui::header(&format!("Recommendations: {}", session.profile.name));

        for (i, recommendation) in recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, recommendation);
        }

        println!();
        println!("Next goal: {}", next_goal(session.profile.goal, fitness_score(&signals)));

        Ok(())
    }
}
