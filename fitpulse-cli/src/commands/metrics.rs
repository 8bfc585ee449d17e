use anyhow::Result;
use clap::Args;
use fitpulse::services::HealthSummary;
use std::path::PathBuf;

use crate::storage::load_session;
use crate::ui;

#[derive(Args)]
pub struct MetricsCommand {
    /// Session file (JSON) holding the user profile
    #[arg(short, long)]
    data: PathBuf,
}

impl MetricsCommand {
    pub async fn execute(self) -> Result<()> {
        let session = load_session(&self.data)?;
        let profile = &session.profile;
        let summary = HealthSummary::for_profile(profile)?;

        ui::header(&format!("Health Metrics: {}", profile.name));
        ui::field(
            "BMI",
            format!("{:.1} ({})", summary.bmi, ui::bmi_category(summary.bmi_category)),
        );
        ui::field("BMR", format!("{} kcal/day", summary.bmr));
        ui::field(
            "TDEE",
            format!("{} kcal/day ({})", summary.tdee, profile.activity_level),
        );
        ui::field(
            "Calorie target",
            format!("{} kcal/day ({})", summary.calorie_target, profile.goal),
        );
        ui::field(
            "Ideal weight",
            format!("{}-{} kg", summary.ideal_weight.min_kg, summary.ideal_weight.max_kg),
        );

        Ok(())
    }
}
