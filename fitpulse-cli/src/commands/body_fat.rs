use anyhow::Result;
use clap::Args;
use fitpulse::models::Gender;
use fitpulse::services::body_fat_percentage;

#[derive(Args)]
pub struct BodyFatCommand {
    /// Gender (male, female, other)
    #[arg(short, long)]
    gender: Gender,

    /// Waist circumference in cm
    #[arg(long)]
    waist: f64,

    /// Neck circumference in cm
    #[arg(long)]
    neck: f64,

    /// Height in cm
    #[arg(long)]
    height: f64,

    /// Hip circumference in cm (required unless male)
    #[arg(long)]
    hip: Option<f64>,
}

impl BodyFatCommand {
    pub async fn execute(self) -> Result<()> {
        let body_fat =
            body_fat_percentage(self.waist, self.neck, self.height, self.gender, self.hip)?;

        println!("Estimated body fat: {:.1}%", body_fat);

        Ok(())
    }
}
