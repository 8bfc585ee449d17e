// Plain data crossing the UI/engine boundary

pub mod body_metric;
pub mod prediction;
pub mod session;
pub mod user;
pub mod workout;

pub use body_metric::BodyMetricSample;
pub use prediction::{FitnessPrediction, PredictionOutcome, PredictionSource, MAX_RECOMMENDATIONS};
pub use session::SessionContext;
pub use user::{ActivityLevel, FitnessGoal, Gender, UserProfile};
pub use workout::{Intensity, WorkoutRecord, WorkoutType};
