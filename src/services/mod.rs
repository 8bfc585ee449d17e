// Engine services: formulas, aggregation and prediction

pub mod calorie_burn;
pub mod fitness_score;
pub mod metrics_calculator;
pub mod prediction_service;
pub mod recommendation_service;
pub mod sample_data;
pub mod workout_summary;

pub use calorie_burn::{calories_burned, met_value};
pub use fitness_score::{fitness_score, FitnessSignals};
pub use metrics_calculator::{
    bmi, bmi_category, bmr, body_fat_percentage, calorie_target, ideal_weight_range, tdee,
    BmiCategory, HealthSummary, IdealWeightRange,
};
pub use prediction_service::{PredictionMode, PredictionService};
pub use recommendation_service::{generate_recommendations, next_goal, RecommendationProfile};
pub use sample_data::SampleDataGenerator;
