use serde::{Deserialize, Serialize};

use crate::error::FitnessResult;
use crate::models::{ActivityLevel, FitnessGoal, UserProfile, MAX_RECOMMENDATIONS};
use crate::services::metrics_calculator::bmi;

/// Resting heart rate above which cardio advice is added.
const ELEVATED_RESTING_HR: f64 = 75.0;

/// What the rule blocks look at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationProfile {
    pub bmi: f64,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
    pub age: u32,
    pub resting_heart_rate: Option<f64>,
}

impl RecommendationProfile {
    pub fn from_profile(profile: &UserProfile, resting_heart_rate: Option<f64>) -> FitnessResult<Self> {
        Ok(Self {
            bmi: bmi(profile.weight_kg, profile.height_cm)?,
            activity_level: profile.activity_level,
            goal: profile.goal,
            age: profile.age,
            resting_heart_rate,
        })
    }
}

/// Rule-based advice, at most five entries.
///
/// Blocks are evaluated in a fixed order (BMI band, activity level, age,
/// resting heart rate, goal, general health) and the list is cut after the
/// first five. Goal advice can therefore be crowded out by earlier blocks.
pub fn generate_recommendations(profile: &RecommendationProfile) -> Vec<String> {
    let mut recommendations: Vec<&'static str> = Vec::new();

    // BMI band
    if profile.bmi < 18.5 {
        recommendations.push("Focus on increasing your caloric intake with nutrient-dense foods.");
        if profile.goal == FitnessGoal::GainMuscle {
            recommendations.push(
                "Prioritize strength training with progressive overload to build muscle mass.",
            );
        }
    } else if profile.bmi >= 25.0 {
        recommendations
            .push("Consider incorporating more cardio sessions to help with weight management.");
        if profile.goal == FitnessGoal::LoseWeight {
            recommendations.push(
                "Create a modest calorie deficit through diet and increased physical activity.",
            );
        }
    }

    // Activity level
    if matches!(profile.activity_level, ActivityLevel::Sedentary | ActivityLevel::Light) {
        recommendations.push(
            "Try to gradually increase your daily activity by incorporating short walks or stretching breaks.",
        );
        recommendations.push("Aim to reach the recommended 150 minutes of moderate activity per week.");
    }

    // Age
    if profile.age > 40 {
        recommendations.push(
            "Include mobility exercises and joint-friendly activities like swimming or cycling.",
        );
        if profile.age > 50 {
            recommendations
                .push("Incorporate balance training to prevent falls and maintain independence.");
        }
    }

    // Resting heart rate
    if profile.resting_heart_rate.is_some_and(|hr| hr > ELEVATED_RESTING_HR) {
        recommendations
            .push("Consider more regular cardiovascular exercise to improve heart health.");
    }

    recommendations.extend_from_slice(goal_advice(profile.goal));

    // General health
    recommendations.push("Ensure adequate hydration before, during, and after workouts.");
    recommendations.push("Prioritize quality sleep of 7-9 hours per night for optimal recovery.");

    recommendations
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(String::from)
        .collect()
}

fn goal_advice(goal: FitnessGoal) -> &'static [&'static str] {
    match goal {
        FitnessGoal::LoseWeight => &[
            "Combine strength training and cardio for optimal fat loss results.",
            "Focus on protein intake to preserve muscle mass while in a calorie deficit.",
        ],
        FitnessGoal::GainMuscle => &[
            "Ensure adequate protein intake of 1.6-2.2g per kg of bodyweight daily.",
            "Focus on progressive overload by gradually increasing weights or repetitions.",
        ],
        FitnessGoal::ImproveEndurance => &[
            "Gradually increase the duration and intensity of your cardiovascular workouts.",
            "Consider incorporating interval training to improve VO2 max.",
        ],
        FitnessGoal::GeneralFitness => &[
            "Create a balanced routine that includes strength, cardio, and flexibility work.",
            "Focus on consistency rather than intensity for long-term health benefits.",
        ],
        FitnessGoal::Maintain => &[
            "Maintain your current activity levels while focusing on variety to prevent plateaus.",
            "Consider periodically reassessing your routine to ensure it remains challenging.",
        ],
    }
}

/// Single headline goal for the prediction card.
pub fn next_goal(goal: FitnessGoal, fitness_score: u8) -> String {
    let text = match goal {
        FitnessGoal::LoseWeight => "Reduce body fat by 2% in the next 4 weeks",
        FitnessGoal::GainMuscle => "Increase strength in compound lifts by 5% in the next 6 weeks",
        FitnessGoal::ImproveEndurance => {
            "Increase your sustained cardio duration by 10% in the next month"
        }
        FitnessGoal::Maintain | FitnessGoal::GeneralFitness if fitness_score < 50 => {
            "Build a consistent routine of at least 3 workouts per week"
        }
        FitnessGoal::Maintain | FitnessGoal::GeneralFitness => {
            "Improve cardiovascular fitness by increasing weekly active minutes"
        }
    };
    text.to_string()
}
