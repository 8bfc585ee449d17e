use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, FitnessError, FitnessResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Self-reported activity level, ordered from least to most active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,  // Little or no exercise
    Light,      // Light exercise 1-3 days/week
    Moderate,   // Moderate exercise 3-5 days/week
    Active,     // Hard exercise 6-7 days/week
    VeryActive, // Hard daily exercise plus a physical job
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    LoseWeight,
    Maintain,
    GainMuscle,
    ImproveEndurance,
    GeneralFitness,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl ActivityLevel {
    pub fn all() -> &'static [ActivityLevel] {
        &[
            ActivityLevel::Sedentary,
            ActivityLevel::Light,
            ActivityLevel::Moderate,
            ActivityLevel::Active,
            ActivityLevel::VeryActive,
        ]
    }

    /// TDEE multiplier applied to BMR.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }
}

impl FitnessGoal {
    pub fn all() -> &'static [FitnessGoal] {
        &[
            FitnessGoal::LoseWeight,
            FitnessGoal::Maintain,
            FitnessGoal::GainMuscle,
            FitnessGoal::ImproveEndurance,
            FitnessGoal::GeneralFitness,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "lose_weight",
            FitnessGoal::Maintain => "maintain",
            FitnessGoal::GainMuscle => "gain_muscle",
            FitnessGoal::ImproveEndurance => "improve_endurance",
            FitnessGoal::GeneralFitness => "general_fitness",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(FitnessError::invalid(format!("unknown gender: {}", s))),
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(FitnessError::invalid(format!("unknown activity level: {}", s))),
        }
    }
}

impl std::str::FromStr for FitnessGoal {
    type Err = FitnessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose_weight" => Ok(FitnessGoal::LoseWeight),
            "maintain" => Ok(FitnessGoal::Maintain),
            "gain_muscle" => Ok(FitnessGoal::GainMuscle),
            "improve_endurance" => Ok(FitnessGoal::ImproveEndurance),
            "general_fitness" => Ok(FitnessGoal::GeneralFitness),
            _ => Err(FitnessError::invalid(format!("unknown goal: {}", s))),
        }
    }
}

/// User profile as owned by the UI layer. The engine only reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub activity_level: ActivityLevel,
    pub goal: FitnessGoal,
}

impl UserProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        age: u32,
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        activity_level: ActivityLevel,
        goal: FitnessGoal,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            gender,
            weight_kg,
            height_cm,
            activity_level,
            goal,
        }
    }

    /// Check the profile invariants: age, weight and height strictly positive.
    pub fn validate(&self) -> FitnessResult<()> {
        if self.age == 0 {
            return Err(FitnessError::invalid("age must be positive"));
        }
        ensure_positive("weight_kg", self.weight_kg)?;
        ensure_positive("height_cm", self.height_cm)?;
        Ok(())
    }
}
