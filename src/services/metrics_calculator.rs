//! Body metric formulas: BMI, BMR (Mifflin-St Jeor), TDEE, calorie targets,
//! body fat (U.S. Navy method) and ideal weight range.
//!
//! All functions are pure and safe to call from any thread.

use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, FitnessError, FitnessResult};
use crate::models::{ActivityLevel, FitnessGoal, Gender, UserProfile};

/// Daily deficit applied for weight loss (kcal).
pub const WEIGHT_LOSS_DEFICIT: i32 = 500;
/// Daily surplus applied for muscle gain (kcal).
pub const MUSCLE_GAIN_SURPLUS: i32 = 300;

/// Mifflin-St Jeor sex constants.
mod mifflin {
    pub const MALE: f64 = 5.0;
    pub const FEMALE: f64 = -161.0;
    /// Midpoint of the male and female constants.
    pub const OTHER: f64 = -78.0;
}

/// U.S. Navy body fat coefficients (circumferences in cm).
mod navy {
    pub const MALE: (f64, f64, f64) = (1.0324, 0.19077, 0.15456);
    pub const FEMALE: (f64, f64, f64) = (1.29579, 0.35004, 0.22100);
}

const HEALTHY_BMI_MIN: f64 = 18.5;
const HEALTHY_BMI_MAX: f64 = 25.0;
const OBESE_BMI_MIN: f64 = 30.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum BmiCategory {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BmiCategory::Underweight => write!(f, "Underweight"),
            BmiCategory::Healthy => write!(f, "Healthy"),
            BmiCategory::Overweight => write!(f, "Overweight"),
            BmiCategory::Obese => write!(f, "Obese"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdealWeightRange {
    pub min_kg: u32,
    pub max_kg: u32,
}

pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Body Mass Index, `weight / height_m²`, rounded to one decimal.
pub fn bmi(weight_kg: f64, height_cm: f64) -> FitnessResult<f64> {
    ensure_positive("height_cm", height_cm)?;
    ensure_positive("weight_kg", weight_kg)?;

    let height_m = height_cm / 100.0;
    Ok(round_to_tenth(weight_kg / (height_m * height_m)))
}

/// Bands are lower-bound inclusive: 18.5, 25 and 30 start a new band.
pub fn bmi_category(bmi: f64) -> BmiCategory {
    if bmi < HEALTHY_BMI_MIN {
        BmiCategory::Underweight
    } else if bmi < HEALTHY_BMI_MAX {
        BmiCategory::Healthy
    } else if bmi < OBESE_BMI_MIN {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

/// Basal Metabolic Rate via Mifflin-St Jeor, rounded, never below zero.
///
/// `Gender::Other` uses the midpoint of the male and female constants.
pub fn bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> FitnessResult<i32> {
    ensure_positive("weight_kg", weight_kg)?;
    ensure_positive("height_cm", height_cm)?;
    if age == 0 {
        return Err(FitnessError::invalid("age must be positive"));
    }

    let constant = match gender {
        Gender::Male => mifflin::MALE,
        Gender::Female => mifflin::FEMALE,
        Gender::Other => mifflin::OTHER,
    };

    let raw = (10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + constant).round();
    if raw > f64::from(i32::MAX) {
        return Err(FitnessError::invalid(format!(
            "BMR out of range for weight {} kg and height {} cm",
            weight_kg, height_cm
        )));
    }
    Ok(raw.max(0.0) as i32)
}

/// Total Daily Energy Expenditure: BMR scaled by the activity multiplier.
/// Saturates at `i32::MAX`.
pub fn tdee(bmr: i32, activity_level: ActivityLevel) -> i32 {
    (f64::from(bmr) * activity_level.multiplier())
        .round()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}

/// Daily calorie target for a goal. Only weight loss and muscle gain move off maintenance.
pub fn calorie_target(tdee: i32, goal: FitnessGoal) -> i32 {
    match goal {
        FitnessGoal::LoseWeight => tdee.saturating_sub(WEIGHT_LOSS_DEFICIT),
        FitnessGoal::GainMuscle => tdee.saturating_add(MUSCLE_GAIN_SURPLUS),
        FitnessGoal::Maintain | FitnessGoal::ImproveEndurance | FitnessGoal::GeneralFitness => tdee,
    }
}

/// Body fat percentage using the U.S. Navy method, rounded to one decimal.
///
/// The male variant uses waist and neck only. Every other gender uses the
/// female variant, which needs the hip circumference.
pub fn body_fat_percentage(
    waist_cm: f64,
    neck_cm: f64,
    height_cm: f64,
    gender: Gender,
    hip_cm: Option<f64>,
) -> FitnessResult<f64> {
    ensure_positive("waist_cm", waist_cm)?;
    ensure_positive("neck_cm", neck_cm)?;
    ensure_positive("height_cm", height_cm)?;

    let (girth, (a, b, c)) = match gender {
        Gender::Male => (waist_cm - neck_cm, navy::MALE),
        Gender::Female | Gender::Other => {
            let hip = hip_cm.ok_or_else(|| {
                FitnessError::missing(format!("hip circumference is required for gender {}", gender))
            })?;
            ensure_positive("hip_cm", hip)?;
            (waist_cm + hip - neck_cm, navy::FEMALE)
        }
    };

    if girth <= 0.0 {
        return Err(FitnessError::invalid(
            "circumference difference must be positive (waist must exceed neck)",
        ));
    }

    let density = a - b * girth.log10() + c * height_cm.log10();
    if density <= 0.0 {
        return Err(FitnessError::invalid("measurements out of range for the Navy formula"));
    }

    Ok(round_to_tenth(495.0 / density - 450.0))
}

/// Weights at BMI 18.5 and BMI 25 for the given height.
pub fn ideal_weight_range(height_cm: f64) -> FitnessResult<IdealWeightRange> {
    ensure_positive("height_cm", height_cm)?;

    let height_m = height_cm / 100.0;
    let squared = height_m * height_m;

    Ok(IdealWeightRange {
        min_kg: (HEALTHY_BMI_MIN * squared).round() as u32,
        max_kg: (HEALTHY_BMI_MAX * squared).round() as u32,
    })
}

/// Metrics card for a profile: all derived body numbers in one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthSummary {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: i32,
    pub tdee: i32,
    pub calorie_target: i32,
    pub ideal_weight: IdealWeightRange,
}

impl HealthSummary {
    pub fn for_profile(profile: &UserProfile) -> FitnessResult<Self> {
        profile.validate()?;

        let bmi = bmi(profile.weight_kg, profile.height_cm)?;
        let bmr = bmr(profile.weight_kg, profile.height_cm, profile.age, profile.gender)?;
        let tdee = tdee(bmr, profile.activity_level);

        tracing::debug!(user_id = %profile.id, bmi, bmr, tdee, "Computed health summary");

        Ok(Self {
            bmi,
            bmi_category: bmi_category(bmi),
            bmr,
            tdee,
            calorie_target: calorie_target(tdee, profile.goal),
            ideal_weight: ideal_weight_range(profile.height_cm)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_bmi() {
        assert_eq!(bmi(78.0, 178.0).unwrap(), 24.6);
        assert_eq!(bmi(60.0, 165.0).unwrap(), 22.0);
    }

    #[test]
    fn test_bmi_rejects_non_positive_height() {
        assert!(matches!(bmi(70.0, 0.0), Err(FitnessError::InvalidInput(_))));
        assert!(matches!(bmi(70.0, -10.0), Err(FitnessError::InvalidInput(_))));
        assert!(matches!(bmi(0.0, 170.0), Err(FitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(bmi_category(18.5), BmiCategory::Healthy);
        assert_eq!(bmi_category(24.9), BmiCategory::Healthy);
        assert_eq!(bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(bmi_category(29.9), BmiCategory::Overweight);
        assert_eq!(bmi_category(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmr_by_gender() {
        // 10*78 + 6.25*178 - 5*32 + 5 = 1737.5
        assert_eq!(bmr(78.0, 178.0, 32, Gender::Male).unwrap(), 1738);
        // 10*60 + 6.25*165 - 5*28 - 161 = 1330.25
        assert_eq!(bmr(60.0, 165.0, 28, Gender::Female).unwrap(), 1330);
    }

    #[test]
    fn test_bmr_other_uses_midpoint_constant() {
        // 10*60 + 6.25*165 - 5*28 - 78 = 1413.25
        assert_eq!(bmr(60.0, 165.0, 28, Gender::Other).unwrap(), 1413);

        let male = bmr(60.0, 165.0, 28, Gender::Male).unwrap();
        let female = bmr(60.0, 165.0, 28, Gender::Female).unwrap();
        let other = bmr(60.0, 165.0, 28, Gender::Other).unwrap();
        assert!(female < other && other < male);
    }

    #[test]
    fn test_bmr_clamped_at_zero() {
        assert_eq!(bmr(1.0, 10.0, 120, Gender::Female).unwrap(), 0);
    }

    #[test]
    fn test_bmr_invalid_inputs() {
        assert!(bmr(0.0, 178.0, 32, Gender::Male).is_err());
        assert!(bmr(78.0, 0.0, 32, Gender::Male).is_err());
        assert!(bmr(78.0, 178.0, 0, Gender::Male).is_err());
    }

    #[test]
    fn test_bmr_rejects_out_of_range_result() {
        let err = bmr(3e8, 178.0, 32, Gender::Male).unwrap_err();
        assert!(matches!(err, FitnessError::InvalidInput(_)));
    }

    #[test]
    fn test_extreme_values_saturate() {
        assert_eq!(tdee(i32::MAX, ActivityLevel::VeryActive), i32::MAX);
        assert_eq!(calorie_target(i32::MAX, FitnessGoal::GainMuscle), i32::MAX);
        assert_eq!(calorie_target(i32::MIN, FitnessGoal::LoseWeight), i32::MIN);

        // Largest BMR that still fits, pushed through the whole chain
        let bmr = bmr(2e8, 178.0, 32, Gender::Male).unwrap();
        let tdee = tdee(bmr, ActivityLevel::VeryActive);
        assert_eq!(tdee, i32::MAX);
        assert_eq!(calorie_target(tdee, FitnessGoal::GainMuscle), i32::MAX);
    }

    #[test]
    fn test_tdee_multipliers() {
        assert_eq!(tdee(1738, ActivityLevel::Sedentary), 2086);
        assert_eq!(tdee(1738, ActivityLevel::Light), 2390);
        assert_eq!(tdee(1738, ActivityLevel::Moderate), 2694);
        assert_eq!(tdee(1738, ActivityLevel::Active), 2998);
        assert_eq!(tdee(1738, ActivityLevel::VeryActive), 3302);
    }

    #[test]
    fn test_calorie_target() {
        assert_eq!(calorie_target(2694, FitnessGoal::LoseWeight), 2194);
        assert_eq!(calorie_target(2694, FitnessGoal::GainMuscle), 2994);
        assert_eq!(calorie_target(2694, FitnessGoal::Maintain), 2694);
        assert_eq!(calorie_target(2694, FitnessGoal::ImproveEndurance), 2694);
        assert_eq!(calorie_target(2694, FitnessGoal::GeneralFitness), 2694);
    }

    #[test]
    fn test_body_fat_male() {
        let bf = body_fat_percentage(85.0, 38.0, 178.0, Gender::Male, None).unwrap();
        assert_eq!(bf, 16.4);
    }

    #[test]
    fn test_body_fat_female() {
        let bf = body_fat_percentage(75.0, 34.0, 165.0, Gender::Female, Some(100.0)).unwrap();
        assert_eq!(bf, 28.9);
    }

    #[test]
    fn test_body_fat_requires_hip_for_non_male() {
        let result = body_fat_percentage(75.0, 34.0, 165.0, Gender::Female, None);
        assert!(matches!(result, Err(FitnessError::MissingInput(_))));

        let result = body_fat_percentage(75.0, 34.0, 165.0, Gender::Other, None);
        assert!(matches!(result, Err(FitnessError::MissingInput(_))));

        // Other uses the female variant once the hip is known
        let other = body_fat_percentage(75.0, 34.0, 165.0, Gender::Other, Some(100.0)).unwrap();
        assert!(approx_eq(other, 28.9, 0.01));
    }

    #[test]
    fn test_body_fat_waist_must_exceed_neck() {
        let result = body_fat_percentage(38.0, 40.0, 178.0, Gender::Male, None);
        assert!(matches!(result, Err(FitnessError::InvalidInput(_))));
    }

    #[test]
    fn test_ideal_weight_range() {
        assert_eq!(
            ideal_weight_range(178.0).unwrap(),
            IdealWeightRange { min_kg: 59, max_kg: 79 }
        );
        assert_eq!(
            ideal_weight_range(165.0).unwrap(),
            IdealWeightRange { min_kg: 50, max_kg: 68 }
        );
        assert!(ideal_weight_range(0.0).is_err());
    }

    #[test]
    fn test_health_summary() {
        let profile = UserProfile::new(
            "user-1",
            "Alex Johnson",
            32,
            Gender::Male,
            78.0,
            178.0,
            ActivityLevel::Moderate,
            FitnessGoal::GainMuscle,
        );
        let summary = HealthSummary::for_profile(&profile).unwrap();

        assert_eq!(summary.bmi, 24.6);
        assert_eq!(summary.bmi_category, BmiCategory::Healthy);
        assert_eq!(summary.bmr, 1738);
        assert_eq!(summary.tdee, 2694);
        assert_eq!(summary.calorie_target, 2994);
    }

    proptest! {
        #[test]
        fn prop_bmi_positive(weight in 1.0f64..400.0, height in 50.0f64..250.0) {
            prop_assert!(bmi(weight, height).unwrap() > 0.0);
        }

        #[test]
        fn prop_bmi_category_monotonic(a in 5.0f64..80.0, b in 5.0f64..80.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(bmi_category(lo) <= bmi_category(hi));
        }

        #[test]
        fn prop_bmr_increases_with_weight(
            weight in 30.0f64..200.0,
            height in 140.0f64..210.0,
            age in 18u32..80,
        ) {
            for gender in [Gender::Male, Gender::Female, Gender::Other] {
                let lighter = bmr(weight, height, age, gender).unwrap();
                let heavier = bmr(weight + 1.0, height, age, gender).unwrap();
                prop_assert!(heavier > lighter);
            }
        }

        #[test]
        fn prop_bmr_increases_with_height(
            weight in 30.0f64..200.0,
            height in 140.0f64..210.0,
            age in 18u32..80,
        ) {
            for gender in [Gender::Male, Gender::Female, Gender::Other] {
                let shorter = bmr(weight, height, age, gender).unwrap();
                let taller = bmr(weight, height + 1.0, age, gender).unwrap();
                prop_assert!(taller > shorter);
            }
        }

        #[test]
        fn prop_bmr_decreases_with_age(
            weight in 30.0f64..200.0,
            height in 140.0f64..210.0,
            age in 18u32..80,
        ) {
            for gender in [Gender::Male, Gender::Female, Gender::Other] {
                let younger = bmr(weight, height, age, gender).unwrap();
                let older = bmr(weight, height, age + 1, gender).unwrap();
                prop_assert!(older < younger);
            }
        }

        #[test]
        fn prop_tdee_increases_with_activity(bmr in 800i32..4000) {
            let values: Vec<i32> = ActivityLevel::all().iter().map(|l| tdee(bmr, *l)).collect();
            prop_assert!(values.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_calorie_target_offsets(tdee in 1000i32..5000) {
            prop_assert_eq!(calorie_target(tdee, FitnessGoal::LoseWeight), tdee - 500);
            prop_assert_eq!(calorie_target(tdee, FitnessGoal::GainMuscle), tdee + 300);
            prop_assert_eq!(calorie_target(tdee, FitnessGoal::Maintain), tdee);
            prop_assert_eq!(calorie_target(tdee, FitnessGoal::GeneralFitness), tdee);
            prop_assert_eq!(calorie_target(tdee, FitnessGoal::ImproveEndurance), tdee);
        }
    }
}
