//! Basal metabolic rate calculations

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::types::{BiologicalSex, HealthProfile};
use crate::validation::{validate_age, validate_percentage, validate_positive};

/// BMR calculation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BmrFormula {
    /// Mifflin-St Jeor (most accurate for most people)
    #[default]
    MifflinStJeor,
    /// Harris-Benedict (revised)
    HarrisBenedict,
    /// Katch-McArdle (requires body fat %)
    KatchMcArdle,
}

impl BmrFormula {
    pub const TAGS: [&'static str; 3] = ["mifflin_st_jeor", "harris_benedict", "katch_mcardle"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BmrFormula::MifflinStJeor => "mifflin_st_jeor",
            BmrFormula::HarrisBenedict => "harris_benedict",
            BmrFormula::KatchMcArdle => "katch_mcardle",
        }
    }
}

impl fmt::Display for BmrFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BmrFormula {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mifflin_st_jeor" => Ok(BmrFormula::MifflinStJeor),
            "harris_benedict" => Ok(BmrFormula::HarrisBenedict),
            "katch_mcardle" => Ok(BmrFormula::KatchMcArdle),
            _ => Err(CalcError::unknown("BMR formula", s, &Self::TAGS)),
        }
    }
}

/// BMR calculation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmrResult {
    /// Basal metabolic rate in kcal/day
    pub bmr: i32,
    pub formula: BmrFormula,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn bmr_mifflin(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match sex {
        BiologicalSex::Male => base + 5.0,
        BiologicalSex::Female => base - 161.0,
    }
}

/// Calculate BMR using Harris-Benedict equation (revised)
///
/// Men: BMR = 88.362 + 13.397 × weight(kg) + 4.799 × height(cm) - 5.677 × age(y)
/// Women: BMR = 447.593 + 9.247 × weight(kg) + 3.098 × height(cm) - 4.330 × age(y)
pub fn bmr_harris_benedict(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: BiologicalSex,
) -> f64 {
    match sex {
        BiologicalSex::Male => {
            88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age_years as f64
        }
        BiologicalSex::Female => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age_years as f64
        }
    }
}

/// Calculate BMR using Katch-McArdle equation (requires lean body mass)
///
/// BMR = 370 + 21.6 × LBM(kg)
/// LBM = weight × (1 - body_fat_percent/100)
pub fn bmr_katch_mcardle(weight_kg: f64, body_fat_percent: f64) -> f64 {
    let lean_body_mass = weight_kg * (1.0 - body_fat_percent / 100.0);
    370.0 + 21.6 * lean_body_mass
}

/// Calculate BMR with the specified formula, rounded to whole kcal
pub fn calculate_bmr(profile: &HealthProfile, formula: BmrFormula) -> CalcResult<BmrResult> {
    validate_positive(profile.weight_kg, "Weight")?;
    validate_positive(profile.height_cm, "Height")?;
    validate_age(profile.age_years)?;

    let bmr = match formula {
        BmrFormula::MifflinStJeor => bmr_mifflin(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
        ),
        BmrFormula::HarrisBenedict => bmr_harris_benedict(
            profile.weight_kg,
            profile.height_cm,
            profile.age_years,
            profile.sex,
        ),
        BmrFormula::KatchMcArdle => {
            let body_fat = profile.body_fat_percent.ok_or_else(|| {
                CalcError::missing("Body fat percentage is required for Katch-McArdle formula")
            })?;
            validate_percentage(body_fat, "Body fat percentage")?;
            bmr_katch_mcardle(profile.weight_kg, body_fat)
        }
    };

    let bmr = bmr.round() as i32;
    debug!(formula = %formula, bmr, "Calculated BMR");

    Ok(BmrResult { bmr, formula })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn male() -> HealthProfile {
        HealthProfile::new(80.0, 180.0, 30, BiologicalSex::Male)
    }

    #[test]
    fn test_mifflin_male() {
        // 800 + 1125 - 150 + 5 = 1780
        let result = calculate_bmr(&male(), BmrFormula::MifflinStJeor).unwrap();
        assert_eq!(result.bmr, 1780);
        assert_eq!(result.formula, BmrFormula::MifflinStJeor);
    }

    #[test]
    fn test_mifflin_female() {
        let profile = HealthProfile::new(60.0, 165.0, 25, BiologicalSex::Female);
        let result = calculate_bmr(&profile, BmrFormula::default()).unwrap();
        assert!(result.bmr > 1300 && result.bmr < 1500);
    }

    #[test]
    fn test_harris_benedict_male() {
        let result = calculate_bmr(&male(), BmrFormula::HarrisBenedict).unwrap();
        assert!(result.bmr > 1800 && result.bmr < 2000);
        assert_eq!(result.formula, BmrFormula::HarrisBenedict);
    }

    #[test]
    fn test_katch_mcardle_with_body_fat() {
        // lean mass 68kg -> 370 + 21.6 * 68 = 1838.8
        let profile = male().with_body_fat(15.0);
        let result = calculate_bmr(&profile, BmrFormula::KatchMcArdle).unwrap();
        assert_eq!(result.bmr, 1839);
        assert!(result.bmr > 1800 && result.bmr < 1900);
    }

    #[test]
    fn test_katch_mcardle_requires_body_fat() {
        let err = calculate_bmr(&male(), BmrFormula::KatchMcArdle).unwrap_err();
        assert!(matches!(err, CalcError::MissingArgument(_)));
        assert!(err.to_string().contains("Body fat percentage is required"));
    }

    #[test]
    fn test_katch_mcardle_body_fat_out_of_range() {
        let profile = male().with_body_fat(120.0);
        let err = calculate_bmr(&profile, BmrFormula::KatchMcArdle).unwrap_err();
        assert!(matches!(err, CalcError::InvalidArgument(_)));
        assert!(err.to_string().contains("between 0 and 100"));
    }

    #[test]
    fn test_invalid_profile() {
        let mut profile = male();
        profile.age_years = 0;
        let err = calculate_bmr(&profile, BmrFormula::MifflinStJeor).unwrap_err();
        assert!(err.to_string().contains("Age must be between"));

        let mut profile = male();
        profile.weight_kg = -1.0;
        let err = calculate_bmr(&profile, BmrFormula::MifflinStJeor).unwrap_err();
        assert!(err.to_string().contains("Weight must be positive"));
    }

    #[test]
    fn test_formula_parsing() {
        assert_eq!(
            "harris_benedict".parse::<BmrFormula>().unwrap(),
            BmrFormula::HarrisBenedict
        );
        let err = "cunningham".parse::<BmrFormula>().unwrap_err();
        assert!(err.is_unknown_option());
        assert!(err.to_string().contains("katch_mcardle"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Male BMR > Female BMR (same stats)
        #[test]
        fn prop_male_bmr_higher(
            weight in 50.0f64..100.0,
            height in 160.0f64..190.0,
            age in 20i32..60
        ) {
            let bmr_male = bmr_mifflin(weight, height, age, BiologicalSex::Male);
            let bmr_female = bmr_mifflin(weight, height, age, BiologicalSex::Female);
            prop_assert!(bmr_male > bmr_female);
        }

        /// Property: result is the rounded closed-form value
        #[test]
        fn prop_bmr_is_rounded_formula(
            weight in 40.0f64..150.0,
            height in 140.0f64..210.0,
            age in 18i32..80
        ) {
            let profile = HealthProfile::new(weight, height, age, BiologicalSex::Female);
            let result = calculate_bmr(&profile, BmrFormula::HarrisBenedict).unwrap();
            let raw = bmr_harris_benedict(weight, height, age, BiologicalSex::Female);
            prop_assert_eq!(result.bmr, raw.round() as i32);
        }
    }
}
