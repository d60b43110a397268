//! Shared input types for the calculators
//!
//! Categorical inputs used across modules and the anthropometric profile
//! consumed by the energy calculators (BMR, TDEE, macros).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalcError;

// ============================================================================
// Biological Sex
// ============================================================================

/// Biological sex for health calculations
/// Note: This is used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BiologicalSex {
    Male,
    Female,
}

impl BiologicalSex {
    pub const TAGS: [&'static str; 2] = ["male", "female"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "male",
            BiologicalSex::Female => "female",
        }
    }
}

impl fmt::Display for BiologicalSex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BiologicalSex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" => Ok(BiologicalSex::Male),
            "female" => Ok(BiologicalSex::Female),
            _ => Err(CalcError::unknown("biological sex", s, &Self::TAGS)),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for TDEE and hydration calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
    /// Twice-daily training or extreme physical work
    ExtraActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 6] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub const TAGS: [&'static str; 6] = [
        "sedentary",
        "light",
        "moderate",
        "active",
        "very_active",
        "extra_active",
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
            ActivityLevel::ExtraActive => 2.1,
        }
    }

    /// Get the multiplier applied to the base hydration target
    pub fn water_multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.0,
            ActivityLevel::Light => 1.12,
            ActivityLevel::Moderate => 1.25,
            ActivityLevel::Active => 1.4,
            ActivityLevel::VeryActive => 1.55,
            ActivityLevel::ExtraActive => 1.7,
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Little or no exercise",
            ActivityLevel::Light => "Light exercise 1-3 days/week",
            ActivityLevel::Moderate => "Moderate exercise 3-5 days/week",
            ActivityLevel::Active => "Hard exercise 6-7 days/week",
            ActivityLevel::VeryActive => "Very hard exercise or physical job",
            ActivityLevel::ExtraActive => "Twice-daily training or extreme physical work",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtraActive => "extra_active",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == normalized)
            .ok_or_else(|| CalcError::unknown("activity level", s, &Self::TAGS))
    }
}

// ============================================================================
// Health Profile
// ============================================================================

/// Anthropometric data needed for the energy calculations
///
/// Values are checked by the calculator that consumes them, not on
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthProfile {
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Age in years
    pub age_years: i32,
    /// Biological sex for physiological calculations
    pub sex: BiologicalSex,
    /// Body fat percentage, required only by Katch-McArdle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
}

impl HealthProfile {
    pub fn new(weight_kg: f64, height_cm: f64, age_years: i32, sex: BiologicalSex) -> Self {
        Self {
            weight_kg,
            height_cm,
            age_years,
            sex,
            body_fat_percent: None,
        }
    }

    /// Attach a body fat percentage
    pub fn with_body_fat(mut self, body_fat_percent: f64) -> Self {
        self.body_fat_percent = Some(body_fat_percent);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_multipliers() {
        assert_eq!(ActivityLevel::Sedentary.multiplier(), 1.2);
        assert_eq!(ActivityLevel::ExtraActive.multiplier(), 2.1);
        assert_eq!(ActivityLevel::Sedentary.water_multiplier(), 1.0);
        assert_eq!(ActivityLevel::ExtraActive.water_multiplier(), 1.7);
    }

    #[test]
    fn test_multipliers_increase_with_activity() {
        for pair in ActivityLevel::ALL.windows(2) {
            assert!(pair[1].multiplier() > pair[0].multiplier());
            assert!(pair[1].water_multiplier() > pair[0].water_multiplier());
        }
    }

    #[test]
    fn test_activity_level_parsing() {
        for (level, tag) in ActivityLevel::ALL.iter().zip(ActivityLevel::TAGS) {
            assert_eq!(tag.parse::<ActivityLevel>().unwrap(), *level);
            assert_eq!(level.to_string(), tag);
        }
        assert_eq!(
            "VERY_ACTIVE".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::VeryActive
        );

        let err = "couch_potato".parse::<ActivityLevel>().unwrap_err();
        assert!(err.is_unknown_option());
        assert!(err.to_string().contains("sedentary, light, moderate"));
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("male".parse::<BiologicalSex>().unwrap(), BiologicalSex::Male);
        assert_eq!("Female".parse::<BiologicalSex>().unwrap(), BiologicalSex::Female);
        assert!("other".parse::<BiologicalSex>().is_err());
    }

    #[test]
    fn test_activity_level_serde_tags() {
        let json = serde_json::to_string(&ActivityLevel::VeryActive).unwrap();
        assert_eq!(json, "\"very_active\"");
        let level: ActivityLevel = serde_json::from_str("\"extra_active\"").unwrap();
        assert_eq!(level, ActivityLevel::ExtraActive);
    }

    #[test]
    fn test_profile_builder() {
        let profile = HealthProfile::new(80.0, 180.0, 30, BiologicalSex::Male).with_body_fat(15.0);
        assert_eq!(profile.body_fat_percent, Some(15.0));
    }
}
