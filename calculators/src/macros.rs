//! Macronutrient target calculations
//!
//! Splits a calorie target into protein, carbohydrate and fat grams using a
//! named preset or a custom ratio. Protein and carbohydrates provide 4 kcal/g,
//! fat provides 9 kcal/g.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::bmr::BmrFormula;
use crate::errors::{CalcError, CalcResult};
use crate::tdee::calculate_tdee;
use crate::types::{ActivityLevel, HealthProfile};
use crate::validation::validate_positive;

const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
const KCAL_PER_GRAM_CARBS: f64 = 4.0;
const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Allowed deviation of a ratio sum from 1.0
const RATIO_SUM_TOLERANCE: f64 = 0.01;

/// Calorie multiplier for a cutting phase
const CUTTING_FACTOR: f64 = 0.8;
/// Calorie multiplier for a bulking phase
const BULKING_FACTOR: f64 = 1.15;

/// Fractions of total calories from each macronutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroRatio {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MacroRatio {
    pub fn new(protein: f64, carbs: f64, fat: f64) -> Self {
        Self { protein, carbs, fat }
    }

    pub fn sum(&self) -> f64 {
        self.protein + self.carbs + self.fat
    }

    /// Check that the fractions sum to 1.0 within tolerance
    pub fn validate(&self) -> CalcResult<()> {
        let sum = self.sum();
        if sum.is_nan() || (sum - 1.0).abs() > RATIO_SUM_TOLERANCE {
            return Err(CalcError::invalid(format!(
                "Macro ratios must sum to 1.0, got {}",
                sum
            )));
        }
        Ok(())
    }
}

/// Named macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MacroPreset {
    #[default]
    Balanced,
    LowCarb,
    HighCarb,
    HighProtein,
    Keto,
    Zone,
}

impl MacroPreset {
    pub const ALL: [MacroPreset; 6] = [
        MacroPreset::Balanced,
        MacroPreset::LowCarb,
        MacroPreset::HighCarb,
        MacroPreset::HighProtein,
        MacroPreset::Keto,
        MacroPreset::Zone,
    ];

    pub const TAGS: [&'static str; 6] = [
        "balanced",
        "low_carb",
        "high_carb",
        "high_protein",
        "keto",
        "zone",
    ];

    /// Protein/carbs/fat fractions of this preset
    pub fn ratio(&self) -> MacroRatio {
        match self {
            MacroPreset::Balanced => MacroRatio::new(0.3, 0.4, 0.3),
            MacroPreset::LowCarb => MacroRatio::new(0.4, 0.2, 0.4),
            MacroPreset::HighCarb => MacroRatio::new(0.25, 0.55, 0.2),
            MacroPreset::HighProtein => MacroRatio::new(0.4, 0.35, 0.25),
            MacroPreset::Keto => MacroRatio::new(0.3, 0.05, 0.65),
            MacroPreset::Zone => MacroRatio::new(0.3, 0.4, 0.3),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MacroPreset::Balanced => "balanced",
            MacroPreset::LowCarb => "low_carb",
            MacroPreset::HighCarb => "high_carb",
            MacroPreset::HighProtein => "high_protein",
            MacroPreset::Keto => "keto",
            MacroPreset::Zone => "zone",
        }
    }
}

impl fmt::Display for MacroPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MacroPreset {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == normalized)
            .ok_or_else(|| CalcError::unknown("macro preset", s, &Self::TAGS))
    }
}

/// A macro split: a named preset or explicit fractions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MacroSplit {
    Preset(MacroPreset),
    Custom(MacroRatio),
}

impl MacroSplit {
    /// Resolve to a ratio, failing when it does not sum to 1.0
    pub fn resolve(&self) -> CalcResult<MacroRatio> {
        let ratio = match self {
            MacroSplit::Preset(preset) => preset.ratio(),
            MacroSplit::Custom(ratio) => *ratio,
        };
        ratio.validate()?;
        Ok(ratio)
    }
}

impl Default for MacroSplit {
    fn default() -> Self {
        MacroSplit::Preset(MacroPreset::default())
    }
}

impl From<MacroPreset> for MacroSplit {
    fn from(preset: MacroPreset) -> Self {
        MacroSplit::Preset(preset)
    }
}

impl From<MacroRatio> for MacroSplit {
    fn from(ratio: MacroRatio) -> Self {
        MacroSplit::Custom(ratio)
    }
}

/// Daily macronutrient targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroResult {
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fat_g: i32,
}

/// Macro targets for the three common goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroGoals {
    pub maintenance: MacroResult,
    pub cutting: MacroResult,
    pub bulking: MacroResult,
}

/// Convert a calorie figure to grams; each value rounded independently
fn macros_for_calories(calories: f64, ratio: &MacroRatio) -> MacroResult {
    MacroResult {
        calories: calories.round() as i32,
        protein_g: (calories * ratio.protein / KCAL_PER_GRAM_PROTEIN).round() as i32,
        carbs_g: (calories * ratio.carbs / KCAL_PER_GRAM_CARBS).round() as i32,
        fat_g: (calories * ratio.fat / KCAL_PER_GRAM_FAT).round() as i32,
    }
}

/// Calculate maintenance, cutting and bulking macros from a profile's TDEE
pub fn calculate_macros(
    profile: &HealthProfile,
    activity_level: ActivityLevel,
    split: impl Into<MacroSplit>,
    formula: BmrFormula,
) -> CalcResult<MacroGoals> {
    let ratio = split.into().resolve()?;
    let tdee = calculate_tdee(profile, activity_level, formula)?.tdee as f64;

    let goals = MacroGoals {
        maintenance: macros_for_calories(tdee, &ratio),
        cutting: macros_for_calories(tdee * CUTTING_FACTOR, &ratio),
        bulking: macros_for_calories(tdee * BULKING_FACTOR, &ratio),
    };
    debug!(
        maintenance = goals.maintenance.calories,
        cutting = goals.cutting.calories,
        bulking = goals.bulking.calories,
        "Calculated macro goals"
    );

    Ok(goals)
}

/// Calculate macros for a fixed calorie target
pub fn calculate_macros_from_calories(
    calories: f64,
    split: impl Into<MacroSplit>,
) -> CalcResult<MacroResult> {
    validate_positive(calories, "Calories")?;
    let ratio = split.into().resolve()?;
    Ok(macros_for_calories(calories, &ratio))
}

/// All presets with their ratios
pub fn preset_ratios() -> Vec<(MacroPreset, MacroRatio)> {
    MacroPreset::ALL
        .into_iter()
        .map(|preset| (preset, preset.ratio()))
        .collect()
}
