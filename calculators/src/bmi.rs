//! Body mass index calculations
//!
//! BMI = weight(kg) / height(m)², classified with the WHO cut-offs including
//! the three underweight grades.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CalcResult;
use crate::units::{round_to, HeightUnit, WeightUnit};
use crate::validation::validate_positive;

/// Lower BMI bound of the healthy range
pub const HEALTHY_BMI_MIN: f64 = 18.5;
/// Upper BMI bound used for the healthy weight range
pub const HEALTHY_BMI_MAX: f64 = 24.9;

/// BMI category classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    UnderweightSevere,
    UnderweightModerate,
    UnderweightMild,
    Normal,
    Overweight,
    #[serde(rename = "obese_class_1")]
    ObeseClass1,
    #[serde(rename = "obese_class_2")]
    ObeseClass2,
    #[serde(rename = "obese_class_3")]
    ObeseClass3,
}

impl BmiCategory {
    /// Get the BMI range for this category, lower bound inclusive
    pub fn range(&self) -> (f64, f64) {
        match self {
            BmiCategory::UnderweightSevere => (0.0, 16.0),
            BmiCategory::UnderweightModerate => (16.0, 17.0),
            BmiCategory::UnderweightMild => (17.0, 18.5),
            BmiCategory::Normal => (18.5, 25.0),
            BmiCategory::Overweight => (25.0, 30.0),
            BmiCategory::ObeseClass1 => (30.0, 35.0),
            BmiCategory::ObeseClass2 => (35.0, 40.0),
            BmiCategory::ObeseClass3 => (40.0, f64::INFINITY),
        }
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::UnderweightSevere => "Severely Underweight",
            BmiCategory::UnderweightModerate => "Moderately Underweight",
            BmiCategory::UnderweightMild => "Mildly Underweight",
            BmiCategory::Normal => "Normal/Healthy",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObeseClass1 => "Obese (Class I)",
            BmiCategory::ObeseClass2 => "Obese (Class II)",
            BmiCategory::ObeseClass3 => "Obese (Class III)",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::UnderweightSevere => "underweight_severe",
            BmiCategory::UnderweightModerate => "underweight_moderate",
            BmiCategory::UnderweightMild => "underweight_mild",
            BmiCategory::Normal => "normal",
            BmiCategory::Overweight => "overweight",
            BmiCategory::ObeseClass1 => "obese_class_1",
            BmiCategory::ObeseClass2 => "obese_class_2",
            BmiCategory::ObeseClass3 => "obese_class_3",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weight range in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// BMI calculation result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// BMI value, one decimal
    pub bmi: f64,
    /// Category of the unrounded BMI
    pub category: BmiCategory,
    /// Healthy weight range in kg for this height
    pub healthy_weight_range: WeightRange,
}

/// Classify BMI into category
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 16.0 {
        BmiCategory::UnderweightSevere
    } else if bmi < 17.0 {
        BmiCategory::UnderweightModerate
    } else if bmi < 18.5 {
        BmiCategory::UnderweightMild
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else if bmi < 35.0 {
        BmiCategory::ObeseClass1
    } else if bmi < 40.0 {
        BmiCategory::ObeseClass2
    } else {
        BmiCategory::ObeseClass3
    }
}

/// Raw BMI value without validation or rounding
pub(crate) fn bmi_value(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Calculate healthy weight range for a given height
///
/// Based on BMI 18.5-24.9, each bound rounded to one decimal
pub fn healthy_weight_range(height_cm: f64) -> WeightRange {
    let height_m = height_cm / 100.0;
    let height_m_sq = height_m * height_m;
    WeightRange {
        min: round_to(HEALTHY_BMI_MIN * height_m_sq, 1),
        max: round_to(HEALTHY_BMI_MAX * height_m_sq, 1),
    }
}

/// Calculate BMI from weight (kg) and height (cm)
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> CalcResult<BmiResult> {
    validate_positive(weight_kg, "Weight")?;
    validate_positive(height_cm, "Height")?;

    let bmi = bmi_value(weight_kg, height_cm);

    Ok(BmiResult {
        bmi: round_to(bmi, 1),
        category: classify_bmi(bmi),
        healthy_weight_range: healthy_weight_range(height_cm),
    })
}

/// Calculate BMI from weight (lbs) and height (inches)
pub fn calculate_bmi_imperial(weight_lbs: f64, height_inches: f64) -> CalcResult<BmiResult> {
    validate_positive(weight_lbs, "Weight")?;
    validate_positive(height_inches, "Height")?;

    calculate_bmi(
        WeightUnit::Lbs.to_kg(weight_lbs),
        HeightUnit::Inches.to_cm(height_inches),
    )
}
