//! Body fat percentage estimation
//!
//! Two estimation methods: the U.S. Navy circumference method and a
//! BMI-derived estimate (Deurenberg). Both clamp to a physiological range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::bmi::bmi_value;
use crate::errors::{CalcError, CalcResult};
use crate::types::BiologicalSex;
use crate::units::round_to;
use crate::validation::validate_positive;

/// Lowest reported body fat percentage
pub const MIN_BODY_FAT_PERCENT: f64 = 0.0;
/// Highest reported body fat percentage
pub const MAX_BODY_FAT_PERCENT: f64 = 70.0;

/// Age plugged into the BMI-derived formula regardless of the subject's age
const BMI_DERIVED_AGE_YEARS: f64 = 30.0;

/// Body fat estimation method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatMethod {
    /// Circumference method using waist, neck, height (and hip for women)
    #[default]
    UsNavy,
    /// Estimate from BMI only
    BmiDerived,
}

impl BodyFatMethod {
    pub const TAGS: [&'static str; 2] = ["us_navy", "bmi_derived"];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyFatMethod::UsNavy => "us_navy",
            BodyFatMethod::BmiDerived => "bmi_derived",
        }
    }
}

impl fmt::Display for BodyFatMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyFatMethod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "us_navy" => Ok(BodyFatMethod::UsNavy),
            "bmi_derived" => Ok(BodyFatMethod::BmiDerived),
            _ => Err(CalcError::unknown("body fat method", s, &Self::TAGS)),
        }
    }
}

/// Body circumference measurements in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavyMeasurements {
    pub waist_cm: f64,
    pub neck_cm: f64,
    pub height_cm: f64,
    /// Required for women with the U.S. Navy method
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hip_cm: Option<f64>,
}

impl NavyMeasurements {
    pub fn new(waist_cm: f64, neck_cm: f64, height_cm: f64) -> Self {
        Self {
            waist_cm,
            neck_cm,
            height_cm,
            hip_cm: None,
        }
    }

    pub fn with_hip(mut self, hip_cm: f64) -> Self {
        self.hip_cm = Some(hip_cm);
        self
    }
}

/// Body fat estimate with mass breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyFatResult {
    pub body_fat_percent: f64,
    pub fat_mass_kg: f64,
    pub lean_mass_kg: f64,
    pub method: BodyFatMethod,
}

/// Body fat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    Essential,
    Athlete,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyFatCategory::Essential => "essential",
            BodyFatCategory::Athlete => "athlete",
            BodyFatCategory::Fitness => "fitness",
            BodyFatCategory::Average => "average",
            BodyFatCategory::Obese => "obese",
        }
    }
}

impl fmt::Display for BodyFatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// U.S. Navy circumference estimate
fn navy_body_fat(sex: BiologicalSex, m: &NavyMeasurements) -> CalcResult<f64> {
    validate_positive(m.waist_cm, "Waist")?;
    validate_positive(m.neck_cm, "Neck")?;
    validate_positive(m.height_cm, "Height")?;

    match sex {
        BiologicalSex::Male => {
            if m.waist_cm <= m.neck_cm {
                return Err(CalcError::invalid(
                    "Waist must be larger than neck for the U.S. Navy method",
                ));
            }
            Ok(495.0
                / (1.0324 - 0.19077 * (m.waist_cm - m.neck_cm).log10()
                    + 0.15456 * m.height_cm.log10())
                - 450.0)
        }
        BiologicalSex::Female => {
            let hip_cm = m.hip_cm.ok_or_else(|| {
                CalcError::missing("Hip measurement is required for women with the U.S. Navy method")
            })?;
            validate_positive(hip_cm, "Hip")?;

            let circumference = m.waist_cm + hip_cm - m.neck_cm;
            if circumference <= 0.0 {
                return Err(CalcError::invalid(
                    "Waist plus hip must be larger than neck for the U.S. Navy method",
                ));
            }
            Ok(495.0
                / (1.29579 - 0.35004 * circumference.log10() + 0.22100 * m.height_cm.log10())
                - 450.0)
        }
    }
}

/// Deurenberg estimate with a fixed age term
fn bmi_derived_body_fat(sex: BiologicalSex, weight_kg: f64, height_cm: f64) -> CalcResult<f64> {
    validate_positive(height_cm, "Height")?;
    let bmi = bmi_value(weight_kg, height_cm);
    let base = 1.2 * bmi + 0.23 * BMI_DERIVED_AGE_YEARS;
    Ok(match sex {
        BiologicalSex::Male => base - 16.2,
        BiologicalSex::Female => base - 5.4,
    })
}

/// Estimate body fat percentage and split weight into fat and lean mass
pub fn calculate_body_fat(
    sex: BiologicalSex,
    weight_kg: f64,
    measurements: &NavyMeasurements,
    method: BodyFatMethod,
) -> CalcResult<BodyFatResult> {
    validate_positive(weight_kg, "Weight")?;

    let raw = match method {
        BodyFatMethod::UsNavy => navy_body_fat(sex, measurements)?,
        BodyFatMethod::BmiDerived => {
            bmi_derived_body_fat(sex, weight_kg, measurements.height_cm)?
        }
    };

    let percent = raw.clamp(MIN_BODY_FAT_PERCENT, MAX_BODY_FAT_PERCENT);
    if percent != raw {
        debug!(method = %method, raw, clamped = percent, "Clamped body fat estimate");
    }

    let fat_mass = weight_kg * percent / 100.0;
    let lean_mass = weight_kg - fat_mass;

    Ok(BodyFatResult {
        body_fat_percent: round_to(percent, 1),
        fat_mass_kg: round_to(fat_mass, 1),
        lean_mass_kg: round_to(lean_mass, 1),
        method,
    })
}

/// Classify a body fat percentage
pub fn classify_body_fat(body_fat_percent: f64, sex: BiologicalSex) -> BodyFatCategory {
    let thresholds = match sex {
        BiologicalSex::Male => [6.0, 14.0, 18.0, 25.0],
        BiologicalSex::Female => [14.0, 21.0, 25.0, 32.0],
    };

    if body_fat_percent < thresholds[0] {
        BodyFatCategory::Essential
    } else if body_fat_percent < thresholds[1] {
        BodyFatCategory::Athlete
    } else if body_fat_percent < thresholds[2] {
        BodyFatCategory::Fitness
    } else if body_fat_percent < thresholds[3] {
        BodyFatCategory::Average
    } else {
        BodyFatCategory::Obese
    }
}
