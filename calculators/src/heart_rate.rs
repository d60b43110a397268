//! Heart rate estimation and training zones
//!
//! Max heart rate estimators plus five training zones, derived either from
//! a percentage of max HR or from heart rate reserve (Karvonen).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};
use crate::validation::{validate_age, validate_heart_rate, validate_percentage};

/// Zone boundaries as fractions of max HR (or heart rate reserve)
const ZONE_BOUNDS: [f64; 6] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0];

const ZONE_NAMES: [&str; 5] = [
    "Zone 1 - Recovery",
    "Zone 2 - Endurance",
    "Zone 3 - Aerobic",
    "Zone 4 - Threshold",
    "Zone 5 - Maximum",
];

const ZONE_DESCRIPTIONS: [&str; 5] = [
    "Very light activity, warm-up and recovery",
    "Light aerobic, fat burning, base fitness",
    "Moderate aerobic, cardiovascular improvement",
    "Hard effort, lactate threshold training",
    "Maximum effort, anaerobic capacity",
];

/// Max heart rate estimation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MaxHeartRateFormula {
    /// 208 - 0.7 × age
    #[default]
    Tanaka,
    /// 220 - age
    Fox,
}

impl MaxHeartRateFormula {
    pub const TAGS: [&'static str; 2] = ["tanaka", "fox"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaxHeartRateFormula::Tanaka => "tanaka",
            MaxHeartRateFormula::Fox => "fox",
        }
    }
}

impl fmt::Display for MaxHeartRateFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaxHeartRateFormula {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tanaka" => Ok(MaxHeartRateFormula::Tanaka),
            "fox" => Ok(MaxHeartRateFormula::Fox),
            _ => Err(CalcError::unknown("max heart rate formula", s, &Self::TAGS)),
        }
    }
}

/// How zone boundaries are derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum HeartRateZoneModel {
    /// Percentage of max heart rate
    #[default]
    Standard,
    /// Percentage of heart rate reserve, offset by resting HR
    Karvonen,
}

impl HeartRateZoneModel {
    pub const TAGS: [&'static str; 2] = ["standard", "karvonen"];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeartRateZoneModel::Standard => "standard",
            HeartRateZoneModel::Karvonen => "karvonen",
        }
    }
}

impl fmt::Display for HeartRateZoneModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeartRateZoneModel {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(HeartRateZoneModel::Standard),
            "karvonen" => Ok(HeartRateZoneModel::Karvonen),
            _ => Err(CalcError::unknown("heart rate zone model", s, &Self::TAGS)),
        }
    }
}

/// A single training zone in beats per minute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZone {
    pub zone: u8,
    pub name: String,
    pub min: i32,
    pub max: i32,
    pub description: String,
}

/// Training zones with the inputs they were derived from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateZonesResult {
    pub max_heart_rate: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resting_heart_rate: Option<i32>,
    pub model: HeartRateZoneModel,
    pub zones: Vec<HeartRateZone>,
}

/// Estimate maximum heart rate from age
pub fn estimate_max_heart_rate(age_years: i32, formula: MaxHeartRateFormula) -> CalcResult<i32> {
    validate_age(age_years)?;
    let age = age_years as f64;
    let max_hr = match formula {
        MaxHeartRateFormula::Tanaka => 208.0 - 0.7 * age,
        MaxHeartRateFormula::Fox => 220.0 - age,
    };
    Ok(max_hr.round() as i32)
}

/// Check a resting heart rate against the max it is offset from
fn validate_resting(resting_hr: i32, max_hr: i32) -> CalcResult<()> {
    validate_heart_rate(resting_hr, "Resting heart rate")?;
    if resting_hr >= max_hr {
        return Err(CalcError::invalid(
            "Resting heart rate must be lower than max heart rate",
        ));
    }
    Ok(())
}

/// Calculate the five training zones
///
/// `max_heart_rate` defaults to the Tanaka estimate for `age_years`; age is
/// only validated in that case.
pub fn calculate_heart_rate_zones(
    age_years: i32,
    resting_heart_rate: Option<i32>,
    model: HeartRateZoneModel,
    max_heart_rate: Option<i32>,
) -> CalcResult<HeartRateZonesResult> {
    let max_hr = match max_heart_rate {
        Some(max_hr) => {
            validate_heart_rate(max_hr, "Max heart rate")?;
            max_hr
        }
        None => estimate_max_heart_rate(age_years, MaxHeartRateFormula::Tanaka)?,
    };

    // bound = round(span × fraction + offset)
    let (span, offset) = match model {
        HeartRateZoneModel::Standard => (max_hr as f64, 0.0),
        HeartRateZoneModel::Karvonen => {
            let resting = resting_heart_rate.ok_or_else(|| {
                CalcError::missing("Resting heart rate is required for Karvonen method")
            })?;
            validate_resting(resting, max_hr)?;
            ((max_hr - resting) as f64, resting as f64)
        }
    };
    let bound = |fraction: f64| (span * fraction + offset).round() as i32;

    let zones = (0..ZONE_NAMES.len())
        .map(|i| HeartRateZone {
            zone: (i + 1) as u8,
            name: ZONE_NAMES[i].to_string(),
            min: bound(ZONE_BOUNDS[i]),
            max: bound(ZONE_BOUNDS[i + 1]),
            description: ZONE_DESCRIPTIONS[i].to_string(),
        })
        .collect();

    Ok(HeartRateZonesResult {
        max_heart_rate: max_hr,
        resting_heart_rate,
        model,
        zones,
    })
}

/// Target heart rate at an intensity percentage
///
/// Uses Karvonen when a resting heart rate is supplied, a straight
/// percentage of the Tanaka max otherwise.
pub fn target_heart_rate(
    age_years: i32,
    intensity_percent: f64,
    resting_heart_rate: Option<i32>,
) -> CalcResult<i32> {
    validate_percentage(intensity_percent, "Intensity")?;
    let max_hr = estimate_max_heart_rate(age_years, MaxHeartRateFormula::Tanaka)?;
    let fraction = intensity_percent / 100.0;

    let target = match resting_heart_rate {
        Some(resting) => {
            validate_resting(resting, max_hr)?;
            (max_hr - resting) as f64 * fraction + resting as f64
        }
        None => max_hr as f64 * fraction,
    };
    Ok(target.round() as i32)
}
