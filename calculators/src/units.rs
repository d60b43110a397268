//! Unit conversion module
//!
//! Conversions between metric and imperial units for mass, length, distance
//! and temperature. The typed unit enums convert without rounding and are used
//! internally by the calculators; the free functions round their output for
//! display (two decimals, temperature one decimal). Calculators work in kg,
//! cm and km internally.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CalcError;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.453592;
/// Pounds per kilogram
pub const LBS_PER_KG: f64 = 2.20462;
/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;
/// Miles per kilometer
pub const MILES_PER_KM: f64 = 0.621371;
/// Kilometers per mile
pub const KM_PER_MILE: f64 = 1.60934;

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

// ============================================================================
// Weight Units
// ============================================================================

/// Weight unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lbs,
}

impl WeightUnit {
    /// Convert from this unit to kilograms
    pub fn to_kg(&self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lbs => value * KG_PER_LB,
        }
    }

    /// Convert from kilograms to this unit
    pub fn from_kg(&self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lbs => kg * LBS_PER_KG,
        }
    }

    /// Get the unit abbreviation
    pub fn abbreviation(&self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lbs => "lbs",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for WeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" | "kilogram" | "kilograms" => Ok(WeightUnit::Kg),
            "lbs" | "lb" | "pound" | "pounds" => Ok(WeightUnit::Lbs),
            _ => Err(CalcError::unknown("weight unit", s, &["kg", "lbs"])),
        }
    }
}

// ============================================================================
// Height Units
// ============================================================================

/// Height unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    Inches,
}

impl HeightUnit {
    /// Convert from this unit to centimeters
    pub fn to_cm(&self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::Inches => value * CM_PER_INCH,
        }
    }

    /// Convert from centimeters to this unit
    pub fn from_cm(&self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::Inches => cm / CM_PER_INCH,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::Inches => "in",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for HeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cm" | "centimeter" | "centimeters" => Ok(HeightUnit::Cm),
            "in" | "inch" | "inches" => Ok(HeightUnit::Inches),
            _ => Err(CalcError::unknown("height unit", s, &["cm", "in"])),
        }
    }
}

// ============================================================================
// Distance Units
// ============================================================================

/// Distance unit for pace and race calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DistanceUnit {
    #[default]
    #[serde(rename = "km")]
    Km,
    #[serde(rename = "mi")]
    Miles,
}

impl DistanceUnit {
    /// Convert a distance in this unit to kilometers
    pub fn to_km(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Km => value,
            DistanceUnit::Miles => value * KM_PER_MILE,
        }
    }

    /// Convert a distance in this unit to miles
    pub fn to_miles(&self, value: f64) -> f64 {
        match self {
            DistanceUnit::Km => value * MILES_PER_KM,
            DistanceUnit::Miles => value,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Km => "km",
            DistanceUnit::Miles => "mi",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.abbreviation())
    }
}

impl FromStr for DistanceUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "km" | "kilometer" | "kilometers" => Ok(DistanceUnit::Km),
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            _ => Err(CalcError::unknown("distance unit", s, &["km", "mi"])),
        }
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert from this unit to Celsius
    pub fn to_celsius(&self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        }
    }

    /// Convert from Celsius to this unit
    pub fn from_celsius(&self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            _ => Err(CalcError::unknown(
                "temperature unit",
                s,
                &["celsius", "fahrenheit"],
            )),
        }
    }
}

// ============================================================================
// Height Display Helper
// ============================================================================

/// Height in feet and inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeetInchesHeight {
    pub feet: i32,
    pub inches: f64,
}

impl FeetInchesHeight {
    /// Create from centimeters, inches rounded to one decimal
    pub fn from_cm(cm: f64) -> Self {
        let total_inches = cm / CM_PER_INCH;
        let feet = (total_inches / 12.0).floor() as i32;
        let inches = round_to(total_inches % 12.0, 1);
        Self { feet, inches }
    }

    /// Convert to total inches
    pub fn to_total_inches(&self) -> f64 {
        (self.feet as f64 * 12.0) + self.inches
    }

    /// Convert to centimeters
    pub fn to_cm(&self) -> f64 {
        self.to_total_inches() * CM_PER_INCH
    }
}

impl fmt::Display for FeetInchesHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'{:.0}\"", self.feet, self.inches)
    }
}

// ============================================================================
// Rounded Conversions
// ============================================================================

pub fn lbs_to_kg(lbs: f64) -> f64 {
    round_to(WeightUnit::Lbs.to_kg(lbs), 2)
}

pub fn kg_to_lbs(kg: f64) -> f64 {
    round_to(WeightUnit::Lbs.from_kg(kg), 2)
}

pub fn inches_to_cm(inches: f64) -> f64 {
    round_to(HeightUnit::Inches.to_cm(inches), 2)
}

pub fn cm_to_inches(cm: f64) -> f64 {
    round_to(HeightUnit::Inches.from_cm(cm), 2)
}

pub fn feet_inches_to_cm(feet: f64, inches: f64) -> f64 {
    round_to((feet * 12.0 + inches) * CM_PER_INCH, 2)
}

pub fn cm_to_feet_inches(cm: f64) -> FeetInchesHeight {
    FeetInchesHeight::from_cm(cm)
}

pub fn km_to_miles(km: f64) -> f64 {
    round_to(DistanceUnit::Km.to_miles(km), 2)
}

pub fn miles_to_km(miles: f64) -> f64 {
    round_to(DistanceUnit::Miles.to_km(miles), 2)
}

/// Celsius to Fahrenheit, one decimal
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    round_to(TemperatureUnit::Fahrenheit.from_celsius(celsius), 1)
}

/// Fahrenheit to Celsius, one decimal
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    round_to(TemperatureUnit::Fahrenheit.to_celsius(fahrenheit), 1)
}
