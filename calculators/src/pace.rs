//! Running pace, speed and race time prediction

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::errors::{CalcError, CalcResult};
use crate::units::{round_to, DistanceUnit, MILES_PER_KM};
use crate::validation::validate_positive;

/// Riegel fatigue exponent
const RIEGEL_EXPONENT: f64 = 1.06;

/// Pace and speed for a completed distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceResult {
    /// Time per kilometer as "m:ss"
    pub pace_per_km: String,
    /// Time per mile as "m:ss"
    pub pace_per_mile: String,
    pub speed_kmh: f64,
    pub speed_mph: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Speed {
    pub kmh: f64,
    pub mph: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceStrings {
    pub per_km: String,
    pub per_mile: String,
}

/// Predicted finishing time for a target distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceTimeEstimate {
    /// Predicted time in minutes, two decimals
    pub estimated_minutes: f64,
    /// "h:mm:ss" from one hour up, "m:ss" below
    pub formatted: String,
}

fn pace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\d+):(\d+)$").expect("pace pattern is valid"))
}

/// Format a duration in seconds as "m:ss"
///
/// Seconds are rounded after the minutes are floored, so a value just under
/// a full minute renders as ":60" (239.6 s is "3:60").
pub fn format_pace(total_seconds: f64) -> String {
    let minutes = (total_seconds / 60.0).floor() as i64;
    let seconds = (total_seconds % 60.0).round() as i64;
    format!("{}:{:02}", minutes, seconds)
}

/// Calculate pace and speed from a distance covered in `time_minutes`
pub fn calculate_pace(distance: f64, time_minutes: f64, unit: DistanceUnit) -> CalcResult<PaceResult> {
    validate_positive(distance, "Distance")?;
    validate_positive(time_minutes, "Time")?;

    let distance_km = unit.to_km(distance);
    let distance_mi = unit.to_miles(distance);
    let total_seconds = time_minutes * 60.0;

    Ok(PaceResult {
        pace_per_km: format_pace(total_seconds / distance_km),
        pace_per_mile: format_pace(total_seconds / distance_mi),
        speed_kmh: round_to(distance_km / time_minutes * 60.0, 2),
        speed_mph: round_to(distance_mi / time_minutes * 60.0, 2),
    })
}

/// Convert a "m:ss" pace per kilometer to speed
///
/// The seconds group is not range checked; "5:75" is 6.25 minutes.
pub fn pace_to_speed(pace_per_km: &str) -> CalcResult<Speed> {
    let invalid_format = || CalcError::invalid("Pace must be in \"mm:ss\" format");
    let captures = pace_pattern()
        .captures(pace_per_km.trim())
        .ok_or_else(invalid_format)?;

    let minutes: f64 = captures[1].parse().map_err(|_| invalid_format())?;
    let seconds: f64 = captures[2].parse().map_err(|_| invalid_format())?;
    let total_minutes = minutes + seconds / 60.0;
    if total_minutes <= 0.0 {
        return Err(CalcError::invalid("Pace must be positive"));
    }

    let kmh = 60.0 / total_minutes;
    Ok(Speed {
        kmh: round_to(kmh, 2),
        mph: round_to(kmh * MILES_PER_KM, 2),
    })
}

/// Convert a speed in km/h to pace strings
pub fn speed_to_pace(speed_kmh: f64) -> CalcResult<PaceStrings> {
    validate_positive(speed_kmh, "Speed")?;

    let seconds_per_km = 3600.0 / speed_kmh;
    Ok(PaceStrings {
        per_km: format_pace(seconds_per_km),
        per_mile: format_pace(seconds_per_km / MILES_PER_KM),
    })
}

/// Predict a race time with the Riegel formula
///
/// Both distances must be in the same unit.
pub fn estimate_race_time(
    known_distance: f64,
    known_time_minutes: f64,
    target_distance: f64,
) -> CalcResult<RaceTimeEstimate> {
    validate_positive(known_distance, "Distance")?;
    validate_positive(target_distance, "Distance")?;
    validate_positive(known_time_minutes, "Time")?;

    let estimated = known_time_minutes * (target_distance / known_distance).powf(RIEGEL_EXPONENT);

    let hours = (estimated / 60.0).floor() as i64;
    let minutes = (estimated % 60.0).floor() as i64;
    let seconds = ((estimated % 1.0) * 60.0).round() as i64;

    let formatted = if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    };

    Ok(RaceTimeEstimate {
        estimated_minutes: round_to(estimated, 2),
        formatted,
    })
}
