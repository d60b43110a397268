//! Input validation functions
//!
//! Shared precondition checks used by every calculator. Each check fails
//! with [`CalcError::InvalidArgument`] carrying a user-facing message.

use crate::errors::{CalcError, CalcResult};

/// Maximum accepted age in years
pub const MAX_AGE_YEARS: i32 = 120;

/// Minimum repetitions accepted by the one-rep-max formulas
pub const MIN_REPS: u32 = 1;

/// Maximum repetitions accepted by the one-rep-max formulas
pub const MAX_REPS: u32 = 30;

/// Validate that a measurement is a finite, strictly positive number
///
/// `label` names the measurement in the error, e.g. "Weight" produces
/// "Weight must be positive".
pub fn validate_positive(value: f64, label: &str) -> CalcResult<()> {
    if value.is_nan() || value.is_infinite() {
        return Err(CalcError::invalid(format!("{} must be a valid number", label)));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid(format!("{} must be positive", label)));
    }
    Ok(())
}

/// Validate age in years, accepted range (0, 120]
pub fn validate_age(age_years: i32) -> CalcResult<()> {
    if age_years <= 0 || age_years > MAX_AGE_YEARS {
        return Err(CalcError::invalid(format!(
            "Age must be between 1 and {}",
            MAX_AGE_YEARS
        )));
    }
    Ok(())
}

/// Validate percentage value (0-100 inclusive)
pub fn validate_percentage(value: f64, label: &str) -> CalcResult<()> {
    if value.is_nan() || !(0.0..=100.0).contains(&value) {
        return Err(CalcError::invalid(format!(
            "{} must be between 0 and 100",
            label
        )));
    }
    Ok(())
}

/// Validate repetition count for one-rep-max estimation
pub fn validate_reps(reps: u32) -> CalcResult<()> {
    if !(MIN_REPS..=MAX_REPS).contains(&reps) {
        return Err(CalcError::invalid(format!(
            "Reps must be between {} and {}",
            MIN_REPS, MAX_REPS
        )));
    }
    Ok(())
}

/// Validate a heart rate in beats per minute
pub fn validate_heart_rate(bpm: i32, label: &str) -> CalcResult<()> {
    if bpm <= 0 {
        return Err(CalcError::invalid(format!("{} must be positive", label)));
    }
    Ok(())
}
