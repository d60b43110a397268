//! Total daily energy expenditure calculations
//!
//! TDEE = BMR × Activity Multiplier

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bmr::{calculate_bmr, BmrFormula};
use crate::errors::CalcResult;
use crate::types::{ActivityLevel, HealthProfile};

/// TDEE calculation result with breakdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TdeeResult {
    /// Total Daily Energy Expenditure in kcal/day
    pub tdee: i32,
    /// Basal Metabolic Rate the TDEE was derived from
    pub bmr: i32,
    pub activity_level: ActivityLevel,
}

/// Calculate Total Daily Energy Expenditure
pub fn calculate_tdee(
    profile: &HealthProfile,
    activity_level: ActivityLevel,
    formula: BmrFormula,
) -> CalcResult<TdeeResult> {
    let bmr = calculate_bmr(profile, formula)?.bmr;
    let tdee = (bmr as f64 * activity_level.multiplier()).round() as i32;

    debug!(activity_level = %activity_level, bmr, tdee, "Calculated TDEE");

    Ok(TdeeResult {
        tdee,
        bmr,
        activity_level,
    })
}

/// Look up the TDEE multiplier for an activity level tag
pub fn activity_multiplier(activity_level: &str) -> CalcResult<f64> {
    Ok(activity_level.parse::<ActivityLevel>()?.multiplier())
}
