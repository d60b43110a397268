//! Calories burned from MET (metabolic equivalent of task) values
//!
//! kcal = MET × 3.5 × weight(kg) × minutes / 200

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::round_to;
use crate::validation::validate_positive;

/// MET values from the Compendium of Physical Activities
const MET_VALUES: &[(&str, f64)] = &[
    ("walking_slow", 2.5),
    ("walking_moderate", 3.5),
    ("walking_brisk", 4.3),
    ("running_5mph", 8.3),
    ("running_6mph", 9.8),
    ("running_7mph", 11.0),
    ("running_8mph", 11.8),
    ("running_9mph", 12.8),
    ("running_10mph", 14.5),
    ("cycling_leisure", 4.0),
    ("cycling_moderate", 6.8),
    ("cycling_vigorous", 10.0),
    ("swimming_leisure", 6.0),
    ("swimming_moderate", 8.3),
    ("swimming_vigorous", 10.0),
    ("weight_training_light", 3.5),
    ("weight_training_moderate", 5.0),
    ("weight_training_vigorous", 6.0),
    ("yoga", 3.0),
    ("pilates", 3.8),
    ("hiit", 8.0),
    ("crossfit", 8.0),
    ("rowing_moderate", 7.0),
    ("rowing_vigorous", 12.0),
    ("jump_rope_slow", 8.8),
    ("jump_rope_moderate", 11.8),
    ("jump_rope_fast", 14.0),
    ("elliptical", 5.0),
    ("stair_climbing", 9.0),
    ("boxing", 7.8),
    ("dancing", 5.5),
    ("hiking", 6.0),
    ("rock_climbing", 8.0),
    ("tennis", 7.3),
    ("basketball", 6.5),
    ("soccer", 7.0),
    ("martial_arts", 10.3),
    ("stretching", 2.3),
    ("rest", 1.0),
];

/// Exercise intensity: a named activity or an explicit MET value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExerciseIntensity {
    Met(f64),
    Activity(String),
}

impl ExerciseIntensity {
    /// Resolve to a MET value
    pub fn met(&self) -> CalcResult<f64> {
        match self {
            ExerciseIntensity::Met(met) => {
                validate_positive(*met, "MET value")?;
                Ok(*met)
            }
            ExerciseIntensity::Activity(name) => met_value(name).ok_or_else(|| {
                let names: Vec<&'static str> = MET_VALUES.iter().map(|(name, _)| *name).collect();
                CalcError::unknown("activity", name, &names)
            }),
        }
    }
}

impl From<f64> for ExerciseIntensity {
    fn from(met: f64) -> Self {
        ExerciseIntensity::Met(met)
    }
}

impl From<&str> for ExerciseIntensity {
    fn from(name: &str) -> Self {
        ExerciseIntensity::Activity(name.to_string())
    }
}

impl From<String> for ExerciseIntensity {
    fn from(name: String) -> Self {
        ExerciseIntensity::Activity(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieBurnResult {
    pub total_calories: i32,
    /// One decimal
    pub calories_per_minute: f64,
}

/// Look up the MET value of a named activity
pub fn met_value(activity: &str) -> Option<f64> {
    MET_VALUES
        .iter()
        .find(|(name, _)| *name == activity)
        .map(|(_, met)| *met)
}

/// All named activities with their MET values, in table order
pub fn available_activities() -> Vec<(&'static str, f64)> {
    MET_VALUES.to_vec()
}

/// Estimate calories burned over `duration_minutes`
pub fn calculate_calories_burned(
    weight_kg: f64,
    duration_minutes: f64,
    intensity: impl Into<ExerciseIntensity>,
) -> CalcResult<CalorieBurnResult> {
    validate_positive(weight_kg, "Weight")?;
    validate_positive(duration_minutes, "Duration")?;
    let met = intensity.into().met()?;

    let total = met * 3.5 * weight_kg * duration_minutes / 200.0;

    Ok(CalorieBurnResult {
        total_calories: total.round() as i32,
        calories_per_minute: round_to(total / duration_minutes, 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_activity() {
        // 9.8 * 3.5 * 70 * 30 / 200 = 360.15
        let result = calculate_calories_burned(70.0, 30.0, "running_6mph").unwrap();
        assert_eq!(result.total_calories, 360);
        assert_eq!(result.calories_per_minute, 12.0);
    }

    #[test]
    fn test_numeric_met() {
        // 5 * 3.5 * 80 * 60 / 200 = 420
        let result = calculate_calories_burned(80.0, 60.0, 5.0).unwrap();
        assert_eq!(result.total_calories, 420);
        assert_eq!(result.calories_per_minute, 7.0);
    }

    #[test]
    fn test_unknown_activity_lists_options() {
        let err = calculate_calories_burned(70.0, 30.0, "underwater_basket_weaving").unwrap_err();
        let message = err.to_string();
        assert!(err.is_unknown_option());
        assert!(message.contains("Unknown activity: underwater_basket_weaving"));
        assert!(message.contains("walking_slow"));
        assert!(message.contains("rest"));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate_calories_burned(0.0, 30.0, "yoga").is_err());
        let err = calculate_calories_burned(70.0, 0.0, "yoga").unwrap_err();
        assert!(err.to_string().contains("Duration must be positive"));
        let err = calculate_calories_burned(70.0, 30.0, -2.0).unwrap_err();
        assert!(err.to_string().contains("MET value must be positive"));
    }

    #[test]
    fn test_activity_table() {
        let activities = available_activities();
        assert_eq!(activities.len(), 39);
        assert_eq!(activities[0], ("walking_slow", 2.5));
        assert_eq!(met_value("hiit"), Some(8.0));
        assert_eq!(met_value("HIIT"), None);
    }

    #[test]
    fn test_intensity_deserializes_from_name_or_number() {
        let intensity: ExerciseIntensity = serde_json::from_str("\"yoga\"").unwrap();
        assert_eq!(intensity.met().unwrap(), 3.0);
        let intensity: ExerciseIntensity = serde_json::from_str("6.5").unwrap();
        assert_eq!(intensity, ExerciseIntensity::Met(6.5));
    }
}
