//! Daily water intake recommendation

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::types::ActivityLevel;
use crate::units::round_to;
use crate::validation::validate_positive;

/// Base hydration in liters per kilogram of body weight
const LITERS_PER_KG: f64 = 0.033;

/// US fluid ounces per liter
const OUNCES_PER_LITER: f64 = 33.814;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaterIntakeResult {
    /// Liters per day, one decimal
    pub liters: f64,
    /// US fluid ounces per day
    pub ounces: i32,
}

/// Calculate daily water intake from weight and activity level
pub fn calculate_water_intake(
    weight_kg: f64,
    activity_level: ActivityLevel,
) -> CalcResult<WaterIntakeResult> {
    validate_positive(weight_kg, "Weight")?;

    let liters = weight_kg * LITERS_PER_KG * activity_level.water_multiplier();

    Ok(WaterIntakeResult {
        liters: round_to(liters, 1),
        ounces: (liters * OUNCES_PER_LITER).round() as i32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_moderate_activity() {
        // 70 * 0.033 * 1.25 = 2.8875 L
        let result = calculate_water_intake(70.0, ActivityLevel::Moderate).unwrap();
        assert_eq!(result.liters, 2.9);
        assert_eq!(result.ounces, 98); // 97.64
    }

    #[test]
    fn test_sedentary_uses_base() {
        let result = calculate_water_intake(100.0, ActivityLevel::Sedentary).unwrap();
        assert_eq!(result.liters, 3.3);
        assert_eq!(result.ounces, 112); // 111.59
    }

    #[test]
    fn test_invalid_weight() {
        assert!(calculate_water_intake(0.0, ActivityLevel::default()).is_err());
        assert!(calculate_water_intake(f64::NAN, ActivityLevel::default()).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: more activity never lowers the target
        #[test]
        fn prop_increases_with_activity(weight in 40.0f64..150.0) {
            let mut previous = 0;
            for level in ActivityLevel::ALL {
                let result = calculate_water_intake(weight, level).unwrap();
                prop_assert!(result.ounces >= previous);
                previous = result.ounces;
            }
        }
    }
}
