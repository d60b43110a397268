//! Ideal body weight estimates
//!
//! Robinson, Miller, Devine and Hamwi formulas. Each adds a fixed number of
//! kilograms per inch of height over five feet.

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::types::BiologicalSex;
use crate::units::{round_to, CM_PER_INCH};
use crate::validation::validate_positive;

const FIVE_FEET_INCHES: f64 = 60.0;

/// Ideal weight in kilograms per formula
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealWeightResult {
    pub robinson: f64,
    pub miller: f64,
    pub devine: f64,
    pub hamwi: f64,
    /// Mean of the four unrounded estimates
    pub average: f64,
}

/// (base kg, kg per inch over five feet) for Robinson, Miller, Devine, Hamwi
fn coefficients(sex: BiologicalSex) -> [(f64, f64); 4] {
    match sex {
        BiologicalSex::Male => [(52.0, 1.9), (56.2, 1.41), (50.0, 2.3), (48.0, 2.7)],
        BiologicalSex::Female => [(49.0, 1.7), (53.1, 1.36), (45.5, 2.3), (45.5, 2.2)],
    }
}

/// Calculate ideal body weight from height
///
/// Heights at or below five feet use the base weight of each formula.
pub fn calculate_ideal_weight(height_cm: f64, sex: BiologicalSex) -> CalcResult<IdealWeightResult> {
    validate_positive(height_cm, "Height")?;

    let inches_over = (height_cm / CM_PER_INCH - FIVE_FEET_INCHES).max(0.0);
    let [robinson, miller, devine, hamwi] =
        coefficients(sex).map(|(base, per_inch)| base + per_inch * inches_over);
    let average = (robinson + miller + devine + hamwi) / 4.0;

    Ok(IdealWeightResult {
        robinson: round_to(robinson, 1),
        miller: round_to(miller, 1),
        devine: round_to(devine, 1),
        hamwi: round_to(hamwi, 1),
        average: round_to(average, 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_male_ideal_weight() {
        // 182.88 cm = 72 in -> 12 in over five feet
        let result = calculate_ideal_weight(182.88, BiologicalSex::Male).unwrap();
        assert_eq!(result.robinson, 74.8);
        assert_eq!(result.miller, 73.1);
        assert_eq!(result.devine, 77.6);
        assert_eq!(result.hamwi, 80.4);
        assert_eq!(result.average, 76.5);
    }

    #[test]
    fn test_female_ideal_weight() {
        let result = calculate_ideal_weight(165.1, BiologicalSex::Female).unwrap();
        // 65 in -> 5 in over
        assert_eq!(result.devine, 57.0);
        assert_eq!(result.hamwi, 56.5);
    }

    #[test]
    fn test_short_height_uses_base_weight() {
        let result = calculate_ideal_weight(140.0, BiologicalSex::Female).unwrap();
        assert_eq!(result.robinson, 49.0);
        assert_eq!(result.miller, 53.1);
        assert_eq!(result.devine, 45.5);
        assert_eq!(result.hamwi, 45.5);
    }

    #[test]
    fn test_invalid_height() {
        let err = calculate_ideal_weight(0.0, BiologicalSex::Male).unwrap_err();
        assert!(err.to_string().contains("Height must be positive"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: average lies between the lowest and highest estimate
        #[test]
        fn prop_average_within_estimates(height in 100.0f64..230.0, female in any::<bool>()) {
            let sex = if female { BiologicalSex::Female } else { BiologicalSex::Male };
            let r = calculate_ideal_weight(height, sex).unwrap();
            let values = [r.robinson, r.miller, r.devine, r.hamwi];
            let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(r.average >= min - 0.1 && r.average <= max + 0.1);
        }
    }
}
