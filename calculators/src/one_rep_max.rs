//! One-rep-max estimation
//!
//! Seven published e1RM formulas, a percentage-of-max loading table, and the
//! inverse estimate of how many reps a lighter load allows.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::errors::{CalcError, CalcResult};
use crate::units::round_to;
use crate::validation::{validate_positive, validate_reps};

/// One-rep-max estimation formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OneRepMaxFormula {
    /// w × (1 + r/30)
    #[default]
    Epley,
    /// w × 36 / (37 - r)
    Brzycki,
    /// w × r^0.1
    Lombardi,
    /// 100w / (52.2 + 41.9e^(-0.055r))
    Mayhew,
    /// w × (1 + r/40)
    #[serde(rename = "oconner")]
    OConner,
    /// 100w / (48.8 + 53.8e^(-0.075r))
    Wathan,
    /// 100w / (101.3 - 2.67123r)
    Lander,
}

impl OneRepMaxFormula {
    pub const ALL: [OneRepMaxFormula; 7] = [
        OneRepMaxFormula::Epley,
        OneRepMaxFormula::Brzycki,
        OneRepMaxFormula::Lombardi,
        OneRepMaxFormula::Mayhew,
        OneRepMaxFormula::OConner,
        OneRepMaxFormula::Wathan,
        OneRepMaxFormula::Lander,
    ];

    pub const TAGS: [&'static str; 7] = [
        "epley", "brzycki", "lombardi", "mayhew", "oconner", "wathan", "lander",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OneRepMaxFormula::Epley => "epley",
            OneRepMaxFormula::Brzycki => "brzycki",
            OneRepMaxFormula::Lombardi => "lombardi",
            OneRepMaxFormula::Mayhew => "mayhew",
            OneRepMaxFormula::OConner => "oconner",
            OneRepMaxFormula::Wathan => "wathan",
            OneRepMaxFormula::Lander => "lander",
        }
    }

    /// Unrounded estimate for `reps` > 1
    pub fn estimate(&self, weight: f64, reps: u32) -> f64 {
        let w = weight;
        let r = reps as f64;
        match self {
            OneRepMaxFormula::Epley => w * (1.0 + r / 30.0),
            OneRepMaxFormula::Brzycki => w * (36.0 / (37.0 - r)),
            OneRepMaxFormula::Lombardi => w * r.powf(0.1),
            OneRepMaxFormula::Mayhew => (100.0 * w) / (52.2 + 41.9 * (-0.055 * r).exp()),
            OneRepMaxFormula::OConner => w * (1.0 + r / 40.0),
            OneRepMaxFormula::Wathan => (100.0 * w) / (48.8 + 53.8 * (-0.075 * r).exp()),
            OneRepMaxFormula::Lander => (100.0 * w) / (101.3 - 2.67123 * r),
        }
    }
}

impl fmt::Display for OneRepMaxFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OneRepMaxFormula {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|formula| formula.as_str() == normalized)
            .ok_or_else(|| CalcError::unknown("one-rep-max formula", s, &Self::TAGS))
    }
}

/// One-rep-max estimate with a loading table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxResult {
    /// Estimated 1RM, one decimal
    pub one_rep_max: f64,
    pub formula: OneRepMaxFormula,
    /// Load at 100% down to 50% of the estimate, in steps of 5
    pub percentages: BTreeMap<u32, f64>,
}

fn percentage_table(one_rep_max: f64) -> BTreeMap<u32, f64> {
    (50..=100)
        .step_by(5)
        .map(|pct| (pct, round_to(one_rep_max * pct as f64 / 100.0, 1)))
        .collect()
}

fn estimate(weight: f64, reps: u32, formula: OneRepMaxFormula) -> f64 {
    if reps == 1 {
        weight
    } else {
        formula.estimate(weight, reps)
    }
}

fn validate_lift(weight: f64, reps: u32) -> CalcResult<()> {
    validate_positive(weight, "Weight")?;
    validate_reps(reps)
}

/// Estimate one-rep-max from a set of `reps` at `weight`
pub fn calculate_one_rep_max(
    weight: f64,
    reps: u32,
    formula: OneRepMaxFormula,
) -> CalcResult<OneRepMaxResult> {
    validate_lift(weight, reps)?;
    let one_rep_max = estimate(weight, reps, formula);

    Ok(OneRepMaxResult {
        one_rep_max: round_to(one_rep_max, 1),
        formula,
        percentages: percentage_table(one_rep_max),
    })
}

/// Estimate one-rep-max with every formula
pub fn calculate_all_formulas(
    weight: f64,
    reps: u32,
) -> CalcResult<BTreeMap<OneRepMaxFormula, f64>> {
    validate_lift(weight, reps)?;
    Ok(OneRepMaxFormula::ALL
        .into_iter()
        .map(|formula| (formula, round_to(estimate(weight, reps, formula), 1)))
        .collect())
}

/// Estimate how many reps can be performed at `target_weight`
///
/// Epley, Brzycki, O'Conner and Lander are inverted exactly. The remaining
/// formulas have no closed-form inverse and use the Epley inversion. The
/// result may be 0 when the target is within a few percent of the max.
pub fn estimate_reps_at_weight(
    one_rep_max: f64,
    target_weight: f64,
    formula: OneRepMaxFormula,
) -> CalcResult<u32> {
    validate_positive(one_rep_max, "One rep max")?;
    validate_positive(target_weight, "Target weight")?;
    if target_weight > one_rep_max {
        return Err(CalcError::invalid(
            "Target weight cannot exceed one rep max",
        ));
    }
    if target_weight == one_rep_max {
        return Ok(1);
    }

    let ratio = target_weight / one_rep_max;
    let epley_reps = || 30.0 * (1.0 / ratio - 1.0);
    let reps = match formula {
        OneRepMaxFormula::Epley => epley_reps(),
        OneRepMaxFormula::Brzycki => 37.0 - 36.0 * ratio,
        OneRepMaxFormula::OConner => 40.0 * (1.0 / ratio - 1.0),
        OneRepMaxFormula::Lander => (101.3 - 100.0 * ratio) / 2.67123,
        OneRepMaxFormula::Lombardi | OneRepMaxFormula::Mayhew | OneRepMaxFormula::Wathan => {
            debug!(formula = %formula, "No closed-form inverse, using Epley");
            epley_reps()
        }
    };

    Ok(reps.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[test]
    fn test_epley() {
        // 100 * (1 + 5/30) = 116.67
        let result = calculate_one_rep_max(100.0, 5, OneRepMaxFormula::Epley).unwrap();
        assert_eq!(result.one_rep_max, 116.7);
        assert_eq!(result.formula, OneRepMaxFormula::Epley);
    }

    #[rstest]
    #[case(OneRepMaxFormula::Brzycki, 112.5)]
    #[case(OneRepMaxFormula::OConner, 112.5)]
    #[case(OneRepMaxFormula::Lombardi, 117.5)]
    #[case(OneRepMaxFormula::Lander, 113.7)]
    fn test_formulas_at_five_reps(#[case] formula: OneRepMaxFormula, #[case] expected: f64) {
        let result = calculate_one_rep_max(100.0, 5, formula).unwrap();
        assert_eq!(result.one_rep_max, expected);
    }

    #[test]
    fn test_single_rep_returns_weight() {
        for formula in OneRepMaxFormula::ALL {
            let result = calculate_one_rep_max(142.5, 1, formula).unwrap();
            assert_eq!(result.one_rep_max, 142.5, "{} changed a true single", formula);
        }
    }

    #[test]
    fn test_percentage_table() {
        let result = calculate_one_rep_max(100.0, 5, OneRepMaxFormula::Epley).unwrap();
        assert_eq!(result.percentages.len(), 11);
        assert_eq!(result.percentages[&100], 116.7);
        assert_eq!(result.percentages[&50], 58.3);
        // Computed from the unrounded estimate (116.666...)
        assert_eq!(result.percentages[&90], 105.0);
        let keys: Vec<u32> = result.percentages.keys().copied().collect();
        assert_eq!(keys, vec![50, 55, 60, 65, 70, 75, 80, 85, 90, 95, 100]);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(calculate_one_rep_max(0.0, 5, OneRepMaxFormula::Epley).is_err());
        let err = calculate_one_rep_max(100.0, 31, OneRepMaxFormula::Epley).unwrap_err();
        assert!(err.to_string().contains("Reps must be between 1 and 30"));
        assert!(calculate_one_rep_max(100.0, 0, OneRepMaxFormula::Epley).is_err());
    }

    #[test]
    fn test_all_formulas() {
        let results = calculate_all_formulas(100.0, 5).unwrap();
        assert_eq!(results.len(), 7);
        assert_eq!(results[&OneRepMaxFormula::Epley], 116.7);
        assert!(results.contains_key(&OneRepMaxFormula::OConner));
        for value in results.values() {
            assert!(*value > 100.0 && *value < 125.0);
        }

        let singles = calculate_all_formulas(80.0, 1).unwrap();
        assert!(singles.values().all(|v| *v == 80.0));
    }

    #[test]
    fn test_reps_at_weight() {
        assert_eq!(estimate_reps_at_weight(100.0, 100.0, OneRepMaxFormula::Epley).unwrap(), 1);
        // 30 * (1/0.75 - 1) = 10
        assert_eq!(estimate_reps_at_weight(100.0, 75.0, OneRepMaxFormula::Epley).unwrap(), 10);
        // 37 - 28.8 = 8.2
        assert_eq!(estimate_reps_at_weight(100.0, 80.0, OneRepMaxFormula::Brzycki).unwrap(), 8);
        assert_eq!(estimate_reps_at_weight(100.0, 80.0, OneRepMaxFormula::OConner).unwrap(), 10);
        assert_eq!(estimate_reps_at_weight(100.0, 80.0, OneRepMaxFormula::Lander).unwrap(), 8);
    }

    #[test]
    fn test_reps_at_weight_falls_back_to_epley() {
        for formula in [
            OneRepMaxFormula::Lombardi,
            OneRepMaxFormula::Mayhew,
            OneRepMaxFormula::Wathan,
        ] {
            assert_eq!(
                estimate_reps_at_weight(100.0, 80.0, formula).unwrap(),
                estimate_reps_at_weight(100.0, 80.0, OneRepMaxFormula::Epley).unwrap()
            );
        }
    }

    #[test]
    fn test_reps_at_weight_rejects_heavier_target() {
        let err = estimate_reps_at_weight(100.0, 110.0, OneRepMaxFormula::Epley).unwrap_err();
        assert!(err.to_string().contains("cannot exceed one rep max"));
        assert!(estimate_reps_at_weight(0.0, 50.0, OneRepMaxFormula::Epley).is_err());
        assert!(estimate_reps_at_weight(100.0, -5.0, OneRepMaxFormula::Epley).is_err());
    }

    #[test]
    fn test_formula_tags() {
        assert_eq!("oconner".parse::<OneRepMaxFormula>().unwrap(), OneRepMaxFormula::OConner);
        assert_eq!(serde_json::to_string(&OneRepMaxFormula::OConner).unwrap(), "\"oconner\"");
        assert!("rippetoe".parse::<OneRepMaxFormula>().unwrap_err().is_unknown_option());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: estimates exceed the lifted weight for multi-rep sets
        #[test]
        fn prop_estimate_exceeds_weight(weight in 20.0f64..300.0, reps in 2u32..=30, index in 0usize..7) {
            let formula = OneRepMaxFormula::ALL[index];
            let result = calculate_one_rep_max(weight, reps, formula).unwrap();
            prop_assert!(result.one_rep_max >= weight);
        }

        /// Property: the Epley inverse recovers the rep count
        #[test]
        fn prop_epley_inverse(weight in 40.0f64..200.0, reps in 2u32..=20) {
            let one_rep_max = OneRepMaxFormula::Epley.estimate(weight, reps);
            let estimated = estimate_reps_at_weight(one_rep_max, weight, OneRepMaxFormula::Epley).unwrap();
            prop_assert_eq!(estimated, reps);
        }
    }
}
