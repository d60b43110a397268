//! Default calculator options
//!
//! Options are resolved hierarchically:
//! 1. Default values (in code)
//! 2. An optional TOML source (file or string)
//! 3. Environment variables (prefix: FITCALC__)
//!
//! Nothing is loaded implicitly; calculators only see these defaults through
//! the forwarding methods on [`CalculatorDefaults`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::bmr::{calculate_bmr, BmrFormula, BmrResult};
use crate::body_fat::{calculate_body_fat, BodyFatMethod, BodyFatResult, NavyMeasurements};
use crate::errors::CalcResult;
use crate::heart_rate::{
    calculate_heart_rate_zones, estimate_max_heart_rate, HeartRateZoneModel,
    HeartRateZonesResult, MaxHeartRateFormula,
};
use crate::macros::{calculate_macros, MacroGoals, MacroPreset};
use crate::one_rep_max::{calculate_one_rep_max, OneRepMaxFormula, OneRepMaxResult};
use crate::pace::{calculate_pace, PaceResult};
use crate::tdee::{calculate_tdee, TdeeResult};
use crate::types::{ActivityLevel, BiologicalSex, HealthProfile};
use crate::units::DistanceUnit;
use crate::water_intake::{calculate_water_intake, WaterIntakeResult};

const ENV_PREFIX: &str = "FITCALC";
const ENV_SEPARATOR: &str = "__";

/// Option used for every selectable formula, model or unit when the caller
/// does not choose one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorDefaults {
    pub bmr_formula: BmrFormula,
    pub activity_level: ActivityLevel,
    pub macro_preset: MacroPreset,
    pub one_rep_max_formula: OneRepMaxFormula,
    pub max_heart_rate_formula: MaxHeartRateFormula,
    pub heart_rate_zone_model: HeartRateZoneModel,
    pub body_fat_method: BodyFatMethod,
    pub distance_unit: DistanceUnit,
}

impl CalculatorDefaults {
    /// Load from code defaults overridden by FITCALC__ environment variables
    ///
    /// e.g. `FITCALC__BMR_FORMULA=harris_benedict`
    pub fn load() -> Result<Self, ConfigError> {
        Self::finish(Self::builder()?, Self::environment())
    }

    /// Load with a TOML file between the defaults and the environment
    ///
    /// A missing file is skipped.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        Self::finish(Self::builder()?.add_source(file), Self::environment())
    }

    /// Load with TOML text between the defaults and the environment
    pub fn load_str(toml: &str) -> Result<Self, ConfigError> {
        let source = File::from_str(toml, FileFormat::Toml);
        Self::finish(Self::builder()?.add_source(source), Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR)
    }

    /// Builder seeded with the code defaults
    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder().add_source(Config::try_from(&Self::default())?))
    }

    /// Apply the environment layer last and deserialize
    fn finish(
        builder: ConfigBuilder<DefaultState>,
        environment: Environment,
    ) -> Result<Self, ConfigError> {
        builder
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// BMR with the default formula
    pub fn bmr(&self, profile: &HealthProfile) -> CalcResult<BmrResult> {
        calculate_bmr(profile, self.bmr_formula)
    }

    /// TDEE with the default activity level and BMR formula
    pub fn tdee(&self, profile: &HealthProfile) -> CalcResult<TdeeResult> {
        calculate_tdee(profile, self.activity_level, self.bmr_formula)
    }

    pub fn macros(&self, profile: &HealthProfile) -> CalcResult<MacroGoals> {
        calculate_macros(
            profile,
            self.activity_level,
            self.macro_preset,
            self.bmr_formula,
        )
    }

    pub fn one_rep_max(&self, weight: f64, reps: u32) -> CalcResult<OneRepMaxResult> {
        calculate_one_rep_max(weight, reps, self.one_rep_max_formula)
    }

    pub fn max_heart_rate(&self, age_years: i32) -> CalcResult<i32> {
        estimate_max_heart_rate(age_years, self.max_heart_rate_formula)
    }

    /// Training zones with the default zone model
    ///
    /// Max HR comes from the default max heart rate formula.
    pub fn heart_rate_zones(
        &self,
        age_years: i32,
        resting_heart_rate: Option<i32>,
    ) -> CalcResult<HeartRateZonesResult> {
        let max_hr = self.max_heart_rate(age_years)?;
        calculate_heart_rate_zones(
            age_years,
            resting_heart_rate,
            self.heart_rate_zone_model,
            Some(max_hr),
        )
    }

    pub fn body_fat(
        &self,
        sex: BiologicalSex,
        weight_kg: f64,
        measurements: &NavyMeasurements,
    ) -> CalcResult<BodyFatResult> {
        calculate_body_fat(sex, weight_kg, measurements, self.body_fat_method)
    }

    pub fn pace(&self, distance: f64, time_minutes: f64) -> CalcResult<PaceResult> {
        calculate_pace(distance, time_minutes, self.distance_unit)
    }

    pub fn water_intake(&self, weight_kg: f64) -> CalcResult<WaterIntakeResult> {
        calculate_water_intake(weight_kg, self.activity_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::Map;

    /// Environment source reading from a fixed map instead of the process
    fn environment_from(vars: &[(&str, &str)]) -> Environment {
        let map: Map<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        CalculatorDefaults::environment().source(Some(map))
    }

    fn toml(text: &str) -> impl config::Source + Send + Sync + 'static {
        File::from_str(text, FileFormat::Toml)
    }

    fn male() -> HealthProfile {
        HealthProfile::new(80.0, 180.0, 30, BiologicalSex::Male)
    }

    #[test]
    fn test_default_options() {
        let defaults = CalculatorDefaults::default();
        assert_eq!(defaults.bmr_formula, BmrFormula::MifflinStJeor);
        assert_eq!(defaults.activity_level, ActivityLevel::Moderate);
        assert_eq!(defaults.macro_preset, MacroPreset::Balanced);
        assert_eq!(defaults.one_rep_max_formula, OneRepMaxFormula::Epley);
        assert_eq!(defaults.max_heart_rate_formula, MaxHeartRateFormula::Tanaka);
        assert_eq!(defaults.heart_rate_zone_model, HeartRateZoneModel::Standard);
        assert_eq!(defaults.body_fat_method, BodyFatMethod::UsNavy);
        assert_eq!(defaults.distance_unit, DistanceUnit::Km);
    }

    #[test]
    fn test_build_without_overrides() {
        let builder = CalculatorDefaults::builder().unwrap();
        let defaults = CalculatorDefaults::finish(builder, environment_from(&[])).unwrap();
        assert_eq!(defaults, CalculatorDefaults::default());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let builder = CalculatorDefaults::builder().unwrap().add_source(toml(
            r#"
            bmr_formula = "harris_benedict"
            distance_unit = "mi"
            "#,
        ));
        let defaults = CalculatorDefaults::finish(builder, environment_from(&[])).unwrap();
        assert_eq!(defaults.bmr_formula, BmrFormula::HarrisBenedict);
        assert_eq!(defaults.distance_unit, DistanceUnit::Miles);
        assert_eq!(defaults.activity_level, ActivityLevel::Moderate);
    }

    #[test]
    fn test_environment_overrides_toml() {
        let builder = CalculatorDefaults::builder()
            .unwrap()
            .add_source(toml("one_rep_max_formula = \"brzycki\""));
        let env = environment_from(&[
            ("FITCALC__ONE_REP_MAX_FORMULA", "lander"),
            ("FITCALC__HEART_RATE_ZONE_MODEL", "karvonen"),
        ]);
        let defaults = CalculatorDefaults::finish(builder, env).unwrap();
        assert_eq!(defaults.one_rep_max_formula, OneRepMaxFormula::Lander);
        assert_eq!(defaults.heart_rate_zone_model, HeartRateZoneModel::Karvonen);
    }

    #[test]
    fn test_unknown_tag_is_config_error() {
        let builder = CalculatorDefaults::builder()
            .unwrap()
            .add_source(toml("bmr_formula = \"cunningham\""));
        let result = CalculatorDefaults::finish(builder, environment_from(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_skipped() {
        let defaults = CalculatorDefaults::load_file("does/not/exist.toml");
        assert!(defaults.is_ok());
    }

    #[test]
    fn test_forwarding_methods_use_defaults() {
        let defaults = CalculatorDefaults::default();
        assert_eq!(defaults.bmr(&male()).unwrap().bmr, 1780);
        assert_eq!(defaults.tdee(&male()).unwrap().tdee, 2759);
        assert_eq!(defaults.macros(&male()).unwrap().maintenance.calories, 2759);
        assert_eq!(defaults.max_heart_rate(30).unwrap(), 187);
        assert_eq!(defaults.one_rep_max(100.0, 5).unwrap().one_rep_max, 116.7);
        assert_eq!(defaults.pace(5.0, 25.0).unwrap().pace_per_km, "5:00");
        assert_eq!(defaults.water_intake(70.0).unwrap().liters, 2.9);

        let zones = defaults.heart_rate_zones(30, None).unwrap();
        assert_eq!(zones.max_heart_rate, 187);
    }

    #[test]
    fn test_forwarding_respects_overrides() {
        let defaults = CalculatorDefaults {
            max_heart_rate_formula: MaxHeartRateFormula::Fox,
            body_fat_method: BodyFatMethod::BmiDerived,
            ..Default::default()
        };
        assert_eq!(defaults.heart_rate_zones(30, None).unwrap().max_heart_rate, 190);

        let measurements = NavyMeasurements::new(0.0, 0.0, 180.0);
        let result = defaults
            .body_fat(BiologicalSex::Male, 80.0, &measurements)
            .unwrap();
        assert_eq!(result.method, BodyFatMethod::BmiDerived);
    }
}
