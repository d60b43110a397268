//! Fitness Calculators WASM Module
//!
//! WebAssembly bindings exposing the calculators to the browser. Inputs are
//! scalars and tag strings; structured results are returned as JSON and
//! errors as their display message.

use std::str::FromStr;

use fitness_calculators::{self as calc, CalcError, ExerciseIntensity, HealthProfile};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| e.to_string())
}

fn parse<T: FromStr<Err = CalcError>>(tag: &str) -> Result<T, String> {
    tag.parse().map_err(|e: CalcError| e.to_string())
}

fn profile(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
) -> Result<HealthProfile, String> {
    Ok(HealthProfile::new(weight_kg, height_cm, age_years, parse(sex)?))
}

/// Calculate BMI with category and healthy weight range
#[wasm_bindgen]
pub fn bmi(weight_kg: f64, height_cm: f64) -> Result<String, String> {
    to_json(&calc::calculate_bmi(weight_kg, height_cm).map_err(|e| e.to_string())?)
}

/// Calculate BMR in kcal/day
#[wasm_bindgen]
pub fn bmr(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    formula: &str,
    body_fat_percent: Option<f64>,
) -> Result<i32, String> {
    let mut profile = profile(weight_kg, height_cm, age_years, sex)?;
    profile.body_fat_percent = body_fat_percent;
    calc::calculate_bmr(&profile, parse(formula)?)
        .map(|result| result.bmr)
        .map_err(|e| e.to_string())
}

/// Calculate TDEE with its BMR breakdown
#[wasm_bindgen]
pub fn tdee(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity_level: &str,
) -> Result<String, String> {
    let profile = profile(weight_kg, height_cm, age_years, sex)?;
    let result = calc::calculate_tdee(&profile, parse(activity_level)?, Default::default())
        .map_err(|e| e.to_string())?;
    to_json(&result)
}

/// Calculate maintenance, cutting and bulking macros for a preset
#[wasm_bindgen]
pub fn macros(
    weight_kg: f64,
    height_cm: f64,
    age_years: i32,
    sex: &str,
    activity_level: &str,
    preset: &str,
) -> Result<String, String> {
    let profile = profile(weight_kg, height_cm, age_years, sex)?;
    let preset: calc::MacroPreset = parse(preset)?;
    let result = calc::calculate_macros(
        &profile,
        parse(activity_level)?,
        preset,
        Default::default(),
    )
    .map_err(|e| e.to_string())?;
    to_json(&result)
}

/// Estimate one-rep-max with its percentage table
#[wasm_bindgen]
pub fn one_rep_max(weight: f64, reps: u32, formula: &str) -> Result<String, String> {
    let result =
        calc::calculate_one_rep_max(weight, reps, parse(formula)?).map_err(|e| e.to_string())?;
    to_json(&result)
}

#[wasm_bindgen]
pub fn max_heart_rate(age_years: i32, formula: &str) -> Result<i32, String> {
    calc::estimate_max_heart_rate(age_years, parse(formula)?).map_err(|e| e.to_string())
}

/// Calculate the five training zones
#[wasm_bindgen]
pub fn heart_rate_zones(
    age_years: i32,
    resting_heart_rate: Option<i32>,
    model: &str,
    max_heart_rate: Option<i32>,
) -> Result<String, String> {
    let result = calc::calculate_heart_rate_zones(
        age_years,
        resting_heart_rate,
        parse(model)?,
        max_heart_rate,
    )
    .map_err(|e| e.to_string())?;
    to_json(&result)
}

/// Estimate body fat percentage and mass breakdown
#[wasm_bindgen]
pub fn body_fat(
    sex: &str,
    weight_kg: f64,
    waist_cm: f64,
    neck_cm: f64,
    height_cm: f64,
    hip_cm: Option<f64>,
    method: &str,
) -> Result<String, String> {
    let measurements = calc::NavyMeasurements {
        waist_cm,
        neck_cm,
        height_cm,
        hip_cm,
    };
    let result = calc::calculate_body_fat(parse(sex)?, weight_kg, &measurements, parse(method)?)
        .map_err(|e| e.to_string())?;
    to_json(&result)
}

/// Calculate pace and speed; `unit` is "km" or "mi"
#[wasm_bindgen]
pub fn pace(distance: f64, time_minutes: f64, unit: &str) -> Result<String, String> {
    let result =
        calc::calculate_pace(distance, time_minutes, parse(unit)?).map_err(|e| e.to_string())?;
    to_json(&result)
}

/// Predict a race time with the Riegel formula
#[wasm_bindgen]
pub fn race_time(
    known_distance: f64,
    known_time_minutes: f64,
    target_distance: f64,
) -> Result<String, String> {
    let result = calc::estimate_race_time(known_distance, known_time_minutes, target_distance)
        .map_err(|e| e.to_string())?;
    to_json(&result)
}

#[wasm_bindgen]
pub fn water_intake(weight_kg: f64, activity_level: &str) -> Result<String, String> {
    let result = calc::calculate_water_intake(weight_kg, parse(activity_level)?)
        .map_err(|e| e.to_string())?;
    to_json(&result)
}

/// Calories burned; `activity` is an activity name or a numeric MET value
#[wasm_bindgen]
pub fn calories_burned(
    weight_kg: f64,
    duration_minutes: f64,
    activity: &str,
) -> Result<String, String> {
    let intensity = match activity.trim().parse::<f64>() {
        Ok(met) => ExerciseIntensity::Met(met),
        Err(_) => ExerciseIntensity::from(activity),
    };
    let result = calc::calculate_calories_burned(weight_kg, duration_minutes, intensity)
        .map_err(|e| e.to_string())?;
    to_json(&result)
}
