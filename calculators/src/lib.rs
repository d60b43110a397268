//! Fitness Calculators Library
//!
//! Stateless health and fitness metric calculators: BMI, BMR, TDEE, macros,
//! body fat, heart rate zones, one-rep-max, pace, ideal weight, water intake,
//! calories burned and unit conversions. Shared by native callers and the
//! WASM bindings.

pub mod bmi;
pub mod bmr;
pub mod body_fat;
pub mod calories;
pub mod defaults;
pub mod errors;
pub mod heart_rate;
pub mod ideal_weight;
pub mod macros;
pub mod one_rep_max;
pub mod pace;
pub mod tdee;
pub mod types;
pub mod units;
pub mod validation;
pub mod water_intake;

// Re-export commonly used items
pub use errors::*;
pub use types::*;

// Export units module items (canonical source for unit types)
pub use units::*;

// Calculators
pub use bmi::*;
pub use bmr::*;
pub use body_fat::*;
pub use calories::*;
pub use heart_rate::*;
pub use ideal_weight::*;
pub use macros::*;
pub use one_rep_max::*;
pub use pace::*;
pub use tdee::*;
pub use water_intake::*;

pub use defaults::CalculatorDefaults;
