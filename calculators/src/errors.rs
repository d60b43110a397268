//! Error types for the fitness calculators

use thiserror::Error;

/// Calculator error types
///
/// Every failure is a deterministic input-validation failure raised before
/// any computation takes place.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// A value is outside the domain of the calculation
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An optional input required by the selected formula or model is absent
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    /// An unrecognized formula, method, activity or preset tag
    #[error("Unknown {kind}: {value}. Use one of: {}", .valid.join(", "))]
    UnknownOption {
        kind: &'static str,
        value: String,
        valid: Vec<&'static str>,
    },
}

impl CalcError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CalcError::InvalidArgument(message.into())
    }

    pub fn missing(message: impl Into<String>) -> Self {
        CalcError::MissingArgument(message.into())
    }

    pub fn unknown(kind: &'static str, value: &str, valid: &[&'static str]) -> Self {
        CalcError::UnknownOption {
            kind,
            value: value.to_string(),
            valid: valid.to_vec(),
        }
    }

    /// True for out-of-domain values, including absent required inputs
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidArgument(_) | CalcError::MissingArgument(_)
        )
    }

    pub fn is_unknown_option(&self) -> bool {
        matches!(self, CalcError::UnknownOption { .. })
    }
}

/// Result type alias for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = CalcError::invalid("Weight must be positive");
        assert_eq!(err.to_string(), "Invalid argument: Weight must be positive");
        assert!(err.is_invalid_argument());
        assert!(!err.is_unknown_option());
    }

    #[test]
    fn test_unknown_option_lists_valid_values() {
        let err = CalcError::unknown("formula", "magic", &["epley", "brzycki"]);
        assert_eq!(
            err.to_string(),
            "Unknown formula: magic. Use one of: epley, brzycki"
        );
        assert!(err.is_unknown_option());
    }

    #[test]
    fn test_missing_argument_is_invalid_argument() {
        let err = CalcError::missing("Resting heart rate is required for Karvonen model");
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("Resting heart rate is required"));
    }
}
