//! Core error types for betterrest-core.
//!
//! This module defines the error hierarchy using thiserror. The only error
//! a calculation can produce is [`CalculationError::PredictionFailed`]; the
//! other kinds exist at the text boundary (CLI flags, config and model files).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for betterrest-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Predictor errors
    #[error("Prediction error: {0}")]
    Prediction(#[from] PredictionError),

    /// Calculation errors
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Could not resolve the configuration directory
    #[error("Could not resolve configuration directory: {0}")]
    NoDataDir(String),
}

/// Input validation errors.
///
/// Raised only when raw text is turned into an input value. The stepper
/// operations on [`crate::SleepAmount`] and [`crate::CoffeeAmount`] saturate
/// instead of failing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value outside the accepted range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
        value: String,
    },

    /// Value not a multiple of the stepper increment
    #[error("{field} must be a multiple of {step}, got {value}")]
    OffStep {
        field: &'static str,
        step: String,
        value: String,
    },

    /// Unparseable time of day
    #[error("Invalid time '{0}': expected HH:MM")]
    InvalidTime(String),
}

/// Failures reported by a [`crate::Predictor`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    /// Model missing or could not be loaded
    #[error("model unavailable: {0}")]
    Unavailable(String),

    /// Model produced a value that cannot be used as a sleep duration
    #[error("malformed model output: {0}")]
    Malformed(String),

    /// Any other predictor failure
    #[error("prediction failed: {0}")]
    Failed(String),
}

/// The single error kind of the bedtime calculation.
///
/// The underlying cause is kept for logging; callers present every variant
/// the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculationError {
    #[error("prediction unavailable")]
    PredictionFailed(#[source] PredictionError),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_wake(s: &str) -> Result<crate::TimeOfDay> {
        Ok(crate::TimeOfDay::parse(s)?)
    }

    #[test]
    fn validation_errors_convert_into_core_error() {
        let err = parse_wake("7am").unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::InvalidTime(_))));
        assert_eq!(err.to_string(), "Validation error: Invalid time '7am': expected HH:MM");
    }

    #[test]
    fn calculation_error_is_transparent() {
        let err: CoreError =
            CalculationError::PredictionFailed(PredictionError::Failed("x".into())).into();
        assert_eq!(err.to_string(), "prediction unavailable");
    }

    #[test]
    fn config_error_keeps_key() {
        let err: CoreError = ConfigError::UnknownKey("display.colour".into()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown config key: display.colour"
        );
    }
}
