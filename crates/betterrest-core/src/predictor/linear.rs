//! Linear regression model.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Predictor;
use crate::error::PredictionError;

/// `actual = intercept + wake * w + estimated_sleep * s + coffee * c`
///
/// Field names follow the feature names of the trained model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    #[serde(default)]
    pub intercept: f64,
    /// Per second since midnight.
    pub wake: f64,
    /// Per desired hour.
    pub estimated_sleep: f64,
    /// Per cup.
    pub coffee: f64,
}

impl LinearModel {
    /// Built-in coefficients used when no model file is configured.
    pub const BUILTIN: LinearModel = LinearModel {
        intercept: 0.6,
        wake: -0.000_01,
        estimated_sleep: 0.9,
        coffee: -0.12,
    };

    /// Load from a `.json` file, or parse anything else as TOML.
    pub fn from_file(path: &Path) -> Result<Self, PredictionError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PredictionError::Unavailable(format!("cannot read {}: {e}", path.display()))
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let model: LinearModel = if is_json {
            serde_json::from_str(&content).map_err(|e| {
                PredictionError::Unavailable(format!("invalid model {}: {e}", path.display()))
            })?
        } else {
            toml::from_str(&content).map_err(|e| {
                PredictionError::Unavailable(format!("invalid model {}: {e}", path.display()))
            })?
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), PredictionError> {
        let coefficients = [self.intercept, self.wake, self.estimated_sleep, self.coffee];
        if coefficients.iter().all(|c| c.is_finite()) {
            Ok(())
        } else {
            Err(PredictionError::Unavailable(
                "model coefficients must be finite".to_string(),
            ))
        }
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl Default for LinearModel {
    fn default() -> Self {
        Self::BUILTIN
    }
}

impl Predictor for LinearModel {
    fn name(&self) -> &str {
        "linear"
    }

    fn estimate_sleep(
        &self,
        wake_seconds: f64,
        desired_sleep_hours: f64,
        coffee_cups: f64,
    ) -> Result<f64, PredictionError> {
        Ok(self.intercept
            + self.wake * wake_seconds
            + self.estimated_sleep * desired_sleep_hours
            + self.coffee * coffee_cups)
    }
}
