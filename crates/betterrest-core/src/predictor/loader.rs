//! File-backed predictor with a process-lifetime model cache.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use super::{LinearModel, Predictor};
use crate::error::PredictionError;

/// Loads a [`LinearModel`] from disk the first time it is asked for a
/// prediction and reuses it afterwards.
///
/// A failed load is not remembered; the next prediction tries again.
#[derive(Debug)]
pub struct ModelPredictor {
    path: PathBuf,
    model: OnceLock<LinearModel>,
}

impl ModelPredictor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            model: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the model has been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.model.get().is_some()
    }

    /// Return the cached model, loading it if needed.
    pub fn model(&self) -> Result<&LinearModel, PredictionError> {
        if let Some(model) = self.model.get() {
            return Ok(model);
        }

        tracing::debug!(path = %self.path.display(), "loading sleep model");
        let loaded = LinearModel::from_file(&self.path)?;
        Ok(self.model.get_or_init(|| loaded))
    }
}

impl Predictor for ModelPredictor {
    fn name(&self) -> &str {
        "file"
    }

    fn estimate_sleep(
        &self,
        wake_seconds: f64,
        desired_sleep_hours: f64,
        coffee_cups: f64,
    ) -> Result<f64, PredictionError> {
        self.model()?
            .estimate_sleep(wake_seconds, desired_sleep_hours, coffee_cups)
    }
}
