pub mod bedtime;
pub mod config;
pub mod model;

use std::path::PathBuf;

use betterrest_core::{Config, LinearModel, ModelPredictor, Predictor};

/// Pick the predictor: an explicit `--model` path wins over the configured
/// one, and the built-in coefficients are used when neither is set.
pub fn predictor_for(config: &Config, model: Option<PathBuf>) -> Box<dyn Predictor> {
    match model.or_else(|| config.model_path()) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using model file");
            Box::new(ModelPredictor::new(path))
        }
        None => Box::new(LinearModel::default()),
    }
}
