//! Sleep predictors.
//!
//! The calculator only depends on the [`Predictor`] trait. Two real
//! implementations ship with the crate: [`LinearModel`] (coefficients held in
//! memory) and [`ModelPredictor`] (a model file loaded on first use).
//! [`from_fn`] turns a closure into a predictor, which is what tests use as
//! stubs.

mod linear;
mod loader;

pub use linear::LinearModel;
pub use loader::ModelPredictor;

use crate::error::PredictionError;

/// Estimates how many hours of sleep a user will actually get.
pub trait Predictor {
    /// Short identifier used in logs (e.g. "linear", "file").
    fn name(&self) -> &str {
        "predictor"
    }

    /// Predict actual sleep in hours.
    ///
    /// `wake_seconds` is the wake-up time as seconds since midnight,
    /// `desired_sleep_hours` the requested sleep, `coffee_cups` the daily
    /// intake. All three are passed as floats, the way regression features are.
    fn estimate_sleep(
        &self,
        wake_seconds: f64,
        desired_sleep_hours: f64,
        coffee_cups: f64,
    ) -> Result<f64, PredictionError>;
}

/// Wrap a closure as a [`Predictor`].
///
/// ```
/// use betterrest_core::predictor::{from_fn, Predictor};
///
/// let p = from_fn(|_wake, desired, _coffee| Ok(desired - 0.5));
/// assert_eq!(p.estimate_sleep(25_200.0, 8.0, 1.0).unwrap(), 7.5);
/// ```
pub fn from_fn<F>(f: F) -> FnPredictor<F>
where
    F: Fn(f64, f64, f64) -> Result<f64, PredictionError>,
{
    FnPredictor(f)
}

/// A closure-backed predictor, built by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnPredictor<F>(F);

impl<F> Predictor for FnPredictor<F>
where
    F: Fn(f64, f64, f64) -> Result<f64, PredictionError>,
{
    fn name(&self) -> &str {
        "fn"
    }

    fn estimate_sleep(
        &self,
        wake_seconds: f64,
        desired_sleep_hours: f64,
        coffee_cups: f64,
    ) -> Result<f64, PredictionError> {
        (self.0)(wake_seconds, desired_sleep_hours, coffee_cups)
    }
}

impl Predictor for Box<dyn Predictor> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn estimate_sleep(
        &self,
        wake_seconds: f64,
        desired_sleep_hours: f64,
        coffee_cups: f64,
    ) -> Result<f64, PredictionError> {
        (**self).estimate_sleep(wake_seconds, desired_sleep_hours, coffee_cups)
    }
}
