//! # BetterRest Core Library
//!
//! This library provides the core logic for BetterRest: given a wake-up
//! time, a desired amount of sleep and a daily coffee intake, it asks a
//! regression model how much sleep the user will actually get and derives
//! the ideal bedtime. The CLI is a thin shell over the same library.
//!
//! ## Architecture
//!
//! - **Calculator**: a pure function of the three inputs and an injected
//!   [`Predictor`]; the only error it produces is "prediction unavailable"
//! - **Form**: explicit recompute after every input change, no reactive bindings
//! - **Predictors**: a linear model, optionally loaded from a file and cached
//! - **Storage**: TOML-based configuration for defaults and display
//!
//! ## Key Components
//!
//! - [`BedtimeCalculator`]: the bedtime derivation
//! - [`SleepForm`]: input session driven by the caller
//! - [`Predictor`]: the model seam
//! - [`Config`]: application configuration management

pub mod calculator;
pub mod error;
pub mod form;
pub mod inputs;
pub mod predictor;
pub mod presentation;
pub mod storage;
pub mod time;

pub use calculator::{Bedtime, BedtimeCalculator};
pub use error::{CalculationError, ConfigError, CoreError, PredictionError, ValidationError};
pub use form::SleepForm;
pub use inputs::{CoffeeAmount, SleepAmount, SleepInputs};
pub use predictor::{LinearModel, ModelPredictor, Predictor};
pub use presentation::{Alert, ClockStyle, Outcome};
pub use storage::Config;
pub use time::{TimeOfDay, DEFAULT_WAKE_UP};
