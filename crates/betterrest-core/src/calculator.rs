//! Bedtime calculator.
//!
//! `bedtime = wake_up - predicted_actual_sleep`, wrapped across midnight.
//! The predictor is injected; the calculation itself is a pure function of
//! its inputs and the predictor's answer.

use serde::Serialize;

use crate::error::{CalculationError, PredictionError};
use crate::inputs::{CoffeeAmount, SleepAmount, SleepInputs};
use crate::predictor::Predictor;
use crate::time::TimeOfDay;

/// Predictions at or beyond a full day cannot be placed on a clock.
const MAX_PREDICTED_HOURS: f64 = 24.0;

/// A recommended bedtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bedtime {
    pub time: TimeOfDay,
    /// True when going to bed at `time` means the day before waking.
    pub previous_day: bool,
    /// Actual sleep the predictor expects, in hours.
    pub predicted_sleep_hours: f64,
}

/// Computes bedtimes with an injected [`Predictor`].
#[derive(Debug, Clone)]
pub struct BedtimeCalculator<P> {
    predictor: P,
}

impl<P: Predictor> BedtimeCalculator<P> {
    pub fn new(predictor: P) -> Self {
        Self { predictor }
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }

    /// Derive the ideal bedtime.
    ///
    /// Fails with [`CalculationError::PredictionFailed`] if the predictor
    /// errors or returns a value that is not a finite duration in `[0, 24)`
    /// hours. No partial result is ever returned.
    pub fn calculate(
        &self,
        wake_up: TimeOfDay,
        sleep_amount: SleepAmount,
        coffee_amount: CoffeeAmount,
    ) -> Result<Bedtime, CalculationError> {
        let wake_seconds = wake_up.seconds_since_midnight();

        let predicted = self
            .predictor
            .estimate_sleep(
                f64::from(wake_seconds),
                sleep_amount.value(),
                f64::from(coffee_amount.value()),
            )
            .and_then(check_prediction)
            .map_err(|e| {
                tracing::warn!(
                    predictor = self.predictor.name(),
                    error = %e,
                    "bedtime calculation failed"
                );
                CalculationError::PredictionFailed(e)
            })?;

        let (time, days_back) = wake_up.minus_hours(predicted);
        tracing::debug!(
            predictor = self.predictor.name(),
            wake_up = %wake_up,
            desired = sleep_amount.value(),
            coffee = coffee_amount.value(),
            predicted,
            bedtime = %time,
            "calculated bedtime"
        );

        Ok(Bedtime {
            time,
            previous_day: days_back > 0,
            predicted_sleep_hours: predicted,
        })
    }

    /// [`Self::calculate`] over a bundled set of inputs.
    pub fn calculate_inputs(&self, inputs: &SleepInputs) -> Result<Bedtime, CalculationError> {
        self.calculate(inputs.wake_up, inputs.sleep_amount, inputs.coffee_amount)
    }
}

fn check_prediction(hours: f64) -> Result<f64, PredictionError> {
    if !hours.is_finite() {
        return Err(PredictionError::Malformed(format!(
            "expected a finite number of hours, got {hours}"
        )));
    }
    if !(0.0..MAX_PREDICTED_HOURS).contains(&hours) {
        return Err(PredictionError::Malformed(format!(
            "predicted sleep of {hours} hours is out of range"
        )));
    }
    Ok(hours)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predictor::{from_fn, LinearModel};

    fn t(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    fn sleep(h: f64) -> SleepAmount {
        SleepAmount::new(h).unwrap()
    }

    fn cups(n: u32) -> CoffeeAmount {
        CoffeeAmount::new(n).unwrap()
    }

    #[test]
    fn seven_am_with_seven_and_a_half_hours() {
        let calc = BedtimeCalculator::new(from_fn(|_, _, _| Ok(7.5)));
        let bed = calc.calculate(t(7, 0), sleep(8.0), cups(1)).unwrap();
        assert_eq!(bed.time, t(23, 30));
        assert!(bed.previous_day);
        assert_eq!(bed.predicted_sleep_hours, 7.5);
    }

    #[test]
    fn six_am_with_nine_hours_wraps_midnight() {
        let calc = BedtimeCalculator::new(from_fn(|_, _, _| Ok(9.0)));
        let bed = calc.calculate(t(6, 0), sleep(8.0), cups(2)).unwrap();
        assert_eq!(bed.time, t(21, 0));
        assert!(bed.previous_day);
    }

    #[test]
    fn same_day_bedtime() {
        let calc = BedtimeCalculator::new(from_fn(|_, _, _| Ok(6.0)));
        let bed = calc.calculate(t(14, 0), sleep(6.0), cups(1)).unwrap();
        assert_eq!(bed.time, t(8, 0));
        assert!(!bed.previous_day);
    }

    #[test]
    fn predictor_receives_raw_features() {
        let calc = BedtimeCalculator::new(from_fn(|wake, desired, coffee| {
            assert_eq!(wake, 6.0 * 3600.0 + 30.0 * 60.0);
            assert_eq!(desired, 7.25);
            assert_eq!(coffee, 3.0);
            Ok(desired)
        }));
        calc.calculate(t(6, 30), sleep(7.25), cups(3)).unwrap();
    }

    #[test]
    fn predictor_failure_is_prediction_failed() {
        let calc = BedtimeCalculator::new(from_fn(|_, _, _| {
            Err(PredictionError::Unavailable("no model".into()))
        }));
        let err = calc.calculate(t(7, 0), sleep(8.0), cups(1)).unwrap_err();
        assert!(matches!(
            err,
            CalculationError::PredictionFailed(PredictionError::Unavailable(_))
        ));
    }

    #[test]
    fn unusable_predictions_are_rejected() {
        for bad in [f64::NAN, f64::INFINITY, -0.5, 24.0, 100.0] {
            let calc = BedtimeCalculator::new(from_fn(move |_, _, _| Ok(bad)));
            let err = calc.calculate(t(7, 0), sleep(8.0), cups(1)).unwrap_err();
            assert!(
                matches!(
                    err,
                    CalculationError::PredictionFailed(PredictionError::Malformed(_))
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn sleep_range_edges_do_not_error() {
        let calc = BedtimeCalculator::new(LinearModel::default());
        assert!(calc.calculate(t(7, 0), sleep(SleepAmount::MIN), cups(1)).is_ok());
        assert!(calc.calculate(t(7, 0), sleep(SleepAmount::MAX), cups(20)).is_ok());
    }

    #[test]
    fn calculate_inputs_matches_calculate() {
        let calc = BedtimeCalculator::new(LinearModel::default());
        let inputs = SleepInputs::default();
        assert_eq!(
            calc.calculate_inputs(&inputs).unwrap(),
            calc.calculate(inputs.wake_up, inputs.sleep_amount, inputs.coffee_amount)
                .unwrap()
        );
    }

    #[test]
    fn boxed_predictor_works() {
        let boxed: Box<dyn Predictor> = Box::new(LinearModel::default());
        let calc = BedtimeCalculator::new(boxed);
        assert!(calc.calculate_inputs(&SleepInputs::default()).is_ok());
        assert_eq!(calc.predictor().name(), "linear");
    }
}
