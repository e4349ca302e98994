//! Form session.
//!
//! Holds the current inputs and recomputes the bedtime whenever the caller
//! changes one of them. Every mutator returns the fresh [`Outcome`]; there is
//! no observer machinery and no cached result.

use crate::calculator::BedtimeCalculator;
use crate::inputs::{CoffeeAmount, SleepAmount, SleepInputs};
use crate::predictor::Predictor;
use crate::presentation::{ClockStyle, Outcome};
use crate::time::TimeOfDay;

pub struct SleepForm<P> {
    calculator: BedtimeCalculator<P>,
    inputs: SleepInputs,
    style: ClockStyle,
}

impl<P: Predictor> SleepForm<P> {
    pub fn new(calculator: BedtimeCalculator<P>, defaults: SleepInputs) -> Self {
        Self {
            calculator,
            inputs: defaults,
            style: ClockStyle::default(),
        }
    }

    pub fn with_clock_style(mut self, style: ClockStyle) -> Self {
        self.style = style;
        self
    }

    pub fn inputs(&self) -> &SleepInputs {
        &self.inputs
    }

    /// First computation when the form is shown.
    pub fn appear(&self) -> Outcome {
        self.outcome()
    }

    /// Recompute from the current inputs.
    pub fn outcome(&self) -> Outcome {
        Outcome::from_result(self.calculator.calculate_inputs(&self.inputs), self.style)
    }

    pub fn set_wake_up(&mut self, wake_up: TimeOfDay) -> Outcome {
        self.inputs.wake_up = wake_up;
        self.outcome()
    }

    pub fn set_sleep_amount(&mut self, amount: SleepAmount) -> Outcome {
        self.inputs.sleep_amount = amount;
        self.outcome()
    }

    pub fn set_coffee_amount(&mut self, amount: CoffeeAmount) -> Outcome {
        self.inputs.coffee_amount = amount;
        self.outcome()
    }

    pub fn increment_sleep(&mut self) -> Outcome {
        self.inputs.sleep_amount.increment();
        self.outcome()
    }

    pub fn decrement_sleep(&mut self) -> Outcome {
        self.inputs.sleep_amount.decrement();
        self.outcome()
    }

    pub fn increment_coffee(&mut self) -> Outcome {
        self.inputs.coffee_amount.increment();
        self.outcome()
    }

    pub fn decrement_coffee(&mut self) -> Outcome {
        self.inputs.coffee_amount.decrement();
        self.outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PredictionError;
    use crate::predictor::from_fn;
    use std::cell::Cell;

    #[test]
    fn appear_uses_explicit_defaults() {
        let form = SleepForm::new(
            BedtimeCalculator::new(from_fn(|_, desired, _| Ok(desired))),
            SleepInputs::default(),
        );
        let outcome = form.appear();
        assert_eq!(outcome.headline(), "Ideal Bedtime:  11:00 PM");
    }

    #[test]
    fn every_mutation_recomputes() {
        let calls = Cell::new(0);
        let mut form = SleepForm::new(
            BedtimeCalculator::new(from_fn(|_, desired, coffee| {
                calls.set(calls.get() + 1);
                Ok(desired - coffee * 0.25)
            })),
            SleepInputs::default(),
        )
        .with_clock_style(ClockStyle::TwentyFourHour);

        form.appear();
        form.set_wake_up(TimeOfDay::new(6, 0).unwrap());
        let outcome = form.increment_sleep();
        assert_eq!(outcome.headline(), "Ideal Bedtime:  22:00");
        let outcome = form.increment_coffee();
        assert_eq!(outcome.headline(), "Ideal Bedtime:  22:15");
        form.decrement_coffee();
        form.decrement_sleep();
        form.set_sleep_amount(SleepAmount::new(10.0).unwrap());
        form.set_coffee_amount(CoffeeAmount::new(4).unwrap());

        assert_eq!(calls.get(), 8);
        assert_eq!(form.inputs().sleep_amount.value(), 10.0);
        assert_eq!(form.inputs().coffee_amount.value(), 4);
    }

    #[test]
    fn failure_replaces_previous_bedtime() {
        let fail = Cell::new(false);
        let mut form = SleepForm::new(
            BedtimeCalculator::new(from_fn(|_, desired, _| {
                if fail.get() {
                    Err(PredictionError::Failed("boom".into()))
                } else {
                    Ok(desired)
                }
            })),
            SleepInputs::default(),
        );

        assert!(!form.appear().is_alert());
        fail.set(true);
        let outcome = form.increment_coffee();
        assert!(outcome.is_alert());
        assert!(outcome.bedtime().is_none());
    }
}
