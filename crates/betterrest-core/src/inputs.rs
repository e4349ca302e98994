//! Bounded input values.
//!
//! [`SleepAmount`] and [`CoffeeAmount`] mirror stepper controls: the step
//! operations saturate at the range edges, and only raw text going through
//! `new` can be rejected.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time::{TimeOfDay, DEFAULT_WAKE_UP};

/// Desired hours of sleep, in [4, 12] on a quarter-hour grid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SleepAmount(f64);

impl SleepAmount {
    pub const MIN: f64 = 4.0;
    pub const MAX: f64 = 12.0;
    pub const STEP: f64 = 0.25;
    pub const DEFAULT: SleepAmount = SleepAmount(8.0);

    pub fn new(hours: f64) -> Result<Self, ValidationError> {
        if !hours.is_finite() || !(Self::MIN..=Self::MAX).contains(&hours) {
            return Err(ValidationError::OutOfRange {
                field: "sleep amount",
                min: format_hours(Self::MIN),
                max: format_hours(Self::MAX),
                value: hours.to_string(),
            });
        }
        if (hours / Self::STEP).fract() != 0.0 {
            return Err(ValidationError::OffStep {
                field: "sleep amount",
                step: format_hours(Self::STEP),
                value: hours.to_string(),
            });
        }
        Ok(Self(hours))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Step up by a quarter hour, stopping at 12.
    pub fn increment(&mut self) {
        self.0 = (self.0 + Self::STEP).min(Self::MAX);
    }

    /// Step down by a quarter hour, stopping at 4.
    pub fn decrement(&mut self) {
        self.0 = (self.0 - Self::STEP).max(Self::MIN);
    }

    /// Stepper label, e.g. `"8 hours"` or `"8.25 hours"`.
    pub fn label(&self) -> String {
        format!("{} hours", format_hours(self.0))
    }
}

impl Default for SleepAmount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for SleepAmount {
    type Error = ValidationError;

    fn try_from(hours: f64) -> Result<Self, Self::Error> {
        Self::new(hours)
    }
}

impl From<SleepAmount> for f64 {
    fn from(s: SleepAmount) -> f64 {
        s.0
    }
}

/// Daily coffee intake in cups, 1 to 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CoffeeAmount(u32);

impl CoffeeAmount {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 20;
    pub const DEFAULT: CoffeeAmount = CoffeeAmount(1);

    pub fn new(cups: u32) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&cups) {
            return Err(ValidationError::OutOfRange {
                field: "coffee amount",
                min: Self::MIN.to_string(),
                max: Self::MAX.to_string(),
                value: cups.to_string(),
            });
        }
        Ok(Self(cups))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn increment(&mut self) {
        self.0 = (self.0 + 1).min(Self::MAX);
    }

    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(Self::MIN);
    }

    /// `"1 cup"` or `"N cups"`.
    pub fn label(&self) -> String {
        if self.0 == 1 {
            "1 cup".to_string()
        } else {
            format!("{} cups", self.0)
        }
    }
}

impl Default for CoffeeAmount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u32> for CoffeeAmount {
    type Error = ValidationError;

    fn try_from(cups: u32) -> Result<Self, Self::Error> {
        Self::new(cups)
    }
}

impl From<CoffeeAmount> for u32 {
    fn from(c: CoffeeAmount) -> u32 {
        c.0
    }
}

/// The three values a bedtime is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepInputs {
    pub wake_up: TimeOfDay,
    pub sleep_amount: SleepAmount,
    pub coffee_amount: CoffeeAmount,
}

impl SleepInputs {
    pub const DEFAULT: SleepInputs = SleepInputs {
        wake_up: DEFAULT_WAKE_UP,
        sleep_amount: SleepAmount::DEFAULT,
        coffee_amount: CoffeeAmount::DEFAULT,
    };
}

impl Default for SleepInputs {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Shortest decimal form of an hour count: `8`, `8.25`, `0.5`.
pub fn format_hours(hours: f64) -> String {
    let s = format!("{hours:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sleep_amount_accepts_range_edges() {
        assert_eq!(SleepAmount::new(4.0).unwrap().value(), 4.0);
        assert_eq!(SleepAmount::new(12.0).unwrap().value(), 12.0);
        assert_eq!(SleepAmount::new(7.75).unwrap().value(), 7.75);
    }

    #[test]
    fn sleep_amount_rejects_out_of_range_and_off_step() {
        assert!(matches!(
            SleepAmount::new(3.75),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            SleepAmount::new(12.25),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            SleepAmount::new(f64::NAN),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            SleepAmount::new(8.1),
            Err(ValidationError::OffStep { .. })
        ));
    }

    #[test]
    fn sleep_stepper_saturates() {
        let mut s = SleepAmount::new(11.75).unwrap();
        s.increment();
        assert_eq!(s.value(), 12.0);
        s.increment();
        assert_eq!(s.value(), 12.0);

        let mut s = SleepAmount::new(4.25).unwrap();
        s.decrement();
        s.decrement();
        assert_eq!(s.value(), 4.0);
    }

    #[test]
    fn coffee_stepper_saturates() {
        let mut c = CoffeeAmount::new(1).unwrap();
        c.decrement();
        assert_eq!(c.value(), 1);

        let mut c = CoffeeAmount::new(20).unwrap();
        c.increment();
        assert_eq!(c.value(), 20);
    }

    #[test]
    fn coffee_rejects_zero_and_too_many() {
        assert!(CoffeeAmount::new(0).is_err());
        assert!(CoffeeAmount::new(21).is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(SleepAmount::default().label(), "8 hours");
        assert_eq!(SleepAmount::new(8.25).unwrap().label(), "8.25 hours");
        assert_eq!(SleepAmount::new(6.5).unwrap().label(), "6.5 hours");
        assert_eq!(CoffeeAmount::default().label(), "1 cup");
        assert_eq!(CoffeeAmount::new(3).unwrap().label(), "3 cups");
    }

    #[test]
    fn defaults_match_form_defaults() {
        let inputs = SleepInputs::default();
        assert_eq!(inputs.wake_up, TimeOfDay::new(7, 0).unwrap());
        assert_eq!(inputs.sleep_amount.value(), 8.0);
        assert_eq!(inputs.coffee_amount.value(), 1);
    }

    #[test]
    fn deserialize_validates() {
        let ok: SleepInputs = serde_json::from_str(
            r#"{"wake_up":"06:30","sleep_amount":7.5,"coffee_amount":2}"#,
        )
        .unwrap();
        assert_eq!(ok.sleep_amount.value(), 7.5);

        let bad = serde_json::from_str::<SleepInputs>(
            r#"{"wake_up":"06:30","sleep_amount":2.0,"coffee_amount":2}"#,
        );
        assert!(bad.is_err());
    }
}
