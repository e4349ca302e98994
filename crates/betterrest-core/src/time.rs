//! Time-of-day values.
//!
//! A [`TimeOfDay`] has no date attached. Subtracting a duration wraps across
//! midnight and reports how many days back the result lands.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

const SECONDS_PER_DAY: i64 = 86_400;

/// Default wake-up time, 07:00.
pub const DEFAULT_WAKE_UP: TimeOfDay = TimeOfDay::from_hms_const(7, 0, 0);

/// A wall-clock time without a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    const fn from_hms_const(hour: u32, minute: u32, second: u32) -> Self {
        match NaiveTime::from_hms_opt(hour, minute, second) {
            Some(t) => Self(t),
            None => panic!("invalid constant time"),
        }
    }

    /// Create a time from hour (0-23) and minute (0-59).
    pub fn new(hour: u32, minute: u32) -> Result<Self, ValidationError> {
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTime(format!("{hour}:{minute:02}")))
    }

    /// Parse `HH:MM` (or `H:MM`).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        let invalid = || ValidationError::InvalidTime(s.to_string());

        let (h, m) = s.split_once(':').ok_or_else(invalid)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if h.is_empty() || h.len() > 2 || m.len() != 2 || !digits(h) || !digits(m) {
            return Err(invalid());
        }
        let hour: u32 = h.parse().map_err(|_| invalid())?;
        let minute: u32 = m.parse().map_err(|_| invalid())?;
        NaiveTime::from_hms_opt(hour, minute, 0)
            .map(Self)
            .ok_or_else(invalid)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Seconds elapsed since 00:00 on the same day.
    pub fn seconds_since_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Subtract `hours` (rounded to the nearest second), wrapping across
    /// midnight. Returns the new time and the number of midnights crossed.
    ///
    /// `hours` must be finite and non-negative; callers validate that first.
    pub fn minus_hours(&self, hours: f64) -> (TimeOfDay, u32) {
        let delta = (hours * 3600.0).round() as i64;
        let raw = i64::from(self.seconds_since_midnight()) - delta;

        let secs = raw.rem_euclid(SECONDS_PER_DAY);
        let days_back = (-raw.div_euclid(SECONDS_PER_DAY)).max(0);

        // rem_euclid keeps secs in 0..86_400
        let time = NaiveTime::from_num_seconds_from_midnight_opt(secs as u32, 0)
            .unwrap_or_default();
        (Self(time), days_back as u32)
    }

    /// Format with a chrono strftime pattern.
    pub fn format(&self, pattern: &str) -> String {
        self.0.format(pattern).to_string()
    }

    pub fn as_naive(&self) -> NaiveTime {
        self.0
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        DEFAULT_WAKE_UP
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self(t)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::new(h, m).unwrap()
    }

    #[test]
    fn default_is_seven_am() {
        assert_eq!(TimeOfDay::default(), t(7, 0));
        assert_eq!(DEFAULT_WAKE_UP.seconds_since_midnight(), 25_200);
    }

    #[test]
    fn parse_accepts_short_hour() {
        assert_eq!(TimeOfDay::parse("6:05").unwrap(), t(6, 5));
        assert_eq!(" 23:59 ".parse::<TimeOfDay>().unwrap(), t(23, 59));
    }

    #[test]
    fn parse_rejects_garbage() {
        let bad_inputs = [
            "", "7", "24:00", "07:60", "7:5", "ab:cd", "123:00", "7:+5", "+7:05", "-1:00", "7: 5",
        ];
        for bad in bad_inputs {
            assert!(TimeOfDay::parse(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn minus_hours_same_day() {
        assert_eq!(t(23, 0).minus_hours(1.5), (t(21, 30), 0));
    }

    #[test]
    fn minus_hours_wraps_to_previous_day() {
        assert_eq!(t(7, 0).minus_hours(7.5), (t(23, 30), 1));
        assert_eq!(t(0, 0).minus_hours(0.25), (t(23, 45), 1));
    }

    #[test]
    fn minus_zero_hours_is_identity() {
        assert_eq!(t(12, 34).minus_hours(0.0), (t(12, 34), 0));
    }

    #[test]
    fn minus_full_day_counts_one_midnight() {
        assert_eq!(t(7, 0).minus_hours(24.0), (t(7, 0), 1));
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(t(6, 5).to_string(), "06:05");
    }

    #[test]
    fn serde_uses_hh_mm_text() {
        let json = serde_json::to_string(&t(21, 0)).unwrap();
        assert_eq!(json, "\"21:00\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t(21, 0));
    }
}
