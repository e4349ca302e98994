//! What the shell shows: a bedtime headline or an error alert.

use serde::{Deserialize, Serialize};

use crate::calculator::Bedtime;
use crate::error::CalculationError;
use crate::time::TimeOfDay;

pub const ALERT_TITLE: &str = "Error";
pub const ALERT_MESSAGE: &str = "Sorry, there was a problem calculating your bedtime";

/// Clock format for rendered times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockStyle {
    /// `11:30 PM`
    #[default]
    TwelveHour,
    /// `23:30`
    TwentyFourHour,
}

impl ClockStyle {
    pub fn format(&self, time: TimeOfDay) -> String {
        match self {
            ClockStyle::TwelveHour => time.format("%-I:%M %p"),
            ClockStyle::TwentyFourHour => time.format("%H:%M"),
        }
    }
}

impl std::str::FromStr for ClockStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "12h" | "twelve_hour" => Ok(ClockStyle::TwelveHour),
            "24h" | "twenty_four_hour" => Ok(ClockStyle::TwentyFourHour),
            other => Err(format!("unknown clock style: {other}")),
        }
    }
}

/// Generic error alert. Every failure cause renders the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            title: ALERT_TITLE.to_string(),
            message: ALERT_MESSAGE.to_string(),
        }
    }
}

/// Result of one recompute, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Bedtime { text: String, bedtime: Bedtime },
    Alert(Alert),
}

impl Outcome {
    pub fn from_result(result: Result<Bedtime, CalculationError>, style: ClockStyle) -> Self {
        match result {
            Ok(bedtime) => Outcome::Bedtime {
                text: style.format(bedtime.time),
                bedtime,
            },
            Err(_) => Outcome::Alert(Alert::default()),
        }
    }

    pub fn is_alert(&self) -> bool {
        matches!(self, Outcome::Alert(_))
    }

    pub fn bedtime(&self) -> Option<&Bedtime> {
        match self {
            Outcome::Bedtime { bedtime, .. } => Some(bedtime),
            Outcome::Alert(_) => None,
        }
    }

    /// One-line rendering: `Ideal Bedtime:  11:30 PM`, or `Error: ...`.
    pub fn headline(&self) -> String {
        match self {
            Outcome::Bedtime { text, .. } => format!("Ideal Bedtime:  {text}"),
            Outcome::Alert(alert) => format!("{}: {}", alert.title, alert.message),
        }
    }
}
