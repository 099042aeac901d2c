use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;

use super::AppError;

/// A fixed wall-clock `(hour, minute)` at which a cycle fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "String")]
pub struct TriggerPoint {
    hour: u32,
    minute: u32,
}

impl TriggerPoint {
    pub fn new(hour: u32, minute: u32) -> Result<Self, AppError> {
        if hour > 23 || minute > 59 {
            return Err(AppError::InvalidTriggerTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    /// True when `at` falls inside this trigger's minute.
    pub fn matches(&self, at: &NaiveDateTime) -> bool {
        at.hour() == self.hour && at.minute() == self.minute
    }
}

impl FromStr for TriggerPoint {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidTriggerTime(s.to_string());
        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        Self::new(hour, minute).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TriggerPoint {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TriggerPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Default trigger points: 09:00 and 21:00 local time.
pub fn default_trigger_points() -> Vec<TriggerPoint> {
    vec![TriggerPoint { hour: 9, minute: 0 }, TriggerPoint { hour: 21, minute: 0 }]
}

/// Return the first trigger point matching `now`, if any.
pub fn due_trigger(triggers: &[TriggerPoint], now: &NaiveDateTime) -> Option<TriggerPoint> {
    triggers.iter().copied().find(|trigger| trigger.matches(now))
}
