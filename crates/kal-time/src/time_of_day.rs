//! `TimeOfDay` — wall-clock time at minute resolution.

use kal_core::errors::{Error, Result};

/// A wall-clock time of day (hour and minute, no seconds).
///
/// Events either carry one of these or are date-only; there is no partial
/// state in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time of day from hour (0–23) and minute (0–59).
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::Time(format!("hour {hour} out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(Error::Time(format!("minute {minute} out of range [0, 59]")));
        }
        Ok(TimeOfDay { hour, minute })
    }

    /// Return the hour (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Return the minute (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight (0–1439).
    pub fn minutes_from_midnight(&self) -> u16 {
        u16::from(self.hour) * 60 + u16::from(self.minute)
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
