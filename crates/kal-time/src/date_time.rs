//! `DateTime` — a calendar date with an optional time of day.

use crate::date::Date;
use crate::time_of_day::TimeOfDay;

/// A point on the calendar: a [`Date`], optionally refined to a clock time.
///
/// Date-only values sort and measure as midnight, and before any timed
/// value on the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DateTime {
    date: Date,
    time: Option<TimeOfDay>,
}

impl DateTime {
    /// A date-only value (no clock time).
    pub fn new(date: Date) -> Self {
        DateTime { date, time: None }
    }

    /// A date with a clock time.
    pub fn at(date: Date, time: TimeOfDay) -> Self {
        DateTime {
            date,
            time: Some(time),
        }
    }

    /// Return the calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Return the clock time, if one is set.
    pub fn time(&self) -> Option<TimeOfDay> {
        self.time
    }

    /// Return `true` if a clock time is set.
    pub fn has_time(&self) -> bool {
        self.time.is_some()
    }

    /// Return `true` if both values fall on the same calendar day.
    pub fn same_day(&self, other: DateTime) -> bool {
        self.date == other.date
    }

    /// Signed minutes from `other` to `self` (positive when `self` is
    /// later).  A missing clock time counts as midnight.
    pub fn minutes_since(&self, other: DateTime) -> i64 {
        let day_minutes = |dt: DateTime| {
            i64::from(dt.date.serial()) * 24 * 60
                + dt.time.map_or(0, |t| i64::from(t.minutes_from_midnight()))
        };
        day_minutes(*self) - day_minutes(other)
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.time {
            Some(t) => write!(f, "{} {t}", self.date),
            None => write!(f, "{}", self.date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn time(h: u8, min: u8) -> TimeOfDay {
        TimeOfDay::new(h, min).unwrap()
    }

    #[test]
    fn test_ordering() {
        let day = date(2024, 6, 7);
        let date_only = DateTime::new(day);
        let morning = DateTime::at(day, time(9, 0));
        let evening = DateTime::at(day, time(18, 30));
        // Date-only sorts before any timed value on the same day.
        assert!(date_only < morning);
        assert!(morning < evening);
        assert!(evening < DateTime::new(day + 1));
    }

    #[test]
    fn test_minutes_since() {
        let a = DateTime::at(date(2024, 6, 14), time(9, 0));
        let b = DateTime::at(date(2024, 6, 15), time(10, 0));
        assert_eq!(b.minutes_since(a), 25 * 60);
        assert_eq!(a.minutes_since(b), -25 * 60);
        // Date-only anchors at midnight.
        let midnight = DateTime::new(date(2024, 6, 15));
        assert_eq!(midnight.minutes_since(a), 15 * 60);
    }

    #[test]
    fn test_same_day() {
        let day = date(2024, 6, 7);
        assert!(DateTime::new(day).same_day(DateTime::at(day, time(23, 59))));
        assert!(!DateTime::new(day).same_day(DateTime::new(day + 1)));
    }
}
