//! # kal-time
//!
//! Calendar-date values and arithmetic for kalender.
//!
//! The central type is [`Date`], a serial-number date with the field
//! semantics calendar recurrence rules are written against: Monday-first
//! weekday indexes, ISO week numbers, the position of a date's weekday
//! within its month, and the distance to the end of the month.  [`DateTime`]
//! pairs a date with an optional [`TimeOfDay`] for events that start at a
//! specific clock time.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Serial-number calendar date.
pub mod date;

/// Date plus optional time-of-day.
pub mod date_time;

/// Month-of-year enum.
pub mod month;

/// Wall-clock time of day (minute resolution).
pub mod time_of_day;

/// Units for date arithmetic.
pub mod time_unit;

/// Day-of-week enum.
pub mod weekday;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use date::Date;
pub use date_time::DateTime;
pub use month::Month;
pub use time_of_day::TimeOfDay;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
