//! `Date` type.
//!
//! Dates are stored as a serial number of days since **January 1, 1970**
//! (serial 0); earlier dates have negative serials.  The supported range is
//! 1583-01-01 to 2999-12-31, the Gregorian calendar applied proleptically
//! from its first full year.
//!
//! Beyond plain year/month/day access, `Date` answers the questions
//! recurrence rules ask: the Monday-first weekday index, which occurrence of
//! its weekday a date is within its month (with "last" folded to 0), the
//! distance to the end of the month, and the ISO week number.

use crate::month::Month;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use kal_core::errors::{Error, Result};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Earliest supported date: January 1, 1583.
    pub const MIN: Date = Date(-141_349);

    /// Latest supported date: December 31, 2999.
    pub const MAX: Date = Date(376_199);

    /// Earliest supported year.
    pub const MIN_YEAR: i32 = 1583;

    /// Latest supported year.
    pub const MAX_YEAR: i32 = 2999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number (days since 1970-01-01; negative
    /// for earlier dates).
    ///
    /// Returns an error if the serial falls outside the supported range.
    pub fn from_serial(serial: i32) -> Result<Self> {
        let d = Date(serial);
        if d < Self::MIN || d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} out of range")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    ///
    /// Explicit fields are validated, never normalised: a day past the end
    /// of its month is rejected rather than rolled over.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO-8601 calendar date (`YYYY-MM-DD`).
    pub fn from_iso(s: &str) -> Result<Self> {
        let malformed = || Error::Date(format!("malformed ISO date {s:?}"));
        let mut parts = s.splitn(3, '-');
        let (Some(y), Some(m), Some(d)) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let year: i32 = y.parse().map_err(|_| malformed())?;
        let month: u8 = m.parse().map_err(|_| malformed())?;
        let day: u8 = d.parse().map_err(|_| malformed())?;
        Self::from_ymd(year, month, day)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number (days since 1970-01-01).
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1583–2999).
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        Month::from_number(ymd_from_serial(self.0).1).expect("decomposed month always in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = u16::from(d);
        for mon in 1..m {
            doy += u16::from(days_in_month(y, mon));
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // The epoch 1970-01-01 is a Thursday (index 3).
        let w = (self.0 + 3).rem_euclid(7) as u8;
        Weekday::from_index(w).expect("rem_euclid always in 0..=6")
    }

    /// Return the ISO-8601 week number (1–53).
    ///
    /// Weeks run Monday to Sunday and week 1 is the week containing
    /// January 4, so the first and last days of a year may belong to a week
    /// of the neighbouring year.
    pub fn week_of_year(&self) -> u8 {
        let iso_weekday = i32::from(self.weekday().index()) + 1; // 1 = Monday … 7 = Sunday
        let week = (10 + i32::from(self.day_of_year()) - iso_weekday) / 7;
        if week < 1 {
            weeks_in_year(self.year() - 1)
        } else if week > i32::from(weeks_in_year(self.year())) {
            1
        } else {
            week as u8
        }
    }

    /// Which occurrence of its weekday this date is within its month, with
    /// the last occurrence folded to 0.
    ///
    /// The first Wednesday of a month is 1, the third is 3, and whichever
    /// Wednesday is last (fourth or fifth) is 0; a date is "last" exactly
    /// when no same-weekday date follows it in the month.
    pub fn day_of_week_index_in_month(&self) -> u8 {
        let (year, month, day) = ymd_from_serial(self.0);
        if day + 7 > days_in_month(year, month) {
            0
        } else {
            (day - 1) / 7 + 1
        }
    }

    /// Number of days from this date to the last day of its month
    /// (0 for the last day itself).
    pub fn days_to_end_of_month(&self) -> u8 {
        let (year, month, day) = ymd_from_serial(self.0);
        days_in_month(year, month) - day
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative moves backwards).
    ///
    /// Returns an error if the result leaves the supported range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        Self::from_serial(self.0.saturating_add(n))
    }

    /// Advance by `n` calendar months, keeping the day-of-month.
    ///
    /// When the anchor day does not exist in the target month the result is
    /// normalised, rolling into the following month rather than clamping:
    /// January 31 plus one month is March 3 (March 2 in a leap year).
    pub fn add_months(self, n: i32) -> Result<Self> {
        let (year, month, day) = ymd_from_serial(self.0);
        let months = i64::from(year) * 12 + i64::from(month) - 1 + i64::from(n);
        let target_year = months.div_euclid(12);
        let target_month = months.rem_euclid(12) as u8 + 1;
        if target_year < i64::from(Self::MIN_YEAR) || target_year > i64::from(Self::MAX_YEAR) {
            return Err(Error::Date(format!("year {target_year} out of range")));
        }
        let first = serial_from_ymd(target_year as i32, target_month, 1);
        Self::from_serial(first + i32::from(day) - 1)
    }

    /// Advance by `n` calendar years; equivalent to `add_months(12 * n)`.
    pub fn add_years(self, n: i32) -> Result<Self> {
        self.add_months(n.saturating_mul(12))
    }

    /// Advance by a signed amount of the given unit.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n.saturating_mul(7)),
            TimeUnit::Months => self.add_months(n),
            TimeUnit::Years => self.add_years(n),
        }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self.days_to_end_of_month() == 0
    }

    /// The latest date on or before `self` falling on `weekday`.
    ///
    /// Moves back at most six days; errors only at the edge of the
    /// supported range.
    pub fn previous_or_same(self, weekday: Weekday) -> Result<Self> {
        let back =
            (i32::from(self.weekday().index()) - i32::from(weekday.index())).rem_euclid(7);
        self.add_days(-back)
    }

    /// The earliest date on or after `self` falling on `weekday`.
    ///
    /// Moves forward at most six days; errors only at the edge of the
    /// supported range.
    pub fn next_or_same(self, weekday: Weekday) -> Result<Self> {
        let forward =
            (i32::from(weekday.index()) - i32::from(self.weekday().index())).rem_euclid(7);
        self.add_days(forward)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

/// Difference in days; positive when `self` is the later date.
impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        let month = Month::from_number(m).expect("decomposed month always in 1..=12");
        write!(f, "{d} {month} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Serde (ISO-8601 strings) ──────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{ymd_from_serial, Date};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for Date {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let (y, m, d) = ymd_from_serial(self.serial());
            serializer.collect_str(&format_args!("{y:04}-{m:02}-{d:02}"))
        }
    }

    struct IsoVisitor;

    impl serde::de::Visitor<'_> for IsoVisitor {
        type Value = Date;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an ISO-8601 calendar date (YYYY-MM-DD)")
        }

        fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Date, E> {
            Date::from_iso(v).map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
            deserializer.deserialize_str(IsoVisitor)
        }
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year (Gregorian rule).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Number of ISO-8601 weeks in a year (52 or 53).
///
/// A year has 53 weeks exactly when it starts on a Thursday, or on a
/// Wednesday in a leap year.
pub fn weeks_in_year(year: i32) -> u8 {
    let jan1 = serial_from_ymd(year, 1, 1);
    let weekday = (jan1 + 3).rem_euclid(7); // 0 = Monday
    if weekday == 3 || (weekday == 2 && is_leap_year(year)) {
        53
    } else {
        52
    }
}

const EPOCH_YEAR: i32 = 1970;

/// Leap days in years strictly before `year`.
fn leap_days_before(year: i32) -> i32 {
    let y = year - 1;
    y / 4 - y / 100 + y / 400
}

/// Convert (year, month, day) to a serial number (1970-01-01 = 0).
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let mut serial =
        (year - EPOCH_YEAR) * 365 + leap_days_before(year) - leap_days_before(EPOCH_YEAR);
    serial += i32::from(MONTH_OFFSET[month as usize - 1]);
    if month > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + i32::from(day) - 1
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    // Estimate the year, then adjust until the serial falls inside it.
    let mut y = EPOCH_YEAR + serial / 365;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based day of year
    let mut m = 1u8;
    loop {
        let days = i32::from(days_in_month(y, m));
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
