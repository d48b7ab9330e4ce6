//! `Frequency` — how an event recurs.
//!
//! Five mutually exclusive rule families.  [`Frequency::Once`] and a
//! [`Frequency::ByDate`] with no flag set describe the same thing (a single
//! occurrence) and encode identically; they are kept distinct so that a
//! decoded legacy value survives a round trip unchanged.

use kal_core::errors::{Error, Result};
use kal_time::{TimeUnit, Weekday};

/// An event's recurrence rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Frequency {
    /// A single occurrence on the anchor date.
    Once,

    /// Recurs whenever the calendar fields shared with the anchor line up.
    ///
    /// Each flag releases one constraint: `yearly` drops the year, `monthly`
    /// drops the month, and `weekly` trades the day-of-month for the
    /// anchor's weekday.  With no flag set the rule degenerates to a single
    /// occurrence.
    ByDate {
        /// Recur on the anchor's weekday instead of its day-of-month.
        weekly: bool,
        /// Recur regardless of month.
        monthly: bool,
        /// Recur regardless of year.
        yearly: bool,
    },

    /// Recurs on the n-th (or last) given weekday of every month.
    ByWeekday {
        /// The weekday to recur on.
        weekday: Weekday,
        /// Which occurrence within the month: 1–5, or 0 for the last.
        index: u8,
    },

    /// Recurs every `count` units from the anchor, in both directions.
    ByInterval {
        /// Number of units between occurrences (1–1024).
        count: u16,
        /// The unit the interval is measured in.
        unit: TimeUnit,
    },

    /// Recurs monthly at the anchor's distance from the end of the month.
    ByEndOfMonth,
}

impl Frequency {
    /// Largest accepted interval count.
    pub const MAX_INTERVAL_COUNT: u16 = 1024;

    /// Largest weekday-in-month index (0 means "last").
    pub const MAX_WEEKDAY_INDEX: u8 = 5;

    /// A date-field rule; all flags cleared yields a single occurrence.
    pub fn by_date(weekly: bool, monthly: bool, yearly: bool) -> Self {
        Frequency::ByDate {
            weekly,
            monthly,
            yearly,
        }
    }

    /// An n-th-weekday-of-the-month rule (`index` 0 means the last one).
    pub fn by_weekday(weekday: Weekday, index: u8) -> Result<Self> {
        if index > Self::MAX_WEEKDAY_INDEX {
            return Err(Error::Frequency(format!(
                "weekday index {index} out of range [0, {}]",
                Self::MAX_WEEKDAY_INDEX
            )));
        }
        Ok(Frequency::ByWeekday { weekday, index })
    }

    /// An every-`count`-units rule.
    pub fn by_interval(count: u16, unit: TimeUnit) -> Result<Self> {
        if count == 0 || count > Self::MAX_INTERVAL_COUNT {
            return Err(Error::Frequency(format!(
                "interval count {count} out of range [1, {}]",
                Self::MAX_INTERVAL_COUNT
            )));
        }
        Ok(Frequency::ByInterval { count, unit })
    }

    /// `true` for `Once` and every `ByDate` rule.
    pub fn is_by_date(&self) -> bool {
        matches!(self, Frequency::Once | Frequency::ByDate { .. })
    }

    /// `true` for an n-th-weekday rule.
    pub fn is_by_weekday(&self) -> bool {
        matches!(self, Frequency::ByWeekday { .. })
    }

    /// `true` for an interval rule.
    pub fn is_by_interval(&self) -> bool {
        matches!(self, Frequency::ByInterval { .. })
    }

    /// `true` for an end-of-month rule.
    pub fn is_by_end_of_month(&self) -> bool {
        matches!(self, Frequency::ByEndOfMonth)
    }

    /// `true` when the rule never repeats: `Once`, or `ByDate` with no
    /// flag set.
    pub fn is_single(&self) -> bool {
        matches!(
            self,
            Frequency::Once
                | Frequency::ByDate {
                    weekly: false,
                    monthly: false,
                    yearly: false,
                }
        )
    }

    /// The `weekly` flag; `false` for anything but `ByDate`.
    pub fn weekly(&self) -> bool {
        matches!(self, Frequency::ByDate { weekly: true, .. })
    }

    /// The `monthly` flag; `false` for anything but `ByDate`.
    pub fn monthly(&self) -> bool {
        matches!(self, Frequency::ByDate { monthly: true, .. })
    }

    /// The `yearly` flag; `false` for anything but `ByDate`.
    pub fn yearly(&self) -> bool {
        matches!(self, Frequency::ByDate { yearly: true, .. })
    }

    /// The weekday rule payload, if this is a `ByWeekday` rule.
    pub fn weekday_rule(&self) -> Option<(Weekday, u8)> {
        match self {
            Frequency::ByWeekday { weekday, index } => Some((*weekday, *index)),
            _ => None,
        }
    }

    /// The interval payload, if this is a `ByInterval` rule.
    pub fn interval(&self) -> Option<(u16, TimeUnit)> {
        match self {
            Frequency::ByInterval { count, unit } => Some((*count, *unit)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Frequency::Once => write!(f, "once"),
            Frequency::ByDate {
                weekly,
                monthly,
                yearly,
            } => {
                let mut flags = Vec::new();
                if *weekly {
                    flags.push("weekly");
                }
                if *monthly {
                    flags.push("monthly");
                }
                if *yearly {
                    flags.push("yearly");
                }
                if flags.is_empty() {
                    write!(f, "once")
                } else {
                    write!(f, "by date ({})", flags.join("+"))
                }
            }
            Frequency::ByWeekday { weekday, index } => match index {
                0 => write!(f, "last {weekday} of the month"),
                1 => write!(f, "1st {weekday} of the month"),
                2 => write!(f, "2nd {weekday} of the month"),
                3 => write!(f, "3rd {weekday} of the month"),
                n => write!(f, "{n}th {weekday} of the month"),
            },
            Frequency::ByInterval { count, unit } => write!(f, "every {count} {unit}"),
            Frequency::ByEndOfMonth => write!(f, "fixed distance from month end"),
        }
    }
}
