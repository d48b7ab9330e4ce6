//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 0–6 starting at Monday, the order recurrence rules
/// store weekdays in.  Legacy calendar fields count differently (Sunday = 1
/// … Saturday = 7); [`Weekday::from_number`] and [`Weekday::number`] convert
/// to and from that convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (index 0).
    Monday = 0,
    /// Tuesday (index 1).
    Tuesday = 1,
    /// Wednesday (index 2).
    Wednesday = 2,
    /// Thursday (index 3).
    Thursday = 3,
    /// Friday (index 4).
    Friday = 4,
    /// Saturday (index 5).
    Saturday = 5,
    /// Sunday (index 6).
    Sunday = 6,
}

impl Weekday {
    /// Construct from the Monday-first index (0 = Monday … 6 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_index(i: u8) -> Option<Self> {
        match i {
            0 => Some(Weekday::Monday),
            1 => Some(Weekday::Tuesday),
            2 => Some(Weekday::Wednesday),
            3 => Some(Weekday::Thursday),
            4 => Some(Weekday::Friday),
            5 => Some(Weekday::Saturday),
            6 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the Monday-first index (0 = Monday … 6 = Sunday).
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Construct from the calendar-field number (1 = Sunday … 7 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Sunday),
            2 => Some(Weekday::Monday),
            3 => Some(Weekday::Tuesday),
            4 => Some(Weekday::Wednesday),
            5 => Some(Weekday::Thursday),
            6 => Some(Weekday::Friday),
            7 => Some(Weekday::Saturday),
            _ => None,
        }
    }

    /// Return the calendar-field number (1 = Sunday … 7 = Saturday).
    pub fn number(&self) -> u8 {
        // Sunday (index 6) wraps to 1; every other day shifts up by two.
        (*self as u8 + 1) % 7 + 1
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}
