//! `Reminder` — notification lead-time codes.
//!
//! Legacy calendar files store the reminder as a small integer (0–23); the
//! enum keeps those discriminants.  Lead times are expressed in minutes,
//! with a "month" counted as 30 days.

/// How far ahead of an occurrence the user wants to be notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Reminder {
    /// No reminder.
    None = 0,
    /// At the start of the event.
    AtStart = 1,
    /// 5 minutes ahead.
    Minutes5 = 2,
    /// 10 minutes ahead.
    Minutes10 = 3,
    /// 15 minutes ahead.
    Minutes15 = 4,
    /// 30 minutes ahead.
    Minutes30 = 5,
    /// 1 hour ahead.
    Hours1 = 6,
    /// 2 hours ahead.
    Hours2 = 7,
    /// 3 hours ahead.
    Hours3 = 8,
    /// 4 hours ahead.
    Hours4 = 9,
    /// 5 hours ahead.
    Hours5 = 10,
    /// 1 day ahead.
    Days1 = 11,
    /// 2 days ahead.
    Days2 = 12,
    /// 3 days ahead.
    Days3 = 13,
    /// 4 days ahead.
    Days4 = 14,
    /// 5 days ahead.
    Days5 = 15,
    /// 6 days ahead.
    Days6 = 16,
    /// 1 week ahead.
    Weeks1 = 17,
    /// 10 days ahead.
    Days10 = 18,
    /// 2 weeks ahead.
    Weeks2 = 19,
    /// 3 weeks ahead.
    Weeks3 = 20,
    /// 1 month (30 days) ahead.
    Months1 = 21,
    /// 2 months (60 days) ahead.
    Months2 = 22,
    /// 3 months (90 days) ahead.
    Months3 = 23,
}

impl Reminder {
    /// Construct from the legacy storage code (0–23).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Reminder::None),
            1 => Some(Reminder::AtStart),
            2 => Some(Reminder::Minutes5),
            3 => Some(Reminder::Minutes10),
            4 => Some(Reminder::Minutes15),
            5 => Some(Reminder::Minutes30),
            6 => Some(Reminder::Hours1),
            7 => Some(Reminder::Hours2),
            8 => Some(Reminder::Hours3),
            9 => Some(Reminder::Hours4),
            10 => Some(Reminder::Hours5),
            11 => Some(Reminder::Days1),
            12 => Some(Reminder::Days2),
            13 => Some(Reminder::Days3),
            14 => Some(Reminder::Days4),
            15 => Some(Reminder::Days5),
            16 => Some(Reminder::Days6),
            17 => Some(Reminder::Weeks1),
            18 => Some(Reminder::Days10),
            19 => Some(Reminder::Weeks2),
            20 => Some(Reminder::Weeks3),
            21 => Some(Reminder::Months1),
            22 => Some(Reminder::Months2),
            23 => Some(Reminder::Months3),
            _ => Option::None,
        }
    }

    /// Return the legacy storage code (0–23).
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Lead time in minutes before the occurrence.
    ///
    /// `Reminder::None` has no lead time at all, which is different from
    /// `AtStart`'s zero minutes.
    pub fn lead_minutes(self) -> Option<i64> {
        Some(match self {
            Reminder::None => return Option::None,
            Reminder::AtStart => 0,
            Reminder::Minutes5 => 5,
            Reminder::Minutes10 => 10,
            Reminder::Minutes15 => 15,
            Reminder::Minutes30 => 30,
            Reminder::Hours1 => 60,
            Reminder::Hours2 => 120,
            Reminder::Hours3 => 180,
            Reminder::Hours4 => 240,
            Reminder::Hours5 => 300,
            Reminder::Days1 => 1_440,
            Reminder::Days2 => 2_880,
            Reminder::Days3 => 4_320,
            Reminder::Days4 => 5_760,
            Reminder::Days5 => 7_200,
            Reminder::Days6 => 8_640,
            Reminder::Weeks1 => 10_080,
            Reminder::Days10 => 14_400,
            Reminder::Weeks2 => 20_160,
            Reminder::Weeks3 => 30_240,
            Reminder::Months1 => 43_200,
            Reminder::Months2 => 86_400,
            Reminder::Months3 => 129_600,
        })
    }
}
