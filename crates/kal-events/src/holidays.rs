//! German holidays and observances.
//!
//! Two anchors drive every movable day: Easter Sunday (computed with
//! Lichtenberg's integer form of the Gauss algorithm) and the fourth Sunday
//! of Advent.  Fixed days are plain month/day pairs.  Which entries a host
//! wants is controlled by a pair of bitmasks, one for statutory holidays and
//! one for observances, so a host can, say, generate the Bavarian statutory
//! set while keeping all commemorative days.

use kal_core::errors::Result;
use kal_time::{Date, Weekday};

use crate::event::{Event, HolidayClass};
use crate::frequency::Frequency;

// ── Anchor computations ───────────────────────────────────────────────────────

/// Easter Sunday of `year`.
///
/// Lichtenberg's closed-form variant of the Gauss Easter computus, valid
/// for every supported Gregorian year.  The result is always a Sunday
/// between March 22 and April 25.
pub fn easter_sunday(year: i32) -> Result<Date> {
    let k = year / 100;
    let m = 15 + (3 * k + 3) / 4 - (8 * k + 13) / 25;
    let s = 2 - (3 * k + 3) / 4;
    let a = year % 19;
    let d = (19 * a + m) % 30;
    let r = (d + a / 11) / 29;
    let og = 21 + d - r; // March day of the spring full moon
    let sz = 7 - (year + year / 4 + s) % 7;
    let oe = 7 - (og - sz) % 7;
    // og + oe is Easter as a day of March, spilling into April past 31.
    Date::from_ymd(year, 3, 1)?.add_days(og + oe - 1)
}

/// The fourth Sunday of Advent: the Sunday on or before December 24.
pub fn fourth_advent(year: i32) -> Result<Date> {
    Date::from_ymd(year, 12, 24)?.previous_or_same(Weekday::Sunday)
}

// ── The holiday table ─────────────────────────────────────────────────────────

/// Every holiday and observance the generator knows.
///
/// The first block is fixed-date, the second Easter-bound, the third
/// Advent-bound plus the remaining special cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Holiday {
    /// New Year's Day (Jan 1).
    NewYear,
    /// Epiphany (Jan 6).
    Epiphany,
    /// Labour Day (May 1).
    LabourDay,
    /// Assumption Day (Aug 15).
    Assumption,
    /// German Unity Day (Oct 3).
    GermanUnity,
    /// Reformation Day (Oct 31).
    Reformation,
    /// All Saints' Day (Nov 1).
    AllSaints,
    /// Christmas Day (Dec 25).
    Christmas,
    /// Boxing Day (Dec 26).
    BoxingDay,
    /// Valentine's Day (Feb 14).
    Valentine,
    /// St Nicholas' Day (Dec 6).
    StNicholas,
    /// Christmas Eve (Dec 24).
    ChristmasEve,
    /// New Year's Eve (Dec 31).
    NewYearsEve,
    /// Carnival Monday (Easter - 48).
    CarnivalMonday,
    /// Shrove Tuesday (Easter - 47).
    ShroveTuesday,
    /// Ash Wednesday (Easter - 46).
    AshWednesday,
    /// Palm Sunday (Easter - 7).
    PalmSunday,
    /// Maundy Thursday (Easter - 3).
    MaundyThursday,
    /// Good Friday (Easter - 2).
    GoodFriday,
    /// Easter Sunday.
    EasterSunday,
    /// Easter Monday (Easter + 1).
    EasterMonday,
    /// Ascension Thursday (Easter + 39).
    Ascension,
    /// Whit Sunday (Easter + 49).
    WhitSunday,
    /// Whit Monday (Easter + 50).
    WhitMonday,
    /// Corpus Christi (Easter + 60).
    CorpusChristi,
    /// Mothers' Day (second Sunday of May).
    MothersDay,
    /// First Advent (fourth Advent - 21).
    FirstAdvent,
    /// Second Advent (fourth Advent - 14).
    SecondAdvent,
    /// Third Advent (fourth Advent - 7).
    ThirdAdvent,
    /// Fourth Advent (Sunday on or before Dec 24).
    FourthAdvent,
    /// Day of National Mourning (fourth Advent - 35).
    MourningDay,
    /// Sunday of the Dead (fourth Advent - 28).
    SundayOfTheDead,
    /// Repentance and Prayer Day (fourth Advent - 32, a Wednesday).
    Repentance,
}

/// All holidays, in generation order: fixed dates first, movable after.
pub const ALL_HOLIDAYS: [Holiday; 33] = [
    Holiday::NewYear,
    Holiday::Epiphany,
    Holiday::LabourDay,
    Holiday::Assumption,
    Holiday::GermanUnity,
    Holiday::Reformation,
    Holiday::AllSaints,
    Holiday::Christmas,
    Holiday::BoxingDay,
    Holiday::Valentine,
    Holiday::StNicholas,
    Holiday::ChristmasEve,
    Holiday::NewYearsEve,
    Holiday::CarnivalMonday,
    Holiday::ShroveTuesday,
    Holiday::AshWednesday,
    Holiday::PalmSunday,
    Holiday::MaundyThursday,
    Holiday::GoodFriday,
    Holiday::EasterSunday,
    Holiday::EasterMonday,
    Holiday::Ascension,
    Holiday::WhitSunday,
    Holiday::WhitMonday,
    Holiday::CorpusChristi,
    Holiday::MothersDay,
    Holiday::FirstAdvent,
    Holiday::SecondAdvent,
    Holiday::ThirdAdvent,
    Holiday::FourthAdvent,
    Holiday::MourningDay,
    Holiday::SundayOfTheDead,
    Holiday::Repentance,
];

impl Holiday {
    /// The display name used for the generated event.
    pub fn name(&self) -> &'static str {
        match self {
            Holiday::NewYear => "New Year's Day",
            Holiday::Epiphany => "Epiphany",
            Holiday::LabourDay => "Labour Day",
            Holiday::Assumption => "Assumption Day",
            Holiday::GermanUnity => "German Unity Day",
            Holiday::Reformation => "Reformation Day",
            Holiday::AllSaints => "All Saints' Day",
            Holiday::Christmas => "Christmas Day",
            Holiday::BoxingDay => "Boxing Day",
            Holiday::Valentine => "Valentine's Day",
            Holiday::StNicholas => "St Nicholas' Day",
            Holiday::ChristmasEve => "Christmas Eve",
            Holiday::NewYearsEve => "New Year's Eve",
            Holiday::CarnivalMonday => "Carnival Monday",
            Holiday::ShroveTuesday => "Shrove Tuesday",
            Holiday::AshWednesday => "Ash Wednesday",
            Holiday::PalmSunday => "Palm Sunday",
            Holiday::MaundyThursday => "Maundy Thursday",
            Holiday::GoodFriday => "Good Friday",
            Holiday::EasterSunday => "Easter Sunday",
            Holiday::EasterMonday => "Easter Monday",
            Holiday::Ascension => "Ascension Thursday",
            Holiday::WhitSunday => "Whit Sunday",
            Holiday::WhitMonday => "Whit Monday",
            Holiday::CorpusChristi => "Corpus Christi",
            Holiday::MothersDay => "Mothers' Day",
            Holiday::FirstAdvent => "First Advent",
            Holiday::SecondAdvent => "Second Advent",
            Holiday::ThirdAdvent => "Third Advent",
            Holiday::FourthAdvent => "Fourth Advent",
            Holiday::MourningDay => "Day of National Mourning",
            Holiday::SundayOfTheDead => "Sunday of the Dead",
            Holiday::Repentance => "Repentance and Prayer Day",
        }
    }

    /// Statutory holiday or plain observance.
    pub fn class(&self) -> HolidayClass {
        match self {
            Holiday::NewYear
            | Holiday::Epiphany
            | Holiday::LabourDay
            | Holiday::Assumption
            | Holiday::GermanUnity
            | Holiday::Reformation
            | Holiday::AllSaints
            | Holiday::Christmas
            | Holiday::BoxingDay
            | Holiday::GoodFriday
            | Holiday::EasterSunday
            | Holiday::EasterMonday
            | Holiday::Ascension
            | Holiday::WhitSunday
            | Holiday::WhitMonday
            | Holiday::CorpusChristi
            | Holiday::Repentance => HolidayClass::Legal,
            _ => HolidayClass::Observance,
        }
    }

    /// `true` for plain month/day holidays that recur yearly by date.
    pub fn is_fixed(&self) -> bool {
        self.fixed_month_day().is_some()
    }

    fn fixed_month_day(&self) -> Option<(u8, u8)> {
        match self {
            Holiday::NewYear => Some((1, 1)),
            Holiday::Epiphany => Some((1, 6)),
            Holiday::Valentine => Some((2, 14)),
            Holiday::LabourDay => Some((5, 1)),
            Holiday::Assumption => Some((8, 15)),
            Holiday::GermanUnity => Some((10, 3)),
            Holiday::Reformation => Some((10, 31)),
            Holiday::AllSaints => Some((11, 1)),
            Holiday::StNicholas => Some((12, 6)),
            Holiday::ChristmasEve => Some((12, 24)),
            Holiday::Christmas => Some((12, 25)),
            Holiday::BoxingDay => Some((12, 26)),
            Holiday::NewYearsEve => Some((12, 31)),
            _ => None,
        }
    }

    /// The date this holiday falls on in `year`.
    pub fn date_in(&self, year: i32) -> Result<Date> {
        if let Some((month, day)) = self.fixed_month_day() {
            return Date::from_ymd(year, month, day);
        }
        match self {
            Holiday::CarnivalMonday => easter_sunday(year)?.add_days(-48),
            Holiday::ShroveTuesday => easter_sunday(year)?.add_days(-47),
            Holiday::AshWednesday => easter_sunday(year)?.add_days(-46),
            Holiday::PalmSunday => easter_sunday(year)?.add_days(-7),
            Holiday::MaundyThursday => easter_sunday(year)?.add_days(-3),
            Holiday::GoodFriday => easter_sunday(year)?.add_days(-2),
            Holiday::EasterSunday => easter_sunday(year),
            Holiday::EasterMonday => easter_sunday(year)?.add_days(1),
            Holiday::Ascension => easter_sunday(year)?.add_days(39),
            Holiday::WhitSunday => easter_sunday(year)?.add_days(49),
            Holiday::WhitMonday => easter_sunday(year)?.add_days(50),
            Holiday::CorpusChristi => easter_sunday(year)?.add_days(60),
            Holiday::MothersDay => {
                let first_sunday = Date::from_ymd(year, 5, 1)?.next_or_same(Weekday::Sunday)?;
                first_sunday.add_days(7)
            }
            Holiday::FirstAdvent => fourth_advent(year)?.add_days(-21),
            Holiday::SecondAdvent => fourth_advent(year)?.add_days(-14),
            Holiday::ThirdAdvent => fourth_advent(year)?.add_days(-7),
            Holiday::FourthAdvent => fourth_advent(year),
            Holiday::MourningDay => fourth_advent(year)?.add_days(-35),
            Holiday::SundayOfTheDead => fourth_advent(year)?.add_days(-28),
            Holiday::Repentance => fourth_advent(year)?.add_days(-32),
            _ => unreachable!("fixed holidays handled above"),
        }
    }

    /// The bit this holiday occupies in its classification's mask.
    fn flag(&self) -> u32 {
        let mut bit = 0;
        for candidate in ALL_HOLIDAYS {
            if candidate == *self {
                return 1 << bit;
            }
            if candidate.class() == self.class() {
                bit += 1;
            }
        }
        unreachable!("every holiday is in ALL_HOLIDAYS")
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ── Selection masks ───────────────────────────────────────────────────────────

/// Which holidays to generate, one bitmask per classification.
///
/// Bits follow the order of [`ALL_HOLIDAYS`] within each classification.
/// Hosts normally persist these masks as the user's regional settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayFlags {
    /// Mask over statutory holidays.
    pub legal: u32,
    /// Mask over observances.
    pub special: u32,
}

impl HolidayFlags {
    /// Every holiday and observance selected.
    pub const ALL: HolidayFlags = HolidayFlags {
        legal: (1 << 17) - 1,
        special: (1 << 16) - 1,
    };

    /// Nothing selected.
    pub const NONE: HolidayFlags = HolidayFlags {
        legal: 0,
        special: 0,
    };

    /// Every statutory holiday, no observances.
    pub fn legal_only() -> Self {
        HolidayFlags {
            legal: Self::ALL.legal,
            special: 0,
        }
    }

    /// Every observance, no statutory holidays.
    pub fn observances_only() -> Self {
        HolidayFlags {
            legal: 0,
            special: Self::ALL.special,
        }
    }

    /// `true` if `holiday` is selected.
    pub fn contains(&self, holiday: Holiday) -> bool {
        let mask = match holiday.class() {
            HolidayClass::Legal => self.legal,
            HolidayClass::Observance => self.special,
            HolidayClass::None => unreachable!("holidays are always classified"),
        };
        mask & holiday.flag() != 0
    }

    /// The flags with `holiday` selected.
    pub fn with(mut self, holiday: Holiday) -> Self {
        match holiday.class() {
            HolidayClass::Legal => self.legal |= holiday.flag(),
            HolidayClass::Observance => self.special |= holiday.flag(),
            HolidayClass::None => unreachable!("holidays are always classified"),
        }
        self
    }
}

// ── Event generation ──────────────────────────────────────────────────────────

/// Fixed-date holiday events for `year`, restricted to `flags`.
///
/// Each is anchored in `year` and recurs yearly by date, so a generated
/// set stays valid across year boundaries.
pub fn fixed_holidays(year: i32, flags: HolidayFlags) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for holiday in ALL_HOLIDAYS {
        if !holiday.is_fixed() || !flags.contains(holiday) {
            continue;
        }
        events.push(Event::holiday(
            holiday.name(),
            holiday.date_in(year)?,
            holiday.class(),
            Frequency::by_date(false, false, true),
        ));
    }
    Ok(events)
}

/// Movable holiday events for `year`, restricted to `flags`.
///
/// Movable days shift from year to year, so each event is a single
/// occurrence valid for `year` only; regenerate when the year changes.
pub fn movable_holidays(year: i32, flags: HolidayFlags) -> Result<Vec<Event>> {
    let mut events = Vec::new();
    for holiday in ALL_HOLIDAYS {
        if holiday.is_fixed() || !flags.contains(holiday) {
            continue;
        }
        events.push(Event::holiday(
            holiday.name(),
            holiday.date_in(year)?,
            holiday.class(),
            Frequency::Once,
        ));
    }
    Ok(events)
}

/// All holiday events for `year`, fixed then movable, restricted to `flags`.
pub fn holidays(year: i32, flags: HolidayFlags) -> Result<Vec<Event>> {
    let mut events = fixed_holidays(year, flags)?;
    events.extend(movable_holidays(year, flags)?);
    Ok(events)
}
