//! `Event` — a named calendar entry with an anchor, an optional multi-day
//! span, a recurrence rule, and a reminder.
//!
//! The two queries that matter live here: [`Event::matches`] decides
//! whether the event occurs on a given day, and [`Event::next_occurrence`]
//! finds the occurrence nearest to a caller-supplied "today".

use kal_core::errors::{Error, Result};
use kal_time::{Date, DateTime, TimeUnit};

use crate::frequency::Frequency;
use crate::reminder::Reminder;

/// How far around "today" [`Event::next_occurrence`] scans, in days.
///
/// Every rule family except a sparse interval repeats at least once a
/// year, so a year plus a margin bounds the search in both directions.
const SEARCH_RADIUS_DAYS: i32 = 370;

/// Whether an event is an ordinary entry, a statutory holiday, or a
/// non-statutory observance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayClass {
    /// A regular user event.
    None,
    /// A statutory public holiday.
    Legal,
    /// A non-statutory observance (memorial or commemorative day).
    Observance,
}

/// A calendar event.
///
/// Built with [`Event::new`] plus the `with_*` builders.  Generated holiday
/// events are created internally by the [`holidays`](crate::holidays)
/// module and never carry an ID.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    name: String,
    start: DateTime,
    end: Option<Date>,
    frequency: Frequency,
    class: HolidayClass,
    reminder: Reminder,
    id: Option<u32>,
}

impl Event {
    /// A single-occurrence event on `start`, with no reminder and no ID.
    pub fn new(name: impl Into<String>, start: DateTime) -> Self {
        Event {
            name: name.into(),
            start,
            end: None,
            frequency: Frequency::Once,
            class: HolidayClass::None,
            reminder: Reminder::None,
            id: None,
        }
    }

    /// Constructor for generated holiday entries.
    pub(crate) fn holiday(
        name: &str,
        date: Date,
        class: HolidayClass,
        frequency: Frequency,
    ) -> Self {
        Event {
            name: name.to_owned(),
            start: DateTime::new(date),
            end: None,
            frequency,
            class,
            reminder: Reminder::None,
            id: None,
        }
    }

    /// Extend the event over several days, through `end` inclusive.
    ///
    /// Only meaningful for single-occurrence events; `end` must not precede
    /// the start date.
    pub fn with_end(mut self, end: Date) -> Result<Self> {
        if end < self.start.date() {
            return Err(Error::Date(format!(
                "end date {end} precedes start date {}",
                self.start.date()
            )));
        }
        self.end = Some(end);
        Ok(self)
    }

    /// Set the recurrence rule.
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Set the reminder lead time.
    pub fn with_reminder(mut self, reminder: Reminder) -> Self {
        self.reminder = reminder;
        self
    }

    /// Attach a persistent ID.
    pub fn with_id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The anchor: first occurrence date, with optional clock time.
    pub fn start(&self) -> DateTime {
        self.start
    }

    /// The inclusive end date of a multi-day event, if set.
    pub fn end(&self) -> Option<Date> {
        self.end
    }

    /// The recurrence rule.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// The holiday classification.
    pub fn class(&self) -> HolidayClass {
        self.class
    }

    /// The reminder lead time.
    pub fn reminder(&self) -> Reminder {
        self.reminder
    }

    /// The persistent ID, if the event has been stored.
    pub fn id(&self) -> Option<u32> {
        self.id
    }

    /// `true` for generated holiday and observance entries.
    pub fn is_holiday(&self) -> bool {
        self.class != HolidayClass::None
    }

    // ── Occurrence queries ────────────────────────────────────────────────────

    /// Does this event occur on `day`?
    pub fn matches(&self, day: Date) -> bool {
        let anchor = self.start.date();
        match self.frequency {
            Frequency::Once
            | Frequency::ByDate {
                weekly: false,
                monthly: false,
                yearly: false,
            } => self.covers(day),
            Frequency::ByDate {
                weekly,
                monthly,
                yearly,
            } => by_date_matches(day, anchor, weekly, monthly, yearly),
            Frequency::ByWeekday { weekday, index } => {
                day.weekday() == weekday && day.day_of_week_index_in_month() == index
            }
            Frequency::ByInterval { count, unit } => interval_matches(day, anchor, count, unit),
            Frequency::ByEndOfMonth => {
                day.days_to_end_of_month() == anchor.days_to_end_of_month()
            }
        }
    }

    /// The occurrence nearest to `today`.
    ///
    /// A single-occurrence event reports its anchor (clamped into the span
    /// for multi-day events) regardless of how far in the past it lies.  A
    /// recurring event is scanned first forward from `today` inclusive,
    /// then backward, up to [a year and a few days](SEARCH_RADIUS_DAYS)
    /// each way; a sparse interval rule with no occurrence in that window
    /// yields `None`.
    pub fn next_occurrence(&self, today: Date) -> Option<DateTime> {
        if self.frequency.is_single() {
            return Some(match self.end {
                None => self.start,
                Some(end) => {
                    let start = self.start.date();
                    let day = if today < start {
                        start
                    } else if today > end {
                        end
                    } else {
                        today
                    };
                    self.occurrence_on(day)
                }
            });
        }
        for offset in 0..=SEARCH_RADIUS_DAYS {
            let Ok(day) = today.add_days(offset) else { break };
            if self.matches(day) {
                return Some(self.occurrence_on(day));
            }
        }
        for offset in 1..=SEARCH_RADIUS_DAYS {
            let Ok(day) = today.add_days(-offset) else { break };
            if self.matches(day) {
                return Some(self.occurrence_on(day));
            }
        }
        None
    }

    /// `true` when `day` is the anchor day or inside the multi-day span.
    fn covers(&self, day: Date) -> bool {
        match self.end {
            Some(end) => day >= self.start.date() && day <= end,
            None => day == self.start.date(),
        }
    }

    /// The occurrence on `day`, carrying the anchor's clock time if any.
    fn occurrence_on(&self, day: Date) -> DateTime {
        match self.start.time() {
            Some(t) => DateTime::at(day, t),
            None => DateTime::new(day),
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.start, self.frequency)
    }
}

// ── Rule predicates ───────────────────────────────────────────────────────────

fn by_date_matches(day: Date, anchor: Date, weekly: bool, monthly: bool, yearly: bool) -> bool {
    let same_day_of_month = day.day_of_month() == anchor.day_of_month();
    let same_weekday = day.weekday() == anchor.weekday();
    let same_month = day.month() == anchor.month();
    let same_year = day.year() == anchor.year();
    // A set flag releases one anchor field; everything not released must
    // still line up.
    match (weekly, monthly, yearly) {
        (false, false, false) => unreachable!("flagless rule handled as single occurrence"),
        (false, false, true) => same_day_of_month && same_month,
        (false, true, false) => same_day_of_month && same_year,
        (false, true, true) => same_day_of_month,
        (true, false, false) => same_weekday && same_month && same_year,
        (true, false, true) => same_weekday && same_month,
        (true, true, false) => same_weekday && same_year,
        (true, true, true) => same_weekday,
    }
}

fn interval_matches(day: Date, anchor: Date, count: u16, unit: TimeUnit) -> bool {
    match unit {
        TimeUnit::Days | TimeUnit::Weeks => {
            let step = i32::from(count) * if unit == TimeUnit::Weeks { 7 } else { 1 };
            (day - anchor).abs() % step == 0
        }
        TimeUnit::Months | TimeUnit::Years => {
            // Month-granular intervals additionally pin the day-of-month.
            if day.day_of_month() != anchor.day_of_month() {
                return false;
            }
            let step = i32::from(count) * if unit == TimeUnit::Years { 12 } else { 1 };
            (month_ordinal(day) - month_ordinal(anchor)).abs() % step == 0
        }
    }
}

fn month_ordinal(d: Date) -> i32 {
    d.year() * 12 + i32::from(d.month().index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kal_time::{TimeOfDay, Weekday};

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn day_event(name: &str, start: Date) -> Event {
        Event::new(name, DateTime::new(start))
    }

    #[test]
    fn test_single_event_matches_only_anchor() {
        let e = day_event("dentist", date(2024, 6, 7));
        assert!(e.matches(date(2024, 6, 7)));
        assert!(!e.matches(date(2024, 6, 8)));
        assert!(!e.matches(date(2025, 6, 7)));
    }

    #[test]
    fn test_multi_day_span() {
        let e = day_event("holiday trip", date(2024, 6, 10))
            .with_end(date(2024, 6, 20))
            .unwrap();
        assert!(e.matches(date(2024, 6, 10)));
        assert!(e.matches(date(2024, 6, 15)));
        assert!(e.matches(date(2024, 6, 20)));
        assert!(!e.matches(date(2024, 6, 9)));
        assert!(!e.matches(date(2024, 6, 21)));
    }

    #[test]
    fn test_with_end_validates() {
        assert!(day_event("x", date(2024, 6, 10))
            .with_end(date(2024, 6, 9))
            .is_err());
        assert!(day_event("x", date(2024, 6, 10))
            .with_end(date(2024, 6, 10))
            .is_ok());
    }

    #[test]
    fn test_by_date_yearly() {
        // Birthday: every year on March 20
        let e = day_event("birthday", date(1990, 3, 20))
            .with_frequency(Frequency::by_date(false, false, true));
        assert!(e.matches(date(2024, 3, 20)));
        assert!(e.matches(date(1990, 3, 20)));
        assert!(!e.matches(date(2024, 3, 21)));
        assert!(!e.matches(date(2024, 4, 20)));
    }

    #[test]
    fn test_by_date_monthly() {
        // Rent: on the 1st of every month, every year
        let e = day_event("rent", date(2024, 1, 1))
            .with_frequency(Frequency::by_date(false, true, true));
        assert!(e.matches(date(2024, 7, 1)));
        assert!(e.matches(date(2030, 2, 1)));
        assert!(!e.matches(date(2024, 7, 2)));

        // Monthly within the anchor year only
        let e = day_event("installment", date(2024, 1, 15))
            .with_frequency(Frequency::by_date(false, true, false));
        assert!(e.matches(date(2024, 11, 15)));
        assert!(!e.matches(date(2025, 1, 15)));
    }

    #[test]
    fn test_by_date_weekly() {
        // Anchor 2024-01-03 is a Wednesday
        let every_week = day_event("training", date(2024, 1, 3))
            .with_frequency(Frequency::by_date(true, true, true));
        assert!(every_week.matches(date(2024, 6, 5))); // a Wednesday
        assert!(!every_week.matches(date(2024, 6, 6)));

        // Weekly but pinned to January 2024
        let january_only = day_event("course", date(2024, 1, 3))
            .with_frequency(Frequency::by_date(true, false, false));
        assert!(january_only.matches(date(2024, 1, 31)));
        assert!(!january_only.matches(date(2024, 2, 7)));
        assert!(!january_only.matches(date(2025, 1, 1))); // Wednesday, wrong year

        // Weekly in every January
        let every_january = day_event("course", date(2024, 1, 3))
            .with_frequency(Frequency::by_date(true, false, true));
        assert!(every_january.matches(date(2025, 1, 1)));
        assert!(!every_january.matches(date(2025, 2, 5)));
    }

    #[test]
    fn test_by_weekday() {
        // Third Wednesday of every month
        let e = day_event("club night", date(2024, 3, 20))
            .with_frequency(Frequency::by_weekday(Weekday::Wednesday, 3).unwrap());
        assert!(e.matches(date(2024, 3, 20)));
        assert!(e.matches(date(2024, 6, 19)));
        assert!(!e.matches(date(2024, 6, 12))); // second Wednesday
        assert!(!e.matches(date(2024, 6, 20))); // a Thursday

        // Last Friday of every month
        let e = day_event("payday", date(2024, 1, 26))
            .with_frequency(Frequency::by_weekday(Weekday::Friday, 0).unwrap());
        assert!(e.matches(date(2024, 2, 23)));
        assert!(e.matches(date(2024, 3, 29)));
        assert!(!e.matches(date(2024, 3, 22)));
    }

    #[test]
    fn test_by_weekday_ignores_anchor_fields() {
        // The stored rule is authoritative even when the anchor day itself
        // does not satisfy it.
        let e = day_event("odd anchor", date(2024, 3, 21)) // a Thursday
            .with_frequency(Frequency::by_weekday(Weekday::Wednesday, 3).unwrap());
        assert!(!e.matches(date(2024, 3, 21)));
        assert!(e.matches(date(2024, 3, 20)));
    }

    #[test]
    fn test_by_interval_days() {
        let e = day_event("pills", date(2024, 1, 5))
            .with_frequency(Frequency::by_interval(14, TimeUnit::Days).unwrap());
        assert!(e.matches(date(2024, 1, 5)));
        assert!(e.matches(date(2024, 1, 19)));
        assert!(e.matches(date(2023, 12, 22))); // 14 days before the anchor
        assert!(!e.matches(date(2024, 1, 12)));
    }

    #[test]
    fn test_by_interval_weeks() {
        let e = day_event("biweekly", date(2024, 1, 5))
            .with_frequency(Frequency::by_interval(2, TimeUnit::Weeks).unwrap());
        assert!(e.matches(date(2024, 1, 19)));
        assert!(!e.matches(date(2024, 1, 12)));
    }

    #[test]
    fn test_by_interval_months() {
        let e = day_event("quarterly", date(2024, 1, 31))
            .with_frequency(Frequency::by_interval(3, TimeUnit::Months).unwrap());
        assert!(e.matches(date(2024, 1, 31)));
        assert!(e.matches(date(2024, 7, 31)));
        assert!(e.matches(date(2023, 10, 31)));
        assert!(!e.matches(date(2024, 2, 29))); // different day-of-month
        assert!(!e.matches(date(2024, 4, 30))); // April has no 31st; that occurrence skips
        assert!(!e.matches(date(2024, 3, 31))); // right day, off-step month
    }

    #[test]
    fn test_by_interval_years() {
        let e = day_event("leap day", date(2024, 2, 29))
            .with_frequency(Frequency::by_interval(1, TimeUnit::Years).unwrap());
        assert!(e.matches(date(2028, 2, 29)));
        assert!(e.matches(date(2020, 2, 29)));
        assert!(!e.matches(date(2025, 2, 28)));
    }

    #[test]
    fn test_by_end_of_month() {
        // Anchor two days before the end of January
        let e = day_event("salary", date(2024, 1, 29))
            .with_frequency(Frequency::ByEndOfMonth);
        assert_eq!(date(2024, 1, 29).days_to_end_of_month(), 2);
        assert!(e.matches(date(2024, 2, 27))); // 29-day February
        assert!(e.matches(date(2024, 4, 28))); // 30-day April
        assert!(e.matches(date(2024, 6, 28)));
        assert!(!e.matches(date(2024, 2, 29)));
    }

    #[test]
    fn test_next_occurrence_single() {
        let e = day_event("past", date(2024, 1, 1));
        // A single event keeps reporting its anchor, even in the past
        assert_eq!(
            e.next_occurrence(date(2024, 6, 1)),
            Some(DateTime::new(date(2024, 1, 1)))
        );

        let timed = Event::new(
            "meeting",
            DateTime::at(date(2024, 9, 2), TimeOfDay::new(14, 30).unwrap()),
        );
        assert_eq!(
            timed.next_occurrence(date(2024, 6, 1)),
            Some(DateTime::at(date(2024, 9, 2), TimeOfDay::new(14, 30).unwrap()))
        );
    }

    #[test]
    fn test_next_occurrence_span_clamps() {
        let e = day_event("fair", date(2024, 6, 10))
            .with_end(date(2024, 6, 20))
            .unwrap();
        assert_eq!(
            e.next_occurrence(date(2024, 6, 1)),
            Some(DateTime::new(date(2024, 6, 10)))
        );
        assert_eq!(
            e.next_occurrence(date(2024, 6, 15)),
            Some(DateTime::new(date(2024, 6, 15)))
        );
        assert_eq!(
            e.next_occurrence(date(2024, 7, 1)),
            Some(DateTime::new(date(2024, 6, 20)))
        );
    }

    #[test]
    fn test_next_occurrence_forward() {
        let e = day_event("club night", date(2024, 3, 20))
            .with_frequency(Frequency::by_weekday(Weekday::Wednesday, 3).unwrap());
        assert_eq!(
            e.next_occurrence(date(2024, 6, 1)),
            Some(DateTime::new(date(2024, 6, 19)))
        );
        // Today itself matching wins
        assert_eq!(
            e.next_occurrence(date(2024, 6, 19)),
            Some(DateTime::new(date(2024, 6, 19)))
        );

        let pills = day_event("pills", date(2024, 1, 5))
            .with_frequency(Frequency::by_interval(14, TimeUnit::Days).unwrap());
        assert_eq!(
            pills.next_occurrence(date(2024, 6, 1)),
            Some(DateTime::new(date(2024, 6, 7)))
        );
    }

    #[test]
    fn test_next_occurrence_falls_back_to_past() {
        // Weekly course pinned to January 2024: from June the scan finds
        // the last Wednesday of that January behind us.
        let e = day_event("course", date(2024, 1, 3))
            .with_frequency(Frequency::by_date(true, false, false));
        assert_eq!(
            e.next_occurrence(date(2024, 6, 1)),
            Some(DateTime::new(date(2024, 1, 31)))
        );
    }

    #[test]
    fn test_next_occurrence_none_when_out_of_reach() {
        // Monthly within 2020 only, queried from 2024: a year's scan in
        // both directions finds nothing.
        let e = day_event("old installment", date(2020, 3, 15))
            .with_frequency(Frequency::by_date(false, true, false));
        assert_eq!(e.next_occurrence(date(2024, 6, 1)), None);

        // Every 4 years from Feb 29 2024, queried from early 2026: both
        // neighbours are more than a year away.
        let leap = day_event("leap day", date(2024, 2, 29))
            .with_frequency(Frequency::by_interval(4, TimeUnit::Years).unwrap());
        assert_eq!(leap.next_occurrence(date(2026, 1, 1)), None);
    }

    #[test]
    fn test_next_occurrence_carries_anchor_time() {
        let e = Event::new(
            "standup",
            DateTime::at(date(2024, 1, 1), TimeOfDay::new(9, 15).unwrap()),
        )
        .with_frequency(Frequency::by_date(true, true, true));
        let next = e.next_occurrence(date(2024, 6, 5)).unwrap();
        assert_eq!(next.date(), date(2024, 6, 10)); // next Monday
        assert_eq!(next.time(), Some(TimeOfDay::new(9, 15).unwrap()));
    }

    #[test]
    fn test_next_occurrence_near_range_edge() {
        // The scan stops quietly at the supported range instead of erroring.
        let e = day_event("eternal", Date::MAX)
            .with_frequency(Frequency::by_date(false, false, true));
        assert_eq!(
            e.next_occurrence(Date::MAX),
            Some(DateTime::new(Date::MAX))
        );
        let unreachable = day_event("nope", date(2990, 6, 15))
            .with_frequency(Frequency::by_interval(800, TimeUnit::Years).unwrap());
        assert_eq!(unreachable.next_occurrence(Date::MAX - 2), None);
    }
}
