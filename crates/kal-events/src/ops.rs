//! Pure helpers over event collections: ordering, day queries, and the
//! notification wait computation.
//!
//! Everything here takes "now" as an argument and touches no global state,
//! so a host can drive these from any clock (including a test's fake one).

use std::time::Duration;

use kal_time::{Date, DateTime};

use crate::event::Event;
use crate::reminder::Reminder;

/// Sort events by their start date (day granularity), holidays first
/// within a day.
///
/// The sort is stable: events on the same day with the same classification
/// keep their relative order.
pub fn sort_by_date(events: &mut [Event]) {
    events.sort_by(|a, b| {
        a.start()
            .date()
            .cmp(&b.start().date())
            .then_with(|| b.is_holiday().cmp(&a.is_holiday()))
    });
}

/// All events occurring on `day`, in collection order.
pub fn events_on<'a>(events: &'a [Event], day: Date) -> Vec<&'a Event> {
    events.iter().filter(|e| e.matches(day)).collect()
}

/// How long to wait from `now` until `event`'s reminder should fire.
///
/// An event with no reminder of its own falls back to `default_reminder`.
/// Returns `None` when there is nothing to schedule: no effective
/// reminder, no occurrence in reach, or an occurrence already begun.  A
/// reminder whose lead time is already running (occurrence still ahead,
/// lead window entered) yields `Duration::ZERO`, i.e. fire immediately.
pub fn wait_before(event: &Event, now: DateTime, default_reminder: Reminder) -> Option<Duration> {
    let reminder = match event.reminder() {
        Reminder::None => default_reminder,
        own => own,
    };
    let lead = reminder.lead_minutes()?;
    let occurrence = event.next_occurrence(now.date())?;
    let until = occurrence.minutes_since(now);
    if until < 0 {
        return None;
    }
    let wait = until - lead;
    if wait <= 0 {
        Some(Duration::ZERO)
    } else {
        Some(Duration::from_secs(wait as u64 * 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::Frequency;
    use kal_time::TimeOfDay;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn time(h: u8, min: u8) -> TimeOfDay {
        TimeOfDay::new(h, min).unwrap()
    }

    #[test]
    fn test_sort_by_date_holidays_first() {
        let mut events = vec![
            Event::new("b", DateTime::new(date(2024, 6, 7))),
            Event::new("a", DateTime::new(date(2024, 6, 1))),
            Event::holiday(
                "Corpus Christi",
                date(2024, 5, 30),
                crate::event::HolidayClass::Legal,
                Frequency::Once,
            ),
            Event::new("same day", DateTime::new(date(2024, 5, 30))),
        ];
        sort_by_date(&mut events);
        let names: Vec<_> = events.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Corpus Christi", "same day", "a", "b"]);
    }

    #[test]
    fn test_sort_is_stable_within_a_day() {
        let mut events = vec![
            Event::new("first", DateTime::at(date(2024, 6, 7), time(18, 0))),
            Event::new("second", DateTime::at(date(2024, 6, 7), time(9, 0))),
            Event::new("third", DateTime::new(date(2024, 6, 7))),
        ];
        sort_by_date(&mut events);
        // Day granularity only: same-day events keep insertion order,
        // whatever their clock times.
        let names: Vec<_> = events.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_events_on() {
        let events = vec![
            Event::new("single", DateTime::new(date(2024, 6, 7))),
            Event::new("weekly", DateTime::new(date(2024, 1, 5))) // a Friday
                .with_frequency(Frequency::by_date(true, true, true)),
            Event::new("elsewhere", DateTime::new(date(2024, 6, 8))),
        ];
        // 2024-06-07 is a Friday: both the single and the weekly event hit
        let hits = events_on(&events, date(2024, 6, 7));
        let names: Vec<_> = hits.iter().map(|e| e.name()).collect();
        assert_eq!(names, ["single", "weekly"]);
        assert_eq!(events_on(&events, date(2024, 6, 9)).len(), 0);
    }

    #[test]
    fn test_wait_before_counts_down() {
        let event = Event::new("exam", DateTime::at(date(2024, 6, 15), time(10, 0)))
            .with_reminder(Reminder::Hours1);
        let now = DateTime::at(date(2024, 6, 14), time(9, 0));
        // 25 hours ahead, 1 hour lead: fire in 24 hours
        assert_eq!(
            wait_before(&event, now, Reminder::None),
            Some(Duration::from_secs(24 * 60 * 60))
        );
    }

    #[test]
    fn test_wait_before_inside_lead_window() {
        let event = Event::new("exam", DateTime::at(date(2024, 6, 15), time(10, 0)))
            .with_reminder(Reminder::Hours1);
        let now = DateTime::at(date(2024, 6, 15), time(9, 30));
        assert_eq!(wait_before(&event, now, Reminder::None), Some(Duration::ZERO));
    }

    #[test]
    fn test_wait_before_event_already_started() {
        let event = Event::new("exam", DateTime::at(date(2024, 6, 15), time(10, 0)))
            .with_reminder(Reminder::Hours1);
        let now = DateTime::at(date(2024, 6, 15), time(11, 0));
        assert_eq!(wait_before(&event, now, Reminder::None), None);
    }

    #[test]
    fn test_wait_before_uses_default_reminder() {
        // Date-only event anchors at midnight
        let event = Event::new("deadline", DateTime::new(date(2024, 6, 20)));
        let now = DateTime::at(date(2024, 6, 18), time(12, 0));
        // 36 hours ahead, 1 day default lead: fire in 12 hours
        assert_eq!(
            wait_before(&event, now, Reminder::Days1),
            Some(Duration::from_secs(12 * 60 * 60))
        );
        // No reminder anywhere: nothing to schedule
        assert_eq!(wait_before(&event, now, Reminder::None), None);
    }

    #[test]
    fn test_wait_before_own_reminder_beats_default() {
        let event = Event::new("deadline", DateTime::new(date(2024, 6, 20)))
            .with_reminder(Reminder::Days2);
        let now = DateTime::new(date(2024, 6, 16));
        // 4 days ahead, 2 days lead
        assert_eq!(
            wait_before(&event, now, Reminder::Minutes5),
            Some(Duration::from_secs(2 * 24 * 60 * 60))
        );
    }

    #[test]
    fn test_wait_before_recurring() {
        // Weekly standup, Mondays 09:00
        let event = Event::new("standup", DateTime::at(date(2024, 1, 1), time(9, 0)))
            .with_frequency(Frequency::by_date(true, true, true))
            .with_reminder(Reminder::Minutes30);
        // Friday 2024-06-07 08:00 → next Monday is 2024-06-10 09:00
        let now = DateTime::at(date(2024, 6, 7), time(8, 0));
        let expected_minutes = 3 * 24 * 60 + 60 - 30;
        assert_eq!(
            wait_before(&event, now, Reminder::None),
            Some(Duration::from_secs(expected_minutes * 60))
        );
    }

    #[test]
    fn test_wait_before_unreachable_occurrence() {
        let event = Event::new("old", DateTime::new(date(2020, 3, 15)))
            .with_frequency(Frequency::by_date(false, true, false))
            .with_reminder(Reminder::Hours1);
        let now = DateTime::new(date(2024, 6, 1));
        assert_eq!(wait_before(&event, now, Reminder::None), None);
    }
}
