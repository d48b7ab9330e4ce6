//! # kalender
//!
//! A recurrence, holiday, and reminder engine for calendar applications.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `kal-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! kalender = "0.1"
//! ```
//!
//! ```rust
//! use kalender::events::{Event, Frequency};
//! use kalender::time::{Date, DateTime, Weekday};
//!
//! // The third Wednesday of every month, searched from a fixed "today".
//! let club = Event::new("club night", DateTime::new(Date::from_ymd(2024, 3, 20)?))
//!     .with_frequency(Frequency::by_weekday(Weekday::Wednesday, 3)?);
//! let next = club.next_occurrence(Date::from_ymd(2024, 6, 1)?);
//! assert_eq!(next.map(|n| n.date()), Some(Date::from_ymd(2024, 6, 19)?));
//! # Ok::<(), kalender::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types shared across the workspace.
pub use kal_core as core;

/// Calendar-date values: dates, clock times, weekdays, months.
pub use kal_time as time;

/// Events, recurrence rules, reminders, and holiday generation.
pub use kal_events as events;
