//! # kal-events
//!
//! Recurring events and everything hanging off them: the [`Frequency`]
//! rules, the legacy 16-bit frequency encoding, occurrence queries,
//! reminder lead times, collection ordering, and the German holiday and
//! observance tables.
//!
//! All queries take "today" (or "now") as an explicit argument; nothing in
//! this crate reads the system clock.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Legacy 16-bit frequency code packing.
pub mod codec;

/// The `Event` type and its occurrence queries.
pub mod event;

/// Recurrence rules.
pub mod frequency;

/// German holidays and observances.
pub mod holidays;

/// Pure helpers over event collections.
pub mod ops;

/// Reminder lead-time codes.
pub mod reminder;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use event::{Event, HolidayClass};
pub use frequency::Frequency;
pub use holidays::{Holiday, HolidayFlags};
pub use reminder::Reminder;
