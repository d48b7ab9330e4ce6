//! Error types for kalender.
//!
//! Every fallible operation across the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  Invalid explicit input
//! (a 32nd of January, an interval count of zero, a malformed legacy code)
//! is rejected at construction time; the absence of a result that may
//! legitimately not exist (e.g. no occurrence within the search window) is
//! expressed as `Option`, not as an error.

use thiserror::Error;

/// The top-level error type used throughout kalender.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Invalid calendar-date fields, or date arithmetic that would leave
    /// the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid time-of-day fields.
    #[error("time error: {0}")]
    Time(String),

    /// Invalid recurrence rule: out-of-range constructor arguments or a
    /// malformed legacy frequency code.
    #[error("frequency error: {0}")]
    Frequency(String),
}

/// Shorthand `Result` type used throughout kalender.
pub type Result<T, E = Error> = std::result::Result<T, E>;
