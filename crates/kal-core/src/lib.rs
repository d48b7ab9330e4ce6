//! # kal-core
//!
//! Core error definitions for kalender.
//!
//! This crate provides the foundational pieces shared across all other
//! crates in the workspace – the error hierarchy and the `Result` alias.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the shared `Result` alias.
pub mod errors;

pub use errors::{Error, Result};
