//! # bizcal-core
//!
//! Foundation shared by every other crate in the workspace: the error
//! taxonomy and the small text parsers used to read dates and wall-clock
//! times out of office configuration.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types.
pub mod errors;

/// Text parsing helpers.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
