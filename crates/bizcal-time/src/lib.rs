//! # bizcal-time
//!
//! Date, weekday, and wall-clock time types, plus the [`Calendar`]
//! trait that answers business-day questions over them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the weekends-only reference calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `TimeOfDay` — an `HH:MM` wall-clock time.
pub mod time_of_day;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly, MAX_SEARCH_DAYS};
pub use date::Date;
pub use time_of_day::TimeOfDay;
pub use weekday::Weekday;
