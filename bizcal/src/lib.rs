//! # bizcal
//!
//! Regional business calendars: which days an office works, which dates are
//! holidays, and where a deadline should land when it falls on a day off.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use bizcal::offices::{BusinessHours, EscalationRules, Holiday, HolidayType, OfficeLocation};
//! use bizcal::time::{Calendar, Date, TimeOfDay};
//!
//! let hours = BusinessHours::standard_week(TimeOfDay::new(9, 0)?, TimeOfDay::new(17, 0)?);
//! let office = OfficeLocation::new("ldn", "London", hours)
//!     .with_holiday(Holiday::recurring(
//!         "xmas",
//!         "Christmas Day",
//!         Date::parse("2024-12-25")?,
//!         HolidayType::National,
//!     ))
//!     .with_escalation_rules(EscalationRules::extend_up_to(5));
//!
//! let christmas = Date::parse("2030-12-25")?;
//! assert!(office.is_holiday(christmas));
//! assert_eq!(office.adjust_deadline(christmas)?.date, Date::parse("2030-12-26")?);
//! # Ok::<(), bizcal::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsers.
pub use bizcal_core as core;

/// Dates, weekdays, times, and the `Calendar` trait.
pub use bizcal_time as time;

/// Office calendars, holidays, deadline adjustment, and the office directory.
pub use bizcal_offices as offices;

pub use bizcal_core::{Error, Result};
pub use bizcal_offices::{DeadlineAdjustment, OfficeDirectory, OfficeLocation};
pub use bizcal_time::{Calendar, Date};
