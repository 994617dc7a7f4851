//! # bizcal-offices
//!
//! Per-office business calendars: weekly business-hour tables, holiday
//! lists with fixed and recurring dates, escalation rules, and the deadline
//! adjustment policy built on top of them.  [`OfficeDirectory`] holds an
//! immutable snapshot of office configuration and answers questions by
//! office id.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Weekly business-hour tables.
pub mod business_hours;

/// Deadline adjustment policy.
pub mod deadline;

/// Snapshot of office configuration addressed by office id.
pub mod directory;

/// Escalation rules.
pub mod escalation;

/// Holidays and holiday matching.
pub mod holiday;

/// `OfficeLocation` — an office and its calendar.
pub mod office;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_hours::{BusinessDay, BusinessHours, SeasonalHours};
pub use deadline::{adjust_deadline, DeadlineAdjustment};
pub use directory::OfficeDirectory;
pub use escalation::EscalationRules;
pub use holiday::{is_holiday, Holiday, HolidayType};
pub use office::OfficeLocation;
