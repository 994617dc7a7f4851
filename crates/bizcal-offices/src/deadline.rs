//! Deadline adjustment policy.
//!
//! A deadline that lands on a non-business day is pushed forward to the next
//! business day when the escalation rules ask for it, but never by more than
//! `max_extension_days` calendar days.  When the cap is hit the result is the
//! deadline moved exactly to the cap, flagged as [`capped`].
//!
//! [`capped`]: DeadlineAdjustment::capped

use bizcal_core::errors::{Error, Result};
use bizcal_time::{Calendar, Date, MAX_SEARCH_DAYS};
use tracing::debug;

use crate::escalation::EscalationRules;

/// Outcome of [`adjust_deadline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineAdjustment {
    /// The deadline as requested.
    pub original: Date,
    /// The deadline to use.
    pub date: Date,
    /// Calendar days between `original` and `date`.
    pub days_extended: u32,
    /// Set when no business day was found within `max_extension_days`, in
    /// which case `date` is the original deadline plus the cap.
    pub capped: bool,
}

impl DeadlineAdjustment {
    fn unchanged(deadline: Date) -> Self {
        Self {
            original: deadline,
            date: deadline,
            days_extended: 0,
            capped: false,
        }
    }

    /// Return `true` if the deadline moved.
    pub fn was_adjusted(&self) -> bool {
        self.date != self.original
    }
}

/// Adjust `deadline` against `calendar` under `rules`.
///
/// * A business day is returned unchanged.
/// * With neither extension flag set, the deadline is returned unchanged.
/// * Otherwise the first business day strictly after the deadline is used,
///   provided it is at most `max_extension_days` away.  Either flag extends
///   past any non-business day, weekend or holiday.
///
/// # Errors
/// [`Error::Configuration`] when the calendar has no working weekday, or
/// when the cap exceeds [`MAX_SEARCH_DAYS`] and no business day exists
/// within that window.  [`Error::Date`] if the walk leaves the date range.
pub fn adjust_deadline<C>(deadline: Date, calendar: &C, rules: &EscalationRules) -> Result<DeadlineAdjustment>
where
    C: Calendar + ?Sized,
{
    if calendar.is_business_day(deadline) || !rules.extends_any() {
        return Ok(DeadlineAdjustment::unchanged(deadline));
    }
    if !calendar.has_working_weekdays() {
        return Err(Error::Configuration(format!(
            "{} has no working weekdays",
            calendar.name()
        )));
    }

    let limit = rules.max_extension_days.min(MAX_SEARCH_DAYS);
    if let Some(date) = calendar.next_business_day_within(deadline, limit)? {
        return Ok(DeadlineAdjustment {
            original: deadline,
            date,
            days_extended: deadline.days_between(date) as u32,
            capped: false,
        });
    }
    if rules.max_extension_days > MAX_SEARCH_DAYS {
        return Err(Error::Configuration(format!(
            "{}: no business day within {MAX_SEARCH_DAYS} days after {deadline}",
            calendar.name()
        )));
    }

    let date = deadline.add_days(rules.max_extension_days as i32)?;
    debug!(
        calendar = calendar.name(),
        %deadline,
        %date,
        max_extension_days = rules.max_extension_days,
        "deadline extension capped"
    );
    Ok(DeadlineAdjustment {
        original: deadline,
        date,
        days_extended: rules.max_extension_days,
        capped: true,
    })
}
