//! `Calendar` trait and the weekends-only reference calendar.
//!
//! A calendar knows two independent things about a date: whether its
//! weekday is a working weekday, and whether the date is a holiday.  A
//! *business day* is a working weekday that is not a holiday; everything
//! else in this module is derived from those two predicates.

use bizcal_core::errors::{Error, Result};
use tracing::warn;

use crate::date::Date;

/// Upper bound, in calendar days, on any forward or backward walk looking
/// for a business day.  A calendar with no business day inside this window
/// is treated as misconfigured.
pub const MAX_SEARCH_DAYS: u32 = 366;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"London Office"`).
    fn name(&self) -> &str;

    /// Return `true` if the weekday of `date` is a working weekday.
    fn is_working_weekday(&self, date: Date) -> bool;

    /// Return `true` if `date` matches one of the calendar's holidays.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` is a working weekday and not a holiday.
    fn is_business_day(&self, date: Date) -> bool {
        self.is_working_weekday(date) && !self.is_holiday(date)
    }

    /// Return `false` when no weekday at all is a working weekday.
    fn has_working_weekdays(&self) -> bool {
        // Any seven consecutive days cover every weekday once.
        Date::MIN
            .range_inclusive(Date::MIN + 6)
            .any(|d| self.is_working_weekday(d))
    }

    /// Count the business days in the inclusive range `[start, end]`.
    ///
    /// An inverted range (`start > end`) counts as empty and returns 0.
    fn business_days_between(&self, start: Date, end: Date) -> u32 {
        if start > end {
            warn!(
                calendar = self.name(),
                %start,
                %end,
                "inverted date range, counting zero business days"
            );
            return 0;
        }
        start
            .range_inclusive(end)
            .filter(|&d| self.is_business_day(d))
            .count() as u32
    }

    /// Look for the first business day strictly after `date`, examining at
    /// most `limit` calendar days.
    ///
    /// Returns `Ok(None)` if none of the examined days is a business day.
    fn next_business_day_within(&self, date: Date, limit: u32) -> Result<Option<Date>> {
        let mut d = date;
        for _ in 0..limit {
            d = d.succ()?;
            if self.is_business_day(d) {
                return Ok(Some(d));
            }
        }
        Ok(None)
    }

    /// Return the first business day strictly after `date`.
    ///
    /// # Errors
    /// [`Error::Configuration`] if no business day exists within
    /// [`MAX_SEARCH_DAYS`] days, which covers calendars with no working
    /// weekday at all.
    fn next_business_day(&self, date: Date) -> Result<Date> {
        if !self.has_working_weekdays() {
            return Err(Error::Configuration(format!(
                "{} has no working weekdays",
                self.name()
            )));
        }
        self.next_business_day_within(date, MAX_SEARCH_DAYS)?
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "{}: no business day within {MAX_SEARCH_DAYS} days after {date}",
                    self.name()
                ))
            })
    }

    /// Move `date` by `n` business days (backwards when `n < 0`).
    ///
    /// # Errors
    /// [`Error::Configuration`] if any single step has to cross more than
    /// [`MAX_SEARCH_DAYS`] calendar days.
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        for _ in 0..n.unsigned_abs() {
            let mut walked = 0;
            loop {
                date = date.add_days(step)?;
                walked += 1;
                if self.is_business_day(date) {
                    break;
                }
                if walked >= MAX_SEARCH_DAYS {
                    return Err(Error::Configuration(format!(
                        "{}: no business day within {MAX_SEARCH_DAYS} days of {date}",
                        self.name()
                    )));
                }
            }
        }
        Ok(date)
    }

    /// Collect the holidays in `[from, to]` that fall on working weekdays.
    fn holiday_list(&self, from: Date, to: Date) -> Vec<Date> {
        from.range_inclusive(to)
            .filter(|&d| self.is_working_weekday(d) && self.is_holiday(d))
            .collect()
    }
}

/// A calendar that treats only Saturdays and Sundays as non-working days,
/// with no holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_working_weekday(&self, date: Date) -> bool {
        !date.weekday().is_weekend()
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}
