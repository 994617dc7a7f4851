//! Weekly business-hour tables.
//!
//! A [`BusinessHours`] table holds one [`BusinessDay`] per weekday.  Only the
//! `standard` table is consulted by the calendar; seasonal overrides are kept
//! so that configuration round-trips, but are never evaluated.

use bizcal_core::errors::{Error, Result};
use bizcal_time::{Date, TimeOfDay, Weekday};
use serde::{Deserialize, Serialize};

/// Opening hours for one weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessDay {
    /// Weekday this entry describes.
    pub day: Weekday,
    /// Whether the office works on this weekday at all.
    pub is_working_day: bool,
    /// Opening time, office-local.
    #[serde(default)]
    pub start_time: TimeOfDay,
    /// Closing time, office-local.
    #[serde(default)]
    pub end_time: TimeOfDay,
    /// Start of the lunch break, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_break_start: Option<TimeOfDay>,
    /// End of the lunch break, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_break_end: Option<TimeOfDay>,
    /// Informational half-day marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_half_day: Option<bool>,
}

impl BusinessDay {
    /// A working day open from `start` to `end` with no lunch break.
    pub fn working(day: Weekday, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self {
            day,
            is_working_day: true,
            start_time: start,
            end_time: end,
            lunch_break_start: None,
            lunch_break_end: None,
            is_half_day: None,
        }
    }

    /// A non-working day.
    pub fn closed(day: Weekday) -> Self {
        Self {
            day,
            is_working_day: false,
            start_time: TimeOfDay::MIDNIGHT,
            end_time: TimeOfDay::MIDNIGHT,
            lunch_break_start: None,
            lunch_break_end: None,
            is_half_day: None,
        }
    }

    /// Add a lunch break.
    pub fn with_lunch_break(mut self, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.lunch_break_start = Some(start);
        self.lunch_break_end = Some(end);
        self
    }

    fn lunch_break(&self) -> Option<(TimeOfDay, TimeOfDay)> {
        self.lunch_break_start.zip(self.lunch_break_end)
    }

    /// Minutes the office is open on this day, lunch excluded.
    pub fn working_minutes(&self) -> u16 {
        if !self.is_working_day || self.end_time <= self.start_time {
            return 0;
        }
        let open = self.end_time.minutes_since_midnight() - self.start_time.minutes_since_midnight();
        let lunch = self
            .lunch_break()
            .filter(|(s, e)| s < e)
            .map_or(0, |(s, e)| e.minutes_since_midnight() - s.minutes_since_midnight());
        open.saturating_sub(lunch)
    }

    /// Return `true` if the office is open at `time`: inside the opening
    /// window (start inclusive, end exclusive) and outside the lunch break.
    pub fn is_open_at(&self, time: TimeOfDay) -> bool {
        if !self.is_working_day || time < self.start_time || time >= self.end_time {
            return false;
        }
        !matches!(self.lunch_break(), Some((s, e)) if time >= s && time < e)
    }

    fn validate(&self) -> Result<()> {
        if !self.is_working_day {
            return Ok(());
        }
        if self.start_time >= self.end_time {
            return Err(Error::Configuration(format!(
                "{}: opening time {} is not before closing time {}",
                self.day, self.start_time, self.end_time
            )));
        }
        match (self.lunch_break_start, self.lunch_break_end) {
            (None, None) => Ok(()),
            (Some(s), Some(e)) if self.start_time <= s && s < e && e <= self.end_time => Ok(()),
            (Some(_), Some(_)) => Err(Error::Configuration(format!(
                "{}: lunch break must lie inside {}–{}",
                self.day, self.start_time, self.end_time
            ))),
            _ => Err(Error::Configuration(format!(
                "{}: lunch break needs both a start and an end",
                self.day
            ))),
        }
    }
}

/// Seasonal override of the standard table.  Stored, never evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonalHours {
    /// Label, e.g. `"Summer hours"`.
    pub name: String,
    /// First day the override applies.
    pub start_date: Date,
    /// Last day the override applies.
    pub end_date: Date,
    /// Replacement table.
    pub hours: Vec<BusinessDay>,
}

/// An office's weekly opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    /// One entry per weekday.
    pub standard: Vec<BusinessDay>,
    /// Seasonal overrides.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasonal: Vec<SeasonalHours>,
}

impl BusinessHours {
    /// Build a table from its seven entries.
    pub fn new(standard: Vec<BusinessDay>) -> Self {
        Self {
            standard,
            seasonal: Vec::new(),
        }
    }

    /// Monday–Friday open from `start` to `end`, weekend closed.
    pub fn standard_week(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self::new(
            Weekday::ALL
                .iter()
                .map(|&w| {
                    if w.is_weekend() {
                        BusinessDay::closed(w)
                    } else {
                        BusinessDay::working(w, start, end)
                    }
                })
                .collect(),
        )
    }

    /// The entry for `weekday`, if the table has one.
    pub fn entry(&self, weekday: Weekday) -> Option<&BusinessDay> {
        self.standard.iter().find(|b| b.day == weekday)
    }

    /// Return `true` if `weekday` is flagged as a working day.
    ///
    /// A weekday without an entry counts as non-working.
    pub fn is_working_weekday(&self, weekday: Weekday) -> bool {
        self.entry(weekday).is_some_and(|b| b.is_working_day)
    }

    /// Number of distinct weekdays flagged as working.
    pub fn working_weekday_count(&self) -> usize {
        Weekday::ALL
            .iter()
            .filter(|&&w| self.is_working_weekday(w))
            .count()
    }

    /// Check the table: exactly seven entries, one per weekday, and a
    /// coherent opening window on every working day.
    pub fn validate(&self) -> Result<()> {
        if self.standard.len() != 7 {
            return Err(Error::Configuration(format!(
                "business hours need 7 entries, found {}",
                self.standard.len()
            )));
        }
        let mut seen = [false; 7];
        for entry in &self.standard {
            let slot = &mut seen[entry.day.index() as usize];
            if *slot {
                return Err(Error::Configuration(format!(
                    "duplicate business hours entry for {}",
                    entry.day
                )));
            }
            *slot = true;
            entry.validate()?;
        }
        Ok(())
    }
}
