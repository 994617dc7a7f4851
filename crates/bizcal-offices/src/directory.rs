//! Snapshot of office configuration addressed by office id.
//!
//! The configuration store hands over its offices as a JSON document, either
//! a bare array or an object with an `offices` array.  The directory
//! validates them once and is read-only afterwards, so it can be shared
//! between threads freely.

use std::collections::HashMap;
use std::io::Read;

use bizcal_core::errors::{Error, Result};
use bizcal_time::{Calendar, Date};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::deadline::DeadlineAdjustment;
use crate::office::OfficeLocation;

#[derive(Deserialize)]
struct Wrapped {
    offices: Vec<OfficeLocation>,
}

/// Deserialize either document shape, chosen by its first character so that
/// serde reports field errors with their line and column.
fn parse_offices(json: &str) -> Result<Vec<OfficeLocation>> {
    let parsed = if json.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<OfficeLocation>>(json)
    } else {
        serde_json::from_str::<Wrapped>(json).map(|w| w.offices)
    };
    parsed.map_err(|e| Error::Parse(format!("office configuration: {e}")))
}

/// An immutable set of offices keyed by id, in configuration order.
#[derive(Debug, Clone, Default)]
pub struct OfficeDirectory {
    offices: Vec<OfficeLocation>,
    index: HashMap<String, usize>,
}

impl OfficeDirectory {
    /// Build a directory, validating every office.
    ///
    /// # Errors
    /// [`Error::Configuration`] for an invalid office or a duplicate id.
    pub fn new(offices: Vec<OfficeLocation>) -> Result<Self> {
        let mut index = HashMap::with_capacity(offices.len());
        for (i, office) in offices.iter().enumerate() {
            office.validate()?;
            if index.insert(office.id.clone(), i).is_some() {
                return Err(Error::Configuration(format!(
                    "duplicate office id {}",
                    office.id
                )));
            }
        }
        for office in &offices {
            for fallback in &office.escalation_rules.fallback_offices {
                if !index.contains_key(fallback) {
                    warn!(office = %office.id, %fallback, "fallback office not in directory");
                }
            }
        }
        debug!(offices = offices.len(), "office directory loaded");
        Ok(Self { offices, index })
    }

    /// Load a directory from the configuration store's JSON export.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(parse_offices(json)?)
    }

    /// Load a directory from a reader yielding the JSON export.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader
            .read_to_string(&mut json)
            .map_err(|e| Error::Parse(format!("office configuration: {e}")))?;
        Self::from_json(&json)
    }

    /// Look up an office.
    ///
    /// # Errors
    /// [`Error::UnknownOffice`] if `id` is not in the directory.
    pub fn get(&self, id: &str) -> Result<&OfficeLocation> {
        self.index
            .get(id)
            .map(|&i| &self.offices[i])
            .ok_or_else(|| Error::UnknownOffice(id.to_owned()))
    }

    /// Office ids in configuration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.offices.iter().map(|o| o.id.as_str())
    }

    /// All offices in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &OfficeLocation> {
        self.offices.iter()
    }

    /// Number of offices.
    pub fn len(&self) -> usize {
        self.offices.len()
    }

    /// Return `true` if the directory holds no office.
    pub fn is_empty(&self) -> bool {
        self.offices.is_empty()
    }

    // ── Id-addressed calendar queries ────────────────────────────────────────

    /// Whether `date` is a holiday at office `id`.
    pub fn is_holiday(&self, id: &str, date: Date) -> Result<bool> {
        Ok(self.get(id)?.is_holiday(date))
    }

    /// Whether the weekday of `date` is a working weekday at office `id`.
    pub fn is_working_weekday(&self, id: &str, date: Date) -> Result<bool> {
        Ok(self.get(id)?.is_working_weekday(date))
    }

    /// Whether `date` is a business day at office `id`.
    pub fn is_business_day(&self, id: &str, date: Date) -> Result<bool> {
        Ok(self.get(id)?.is_business_day(date))
    }

    /// Business days at office `id` in the inclusive range `[start, end]`.
    pub fn count_business_days(&self, id: &str, start: Date, end: Date) -> Result<u32> {
        Ok(self.get(id)?.business_days_between(start, end))
    }

    /// First business day at office `id` strictly after `date`.
    pub fn next_business_day(&self, id: &str, date: Date) -> Result<Date> {
        self.get(id)?.next_business_day(date)
    }

    /// Adjust `deadline` under office `id`'s escalation rules.
    pub fn adjust_deadline(&self, id: &str, deadline: Date) -> Result<DeadlineAdjustment> {
        self.get(id)?.adjust_deadline(deadline)
    }

    /// Holidays on working weekdays at office `id` in `[from, to]`.
    pub fn holiday_list(&self, id: &str, from: Date, to: Date) -> Result<Vec<Date>> {
        Ok(self.get(id)?.holiday_list(from, to))
    }

    /// Find an office open on `date`: office `id` itself, or else the first
    /// of its fallback offices that is.
    ///
    /// Returns `Ok(None)` when neither the office nor any fallback is open.
    /// Fallback ids missing from the directory are skipped.
    pub fn resolve_open_office(&self, id: &str, date: Date) -> Result<Option<&OfficeLocation>> {
        let office = self.get(id)?;
        if office.is_business_day(date) {
            return Ok(Some(office));
        }
        for fallback in &office.escalation_rules.fallback_offices {
            match self.get(fallback) {
                Ok(candidate) if candidate.is_business_day(date) => {
                    debug!(office = %id, fallback = %candidate.id, %date, "routing to fallback office");
                    return Ok(Some(candidate));
                }
                Ok(_) => {}
                Err(_) => {
                    warn!(office = %id, %fallback, "skipping unknown fallback office");
                }
            }
        }
        Ok(None)
    }
}
