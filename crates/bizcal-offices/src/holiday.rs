//! Holidays and holiday matching.
//!
//! A holiday is either a fixed calendar date or a recurring one.  For a
//! recurring holiday only the month and day of the stored date matter; the
//! year is a placeholder.  A recurring February 29 therefore only matches in
//! leap years.

use std::collections::BTreeSet;

use bizcal_time::Date;
use serde::{Deserialize, Serialize};

/// Category of a holiday.  Informational only: matching ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    /// Country-wide public holiday.
    National,
    /// State or regional public holiday.
    Regional,
    /// Company-specific closure.
    Company,
    /// Religious observance.
    Religious,
}

/// A named non-working date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    /// Identifier, unique within the configuration store.
    pub id: String,
    /// Display name, e.g. `"Christmas Day"`.
    pub name: String,
    /// The date; a template when `is_recurring` is set.
    pub date: Date,
    /// Whether the holiday repeats every year on the same month and day.
    pub is_recurring: bool,
    /// Category.
    #[serde(rename = "type")]
    pub kind: HolidayType,
    /// Offices the holiday was declared for.  Empty means all offices.
    #[serde(default)]
    pub affected_offices: BTreeSet<String>,
}

impl Holiday {
    /// A one-off holiday on `date`.
    pub fn fixed(id: impl Into<String>, name: impl Into<String>, date: Date, kind: HolidayType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            date,
            is_recurring: false,
            kind,
            affected_offices: BTreeSet::new(),
        }
    }

    /// A holiday repeating every year on the month and day of `template`.
    pub fn recurring(
        id: impl Into<String>,
        name: impl Into<String>,
        template: Date,
        kind: HolidayType,
    ) -> Self {
        Self {
            is_recurring: true,
            ..Self::fixed(id, name, template, kind)
        }
    }

    /// Restrict the holiday to the given offices.
    pub fn for_offices<I, S>(mut self, offices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.affected_offices = offices.into_iter().map(Into::into).collect();
        self
    }

    /// Return `true` if the holiday falls on `date`.
    pub fn matches(&self, date: Date) -> bool {
        if self.is_recurring {
            let (_, m, d) = self.date.ymd();
            let (_, dm, dd) = date.ymd();
            m == dm && d == dd
        } else {
            self.date == date
        }
    }

    /// Return `true` if the holiday was declared for `office_id`.
    pub fn applies_to(&self, office_id: &str) -> bool {
        self.affected_offices.is_empty() || self.affected_offices.contains(office_id)
    }
}

/// Return `true` if any of `holidays` falls on `date`.
pub fn is_holiday(date: Date, holidays: &[Holiday]) -> bool {
    holidays.iter().any(|h| h.matches(date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_holiday_matches_only_its_year() {
        let h = Holiday::fixed("h1", "Founders Day", date(2024, 3, 15), HolidayType::Company);
        assert!(h.matches(date(2024, 3, 15)));
        assert!(!h.matches(date(2025, 3, 15)));
        assert!(!h.matches(date(2024, 3, 16)));
    }

    #[test]
    fn recurring_holiday_ignores_year() {
        let h = Holiday::recurring("xmas", "Christmas Day", date(2024, 12, 25), HolidayType::National);
        assert!(h.matches(date(2024, 12, 25)));
        assert!(h.matches(date(2030, 12, 25)));
        assert!(h.matches(date(1999, 12, 25)));
        assert!(!h.matches(date(2030, 12, 24)));
    }

    #[test]
    fn recurring_leap_day_only_in_leap_years() {
        let h = Holiday::recurring("leap", "Leap Day", date(2024, 2, 29), HolidayType::Company);
        assert!(h.matches(date(2028, 2, 29)));
        assert!(!h.matches(date(2025, 2, 28)));
        assert!(!h.matches(date(2025, 3, 1)));
    }

    #[test]
    fn empty_list_has_no_holidays() {
        assert!(!is_holiday(date(2024, 12, 25), &[]));
    }

    #[test]
    fn affected_offices() {
        let all = Holiday::fixed("h", "Closure", date(2024, 5, 1), HolidayType::Company);
        assert!(all.applies_to("ldn"));
        let some = all.clone().for_offices(["ldn", "par"]);
        assert!(some.applies_to("par"));
        assert!(!some.applies_to("nyc"));
    }

    #[test]
    fn deserializes_store_format() {
        let json = r#"{
            "id": "h-1",
            "name": "Christmas Day",
            "date": "2024-12-25",
            "isRecurring": true,
            "type": "religious",
            "affectedOffices": ["ldn"]
        }"#;
        let h: Holiday = serde_json::from_str(json).unwrap();
        assert_eq!(h.kind, HolidayType::Religious);
        assert!(h.is_recurring);
        assert!(h.applies_to("ldn"));
        assert!(h.matches(date(2027, 12, 25)));
    }
}
