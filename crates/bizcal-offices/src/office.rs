//! `OfficeLocation` — a regional office and its business calendar.

use bizcal_core::errors::{Error, Result};
use bizcal_time::{Calendar, Date};
use serde::{Deserialize, Serialize};

use crate::business_hours::BusinessHours;
use crate::deadline::{adjust_deadline, DeadlineAdjustment};
use crate::escalation::EscalationRules;
use crate::holiday::{self, Holiday};

/// A named office with its own timezone, weekly hours, and holidays.
///
/// Dates passed to the [`Calendar`] methods are calendar days in the
/// office's own `timezone`; no conversion is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficeLocation {
    /// Identifier, unique within a directory.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Region or state.
    #[serde(default)]
    pub region: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// IANA timezone name, e.g. `"Europe/London"`.
    #[serde(default)]
    pub timezone: String,
    /// Weekly opening hours.
    pub business_hours: BusinessHours,
    /// Holidays observed by the office.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    /// Deadline extension policy.
    #[serde(default)]
    pub escalation_rules: EscalationRules,
}

impl OfficeLocation {
    /// Create an office with the given hours, no holidays, and no deadline
    /// extension.
    pub fn new(id: impl Into<String>, name: impl Into<String>, business_hours: BusinessHours) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            country: String::new(),
            region: String::new(),
            city: String::new(),
            timezone: String::new(),
            business_hours,
            holidays: Vec::new(),
            escalation_rules: EscalationRules::default(),
        }
    }

    /// Set country, region, city, and timezone.
    pub fn with_location(
        mut self,
        country: impl Into<String>,
        region: impl Into<String>,
        city: impl Into<String>,
        timezone: impl Into<String>,
    ) -> Self {
        self.country = country.into();
        self.region = region.into();
        self.city = city.into();
        self.timezone = timezone.into();
        self
    }

    /// Add a holiday.
    pub fn with_holiday(mut self, holiday: Holiday) -> Self {
        self.holidays.push(holiday);
        self
    }

    /// Replace the escalation rules.
    pub fn with_escalation_rules(mut self, rules: EscalationRules) -> Self {
        self.escalation_rules = rules;
        self
    }

    /// Adjust `deadline` under this office's escalation rules.
    pub fn adjust_deadline(&self, deadline: Date) -> Result<DeadlineAdjustment> {
        adjust_deadline(deadline, self, &self.escalation_rules)
    }

    /// Check the office configuration.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::Configuration(format!(
                "office '{}' has an empty id",
                self.name
            )));
        }
        if self.escalation_rules.fallback_offices.contains(&self.id) {
            return Err(Error::Configuration(format!(
                "office {} lists itself as a fallback",
                self.id
            )));
        }
        self.business_hours
            .validate()
            .map_err(|e| match e {
                Error::Configuration(msg) => {
                    Error::Configuration(format!("office {}: {msg}", self.id))
                }
                other => other,
            })
    }
}

impl Calendar for OfficeLocation {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_working_weekday(&self, date: Date) -> bool {
        self.business_hours.is_working_weekday(date.weekday())
    }

    fn is_holiday(&self, date: Date) -> bool {
        holiday::is_holiday(date, &self.holidays)
    }

    fn has_working_weekdays(&self) -> bool {
        self.business_hours.working_weekday_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayType;
    use bizcal_time::TimeOfDay;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn london() -> OfficeLocation {
        let hours = BusinessHours::standard_week(
            TimeOfDay::new(9, 0).unwrap(),
            TimeOfDay::new(17, 30).unwrap(),
        );
        OfficeLocation::new("ldn", "London", hours)
            .with_location("United Kingdom", "England", "London", "Europe/London")
            .with_holiday(Holiday::recurring(
                "xmas",
                "Christmas Day",
                date(2020, 12, 25),
                HolidayType::National,
            ))
    }

    #[test]
    fn office_is_a_calendar() {
        let office = london();
        assert_eq!(office.name(), "London");
        assert!(office.is_business_day(date(2024, 12, 24)));
        assert!(office.is_holiday(date(2024, 12, 25)));
        assert!(!office.is_business_day(date(2024, 12, 25)));
        assert!(!office.is_working_weekday(date(2024, 12, 21)));
        assert!(office.validate().is_ok());
    }

    #[test]
    fn holiday_on_weekend_is_still_a_holiday() {
        // 2022-12-25 is a Sunday
        let office = london();
        assert!(office.is_holiday(date(2022, 12, 25)));
        assert!(!office.is_working_weekday(date(2022, 12, 25)));
        assert!(office.holiday_list(date(2022, 12, 1), date(2022, 12, 31)).is_empty());
    }

    #[test]
    fn validate_rejects_bad_offices() {
        let mut office = london();
        office.id = " ".into();
        assert!(office.validate().unwrap_err().is_configuration());

        let mut office = london();
        office.escalation_rules.fallback_offices.push("ldn".into());
        assert!(office.validate().is_err());

        let mut office = london();
        office.business_hours.standard.pop();
        let err = office.validate().unwrap_err();
        assert!(err.to_string().contains("office ldn"), "{err}");
    }
}
