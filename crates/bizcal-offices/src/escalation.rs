//! Escalation rules: how deadlines landing on non-business days move.

use serde::{Deserialize, Serialize};

/// Per-office deadline extension policy.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationRules {
    /// Extend deadlines that land on non-working weekdays.
    pub extend_deadlines_on_weekends: bool,
    /// Extend deadlines that land on holidays.
    pub extend_deadlines_on_holidays: bool,
    /// Maximum number of calendar days a deadline may be pushed forward.
    pub max_extension_days: u32,
    /// Offices to route to when this one is closed, in order of preference.
    #[serde(default)]
    pub fallback_offices: Vec<String>,
}

impl EscalationRules {
    /// Extend on both weekends and holidays, up to `max_extension_days`.
    pub fn extend_up_to(max_extension_days: u32) -> Self {
        Self {
            extend_deadlines_on_weekends: true,
            extend_deadlines_on_holidays: true,
            max_extension_days,
            fallback_offices: Vec::new(),
        }
    }

    /// Return `true` if either extension flag is set.
    ///
    /// The flags are not told apart: with either one set, a deadline on any
    /// non-business day is extended.
    pub fn extends_any(&self) -> bool {
        self.extend_deadlines_on_weekends || self.extend_deadlines_on_holidays
    }
}
