//! Wall-clock time of day.
//!
//! Business-hour tables carry `"HH:MM"` strings with no timezone; they are
//! read in the office's own local time.

use std::str::FromStr;

use bizcal_core::errors::{Error, Result};
use bizcal_core::utilities::parse_hhmm;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An `HH:MM` wall-clock time, minute resolution.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Create a time from hour (0–23) and minute (0–59).
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(Error::InvalidArgument(format!(
                "time {hour:02}:{minute:02} out of range"
            )));
        }
        Ok(Self { hour, minute })
    }

    /// Parse an `HH:MM` string.
    pub fn parse(s: &str) -> Result<Self> {
        let (hour, minute) =
            parse_hhmm(s).ok_or_else(|| Error::Parse(format!("invalid time '{s}'")))?;
        Ok(Self { hour, minute })
    }

    /// Hour component.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Minute component.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl std::fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

impl FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TimeOfDay::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        TimeOfDay::parse(&s).map_err(serde::de::Error::custom)
    }
}
