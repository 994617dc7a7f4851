//! Miscellaneous utilities.

/// Parsers for `YYYY-MM-DD` dates and `HH:MM` wall-clock times.
pub mod data_parsers;

pub use data_parsers::{parse_hhmm, parse_iso_date};
