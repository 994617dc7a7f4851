//! Error types for bizcal.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.

use thiserror::Error;

/// The top-level error type used throughout bizcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An office id did not resolve in the configuration snapshot.
    #[error("unknown office: {0}")]
    UnknownOffice(String),

    /// The office configuration is malformed or degenerate, e.g. a calendar
    /// with no working weekday at all.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A textual date, time, or document could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` for [`Error::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration(_))
    }

    /// Return `true` for [`Error::UnknownOffice`].
    pub fn is_unknown_office(&self) -> bool {
        matches!(self, Error::UnknownOffice(_))
    }
}

/// Shorthand `Result` type used throughout bizcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;
