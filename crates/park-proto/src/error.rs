//! Error types for the parkd protocol library.
//!
//! This module defines error types for command-line tokenizing failures and
//! registration-plate parsing failures.

use thiserror::Error;

/// Convenience type alias for Results using [`CommandParseError`].
pub type Result<T, E = CommandParseError> = std::result::Result<T, E>;

/// Errors encountered when tokenizing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CommandParseError {
    /// The line was empty or contained only whitespace.
    #[error("empty command line")]
    EmptyLine,
}

/// Errors encountered when parsing a registration plate.
///
/// Parity queries need the plate's numeric segment, the field after the
/// first `-`. A plate that cannot produce one is malformed, and the error
/// keeps the offending registration for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlateError {
    /// The registration has no `-`-delimited second field at all.
    #[error("registration {registration:?} has no numeric segment")]
    MissingNumber {
        /// The registration string that failed to parse.
        registration: String,
    },

    /// The second field is empty, non-numeric, or too large to represent.
    #[error("registration {registration:?} has a malformed numeric segment")]
    InvalidNumber {
        /// The registration string that failed to parse.
        registration: String,
    },
}

impl PlateError {
    /// The registration string that triggered the error.
    pub fn registration(&self) -> &str {
        match self {
            Self::MissingNumber { registration } | Self::InvalidNumber { registration } => {
                registration
            }
        }
    }
}
