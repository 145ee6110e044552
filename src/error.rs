//! Unified error handling for parkd.
//!
//! This module provides the error hierarchy for the daemon, with automatic
//! conversions, protocol reply generation, and log labeling.

use park_proto::{PlateError, Reply};
use thiserror::Error;

// ============================================================================
// Lot Errors (registry operations)
// ============================================================================

/// Slot registry operation errors.
///
/// These represent lot-level failures that map one-to-one onto protocol
/// replies; handler code never needs to special-case them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    #[error("parking lot is full")]
    Full,

    #[error("vehicle kind is not allowed")]
    UnsupportedVehicle,

    #[error("slot is vacant or the number is invalid")]
    VacantOrInvalid,

    #[error("malformed registration: {0}")]
    MalformedPlate(#[from] PlateError),
}

impl LotError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Full => "lot_full",
            Self::UnsupportedVehicle => "unsupported_vehicle",
            Self::VacantOrInvalid => "vacant_or_invalid",
            Self::MalformedPlate(_) => "malformed_plate",
        }
    }

    /// Convert to the protocol reply a client sees.
    pub fn to_reply(&self) -> Reply {
        match self {
            Self::Full => Reply::LotFull,
            Self::UnsupportedVehicle => Reply::UnsupportedVehicle,
            Self::VacantOrInvalid => Reply::VacantOrInvalid,
            Self::MalformedPlate(plate_err) => Reply::MalformedRegistration {
                registration: plate_err.registration().to_string(),
            },
        }
    }
}

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("not enough parameters")]
    NeedMoreParams,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("parking lot not created")]
    LotMissing,

    #[error(transparent)]
    Lot(#[from] LotError),

    #[error("write error: {0}")]
    Io(#[from] std::io::Error),

    /// End the session silently (no reply line is owed)
    #[error("client quit")]
    Quit,
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams => "need_more_params",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::LotMissing => "lot_missing",
            Self::Lot(lot_err) => lot_err.error_code(),
            Self::Io(_) => "io_error",
            Self::Quit => "quit",
        }
    }

    /// Convert to a protocol reply line.
    ///
    /// Returns `None` for errors that don't warrant a client-visible reply
    /// (I/O failures, quit).
    pub fn to_reply(&self) -> Option<Reply> {
        match self {
            // A line that cannot be used as a command is just an invalid
            // command, whatever the verb was.
            Self::NeedMoreParams | Self::InvalidArgument(_) => Some(Reply::InvalidCommand),
            Self::LotMissing => Some(Reply::LotNotCreated),
            Self::Lot(lot_err) => Some(lot_err.to_reply()),

            // These errors don't get client-visible replies
            Self::Io(_) => None,
            Self::Quit => None,
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
