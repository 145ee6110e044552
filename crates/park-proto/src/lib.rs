//! # park-proto
//!
//! Wire-format library for the `parkd` line protocol.
//!
//! ## Features
//!
//! - Zero-copy command tokenizing with borrowed argument slices
//! - Registration-plate grammar and odd/even parity classification
//! - Typed replies with byte-exact `Display` rendering
//! - Vehicle category tokens with strict, case-sensitive parsing

#![deny(clippy::all)]
#![warn(missing_docs)]

//! ## Quick Start
//!
//! ```rust
//! use park_proto::{plate_parity, CommandRef, Parity, Reply};
//!
//! let cmd = CommandRef::parse("park KA-01-HH-1234 White Mobil").unwrap();
//! assert_eq!(cmd.name(), "park");
//! assert_eq!(cmd.arg(1), Some("White"));
//!
//! assert_eq!(plate_parity("KA-01-HH-1234").unwrap(), Parity::Odd);
//!
//! let reply = Reply::Allocated { slot: 1 };
//! assert_eq!(reply.to_string(), "Allocated slot number: 1");
//! ```

pub mod command;
pub mod error;
pub mod plate;
pub mod reply;
pub mod vehicle;

pub use self::command::CommandRef;
pub use self::error::{CommandParseError, PlateError};
pub use self::plate::{plate_number, plate_parity, Parity};
pub use self::reply::{Reply, StatusRow};
pub use self::vehicle::{UnknownVehicle, VehicleKind};
