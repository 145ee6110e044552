//! Vehicle categories accepted by the lot protocol.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use thiserror::Error;

/// A vehicle category.
///
/// The protocol accepts exactly two category tokens, in the source locale:
/// `Mobil` (car) and `Motor` (motorcycle). Matching is case-sensitive;
/// anything else is rejected at parse time.
///
/// # Example
///
/// ```
/// use park_proto::VehicleKind;
///
/// assert_eq!("Mobil".parse(), Ok(VehicleKind::Mobil));
/// assert_eq!(VehicleKind::Motor.as_str(), "Motor");
/// assert!("mobil".parse::<VehicleKind>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    /// A car (`Mobil`).
    Mobil,
    /// A motorcycle (`Motor`).
    Motor,
}

/// Error returned when a string is not an accepted vehicle category.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vehicle kind: {0:?}")]
pub struct UnknownVehicle(pub String);

impl VehicleKind {
    /// The protocol token for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mobil => "Mobil",
            Self::Motor => "Motor",
        }
    }
}

impl FromStr for VehicleKind {
    type Err = UnknownVehicle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Mobil" => Ok(Self::Mobil),
            "Motor" => Ok(Self::Motor),
            other => Err(UnknownVehicle(other.to_string())),
        }
    }
}

impl Display for VehicleKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
