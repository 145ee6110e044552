//! Typed protocol replies.
//!
//! Every line the daemon can emit is a [`Reply`] variant, rendered through
//! `Display`. The texts are a compatibility surface: scripts driving the
//! daemon match on them byte for byte, so they must never drift.

use std::fmt;

use crate::vehicle::VehicleKind;

/// One row of `status` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRow {
    /// Slot number, 1-based.
    pub slot: u32,
    /// Registration of the parked vehicle.
    pub registration: String,
    /// Vehicle colour as given at park time.
    pub color: String,
    /// Vehicle category.
    pub vehicle: VehicleKind,
}

impl fmt::Display for StatusRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.slot, self.registration, self.vehicle, self.color
        )
    }
}

/// A protocol response, one per command outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The lot was (re)created with the given capacity.
    LotCreated {
        /// Number of slots the lot was built with.
        capacity: u32,
    },
    /// A vehicle was parked in the given slot.
    Allocated {
        /// Slot the vehicle went into.
        slot: u32,
    },
    /// No vacant slot is left.
    LotFull,
    /// The vehicle category is not an accepted one.
    UnsupportedVehicle,
    /// A slot was vacated.
    SlotFreed {
        /// Slot that was vacated.
        slot: u32,
    },
    /// The slot number is out of range or the slot holds no vehicle.
    VacantOrInvalid,
    /// Tabular overview of every occupied slot.
    Status {
        /// One row per occupied slot, in ascending slot order.
        rows: Vec<StatusRow>,
    },
    /// Count of occupied slots for one vehicle category.
    VehicleCount {
        /// Number of matching vehicles.
        count: usize,
    },
    /// Registrations matching a query, in slot order.
    Registrations(Vec<String>),
    /// Slot numbers matching a query, in slot order.
    SlotNumbers(Vec<u32>),
    /// The slot holding a looked-up registration.
    SlotLocated {
        /// Slot whose occupant carries the registration.
        slot: u32,
    },
    /// Registration lookup missed.
    NotFound,
    /// A parity query hit a registration without a numeric segment.
    MalformedRegistration {
        /// The registration that failed to parse.
        registration: String,
    },
    /// Unknown command verb or unusable arguments.
    InvalidCommand,
    /// A command needing the lot arrived before `create_parking_lot`.
    LotNotCreated,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LotCreated { capacity } => {
                write!(f, "Created a parking lot with {capacity} slots")
            }
            Self::Allocated { slot } => write!(f, "Allocated slot number: {slot}"),
            Self::LotFull => f.write_str("Sorry, parking lot is full"),
            Self::UnsupportedVehicle => f.write_str("Only Mobil and Motor are allowed"),
            Self::SlotFreed { slot } => write!(f, "Slot number {slot} is free"),
            Self::VacantOrInvalid => {
                f.write_str("Slot is already free or invalid slot number")
            }
            Self::Status { rows } => {
                // The header carries five tab-separated labels while rows
                // carry four fields. Downstream consumers match the exact
                // bytes, so the mismatch stays.
                f.write_str("Slot\tNo.\t\tType\t\tRegistration No\tColour")?;
                for row in rows {
                    write!(f, "\n{row}")?;
                }
                Ok(())
            }
            Self::VehicleCount { count } => write!(f, "{count}"),
            Self::Registrations(regs) => write_joined(f, regs),
            Self::SlotNumbers(slots) => write_joined(f, slots),
            Self::SlotLocated { slot } => write!(f, "{slot}"),
            Self::NotFound => f.write_str("Not found"),
            Self::MalformedRegistration { registration } => {
                write!(f, "Malformed registration number: {registration}")
            }
            Self::InvalidCommand => f.write_str("Invalid command"),
            Self::LotNotCreated => f.write_str("Parking lot is not created yet."),
        }
    }
}

/// Comma-join a list. An empty list renders as an empty string, which the
/// session still terminates with a newline: no-match queries print a blank
/// line rather than nothing.
fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    let mut sep = "";
    for item in items {
        f.write_str(sep)?;
        write!(f, "{item}")?;
        sep = ", ";
    }
    Ok(())
}
