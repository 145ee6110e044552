//! Lot state management.
//!
//! Contains the slot registry and its entities.

mod lot;
mod slot;

pub use lot::ParkingLot;
pub use slot::{Occupant, Slot};
