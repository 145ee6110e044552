//! The slot registry.
//!
//! A [`ParkingLot`] owns a fixed run of slots numbered `1..=capacity` and
//! answers every allocation and query the command surface exposes. All
//! operations are linear scans in slot order; capacities are small and the
//! ascending order is observable through every list-shaped reply, so the
//! scan order is part of the contract, not an implementation detail.

use park_proto::{plate_number, Parity};

use crate::error::LotError;
use crate::state::{Occupant, Slot};

/// A fixed-capacity parking lot.
///
/// Slot `n` lives at index `n - 1`; the collection never grows or shrinks
/// after construction.
#[derive(Debug, Clone)]
pub struct ParkingLot {
    slots: Vec<Slot>,
}

impl ParkingLot {
    /// Create a lot with slots numbered `1..=capacity`, all vacant.
    ///
    /// Capacity 0 is allowed and yields a lot that reports full on every
    /// allocation.
    pub fn new(capacity: u32) -> Self {
        Self {
            slots: (1..=capacity).map(Slot::new).collect(),
        }
    }

    /// Total number of slots, vacant or not.
    pub fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    /// Park a vehicle in the lowest-numbered vacant slot.
    ///
    /// Fullness is checked before the vehicle kind: a full lot reports
    /// [`LotError::Full`] even when the kind is unknown. That ordering is
    /// visible on the wire and must not change. On success exactly one
    /// slot changes state.
    pub fn allocate(
        &mut self,
        registration: &str,
        color: &str,
        vehicle: &str,
    ) -> Result<u32, LotError> {
        let slot = self
            .slots
            .iter_mut()
            .find(|slot| slot.is_vacant())
            .ok_or(LotError::Full)?;

        let vehicle = vehicle
            .parse()
            .map_err(|_| LotError::UnsupportedVehicle)?;

        slot.occupy(Occupant {
            registration: registration.to_string(),
            color: color.to_string(),
            vehicle,
        });
        Ok(slot.number())
    }

    /// Vacate a slot by number, returning the evicted occupant.
    ///
    /// An out-of-range number and an already vacant slot are the same
    /// error; neither mutates anything.
    pub fn release(&mut self, slot_number: u32) -> Result<Occupant, LotError> {
        let slot = slot_number
            .checked_sub(1)
            .and_then(|index| self.slots.get_mut(index as usize));
        match slot {
            Some(slot) => slot.vacate().ok_or(LotError::VacantOrInvalid),
            None => Err(LotError::VacantOrInvalid),
        }
    }

    /// All occupied slots in ascending slot order, recomputed on every
    /// call.
    pub fn occupied(&self) -> impl Iterator<Item = (u32, &Occupant)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.occupant().map(|occupant| (slot.number(), occupant)))
    }

    /// Count occupied slots whose vehicle category token equals `kind`
    /// exactly. Unknown tokens match nothing and count 0.
    pub fn count_by_vehicle(&self, kind: &str) -> usize {
        self.occupied()
            .filter(|(_, occupant)| occupant.vehicle.as_str() == kind)
            .count()
    }

    /// Registrations of occupied slots whose plate number has the given
    /// parity, in slot order.
    ///
    /// Every occupied slot's plate is parsed, not just the ones that end
    /// up matching; the first malformed plate fails the whole query and
    /// no partial list escapes.
    pub fn registrations_with_parity(&self, parity: Parity) -> Result<Vec<String>, LotError> {
        let mut matching = Vec::new();
        for (_, occupant) in self.occupied() {
            let number = plate_number(&occupant.registration)?;
            if parity.matches(number) {
                matching.push(occupant.registration.clone());
            }
        }
        Ok(matching)
    }

    /// Registrations of occupied slots with this exact colour, slot order.
    pub fn registrations_by_color(&self, color: &str) -> Vec<String> {
        self.occupied()
            .filter(|(_, occupant)| occupant.color == color)
            .map(|(_, occupant)| occupant.registration.clone())
            .collect()
    }

    /// Slot numbers of occupied slots with this exact colour, slot order.
    pub fn slot_numbers_by_color(&self, color: &str) -> Vec<u32> {
        self.occupied()
            .filter(|(_, occupant)| occupant.color == color)
            .map(|(number, _)| number)
            .collect()
    }

    /// The lowest-numbered occupied slot holding this exact registration.
    pub fn slot_for_registration(&self, registration: &str) -> Option<u32> {
        self.occupied()
            .find(|(_, occupant)| occupant.registration == registration)
            .map(|(number, _)| number)
    }
}
