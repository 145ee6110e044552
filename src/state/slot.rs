//! Slot occupancy state.
//!
//! Each slot is a two-state machine; the occupant data lives inside the
//! `Occupied` variant, so "fields present iff occupied" holds by
//! construction rather than by convention.
//!
//! ```text
//! ┌────────┐      occupy      ┌──────────┐
//! │ Vacant ├─────────────────►│ Occupied │
//! │        │◄─────────────────┤          │
//! └────────┘      vacate      └──────────┘
//! ```

use park_proto::VehicleKind;

/// The vehicle held by an occupied slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupant {
    /// Registration plate, stored verbatim (never validated at park time).
    pub registration: String,
    /// Colour token, matched case-sensitively by queries.
    pub color: String,
    /// Vehicle category.
    pub vehicle: VehicleKind,
}

/// Occupancy state of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SlotState {
    /// No vehicle present.
    #[default]
    Vacant,
    /// A vehicle is parked here.
    Occupied(Occupant),
}

/// One unit of parking capacity.
///
/// The number is 1-based, unique within a lot, and never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    number: u32,
    state: SlotState,
}

impl Slot {
    /// Create a vacant slot with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            state: SlotState::Vacant,
        }
    }

    /// The slot's number.
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Whether the slot holds no vehicle.
    pub fn is_vacant(&self) -> bool {
        matches!(self.state, SlotState::Vacant)
    }

    /// The current occupant, if any.
    pub fn occupant(&self) -> Option<&Occupant> {
        match &self.state {
            SlotState::Vacant => None,
            SlotState::Occupied(occupant) => Some(occupant),
        }
    }

    /// Park a vehicle here. Callers pick a vacant slot first; occupying a
    /// held slot is a caller bug.
    pub fn occupy(&mut self, occupant: Occupant) {
        debug_assert!(self.is_vacant(), "occupy on a held slot");
        self.state = SlotState::Occupied(occupant);
    }

    /// Clear the slot, returning the evicted occupant. Vacating an already
    /// vacant slot returns `None` and changes nothing.
    pub fn vacate(&mut self) -> Option<Occupant> {
        match std::mem::replace(&mut self.state, SlotState::Vacant) {
            SlotState::Occupied(occupant) => Some(occupant),
            SlotState::Vacant => None,
        }
    }
}
