//! Read-only query handlers.
//!
//! This module implements the lookup commands:
//! - `type_of_vehicles <vehicle>` - count parked vehicles of a kind
//! - `registration_numbers_for_vehicles_with_odd_plate`
//! - `registration_numbers_for_vehicles_with_even_plate`
//! - `registration_numbers_for_vehicles_with_colour <colour>`
//! - `slot_numbers_for_vehicles_with_colour <colour>`
//! - `slot_number_for_registration_number <registration>`
//!
//! None of these mutate the lot. All of them require the lot to exist
//! before their arguments are considered.

use park_proto::{CommandRef, Parity, Reply};

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{require_lot, Context, Handler};

/// Handler for the type_of_vehicles command.
pub struct VehicleCountHandler;

impl Handler for VehicleCountHandler {
    fn handle(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult {
        let lot = require_lot(ctx.lot)?;
        let kind = cmd.arg(0).ok_or(HandlerError::NeedMoreParams)?;

        // An unknown kind is not an error: it simply counts zero vehicles.
        let count = lot.count_by_vehicle(kind);
        ctx.sink.send(Reply::VehicleCount { count })
    }
}

/// Handler for the odd/even plate registration queries.
///
/// One handler type serves both verbs; the registry installs it twice with
/// the parity baked in.
pub struct PlateParityHandler {
    parity: Parity,
}

impl PlateParityHandler {
    /// Handler instance for the odd-plate query.
    pub fn odd() -> Self {
        Self { parity: Parity::Odd }
    }

    /// Handler instance for the even-plate query.
    pub fn even() -> Self {
        Self {
            parity: Parity::Even,
        }
    }
}

impl Handler for PlateParityHandler {
    fn handle(&self, ctx: &mut Context<'_>, _cmd: &CommandRef<'_>) -> HandlerResult {
        let lot = require_lot(ctx.lot)?;

        // One malformed plate anywhere in the lot fails the whole query.
        let registrations = lot.registrations_with_parity(self.parity)?;
        ctx.sink.send(Reply::Registrations(registrations))
    }
}

/// Handler for the registration_numbers_for_vehicles_with_colour command.
pub struct RegistrationsByColourHandler;

impl Handler for RegistrationsByColourHandler {
    fn handle(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult {
        let lot = require_lot(ctx.lot)?;
        let color = cmd.arg(0).ok_or(HandlerError::NeedMoreParams)?;

        let registrations = lot.registrations_by_color(color);
        ctx.sink.send(Reply::Registrations(registrations))
    }
}

/// Handler for the slot_numbers_for_vehicles_with_colour command.
pub struct SlotsByColourHandler;

impl Handler for SlotsByColourHandler {
    fn handle(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult {
        let lot = require_lot(ctx.lot)?;
        let color = cmd.arg(0).ok_or(HandlerError::NeedMoreParams)?;

        let slots = lot.slot_numbers_by_color(color);
        ctx.sink.send(Reply::SlotNumbers(slots))
    }
}

/// Handler for the slot_number_for_registration_number command.
pub struct RegistrationLookupHandler;

impl Handler for RegistrationLookupHandler {
    fn handle(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult {
        let lot = require_lot(ctx.lot)?;
        let registration = cmd.arg(0).ok_or(HandlerError::NeedMoreParams)?;

        let reply = match lot.slot_for_registration(registration) {
            Some(slot) => Reply::SlotLocated { slot },
            None => Reply::NotFound,
        };
        ctx.sink.send(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LotError;
    use crate::handlers::ReplySink;
    use crate::state::ParkingLot;
    use park_proto::PlateError;

    fn run(
        handler: &dyn Handler,
        lot: &mut Option<ParkingLot>,
        line: &str,
    ) -> Result<Vec<Reply>, HandlerError> {
        let mut replies = Vec::new();
        let cmd = CommandRef::parse(line).unwrap();
        let mut ctx = Context {
            lot,
            sink: ReplySink::Capturing(&mut replies),
        };
        handler.handle(&mut ctx, &cmd)?;
        Ok(replies)
    }

    fn populated_lot() -> Option<ParkingLot> {
        // Parity comes from the second hyphen field: 01/01/02/04/01.
        let mut lot = ParkingLot::new(6);
        lot.allocate("KA-01-HH-1234", "White", "Mobil").unwrap();
        lot.allocate("KA-01-HH-9999", "White", "Mobil").unwrap();
        lot.allocate("KA-02-BB-0001", "Black", "Motor").unwrap();
        lot.allocate("KA-04-HH-7777", "Red", "Mobil").unwrap();
        lot.allocate("KA-01-HH-2701", "Blue", "Mobil").unwrap();
        Some(lot)
    }

    #[test]
    fn test_vehicle_count_by_kind() {
        let mut lot = populated_lot();
        assert_eq!(
            run(&VehicleCountHandler, &mut lot, "type_of_vehicles Mobil").unwrap(),
            vec![Reply::VehicleCount { count: 4 }]
        );
        assert_eq!(
            run(&VehicleCountHandler, &mut lot, "type_of_vehicles Motor").unwrap(),
            vec![Reply::VehicleCount { count: 1 }]
        );
        // Unknown and wrongly-cased kinds match nothing.
        assert_eq!(
            run(&VehicleCountHandler, &mut lot, "type_of_vehicles mobil").unwrap(),
            vec![Reply::VehicleCount { count: 0 }]
        );
    }

    #[test]
    fn test_odd_and_even_plate_registrations() {
        let mut lot = populated_lot();
        // KA-01-HH-1234 ends in an even number but its second field is 01,
        // so it lands in the odd bucket; the trailing digits never matter.
        assert_eq!(
            run(
                &PlateParityHandler::odd(),
                &mut lot,
                "registration_numbers_for_vehicles_with_odd_plate"
            )
            .unwrap(),
            vec![Reply::Registrations(vec![
                "KA-01-HH-1234".to_string(),
                "KA-01-HH-9999".to_string(),
                "KA-01-HH-2701".to_string(),
            ])]
        );
        assert_eq!(
            run(
                &PlateParityHandler::even(),
                &mut lot,
                "registration_numbers_for_vehicles_with_even_plate"
            )
            .unwrap(),
            vec![Reply::Registrations(vec![
                "KA-02-BB-0001".to_string(),
                "KA-04-HH-7777".to_string(),
            ])]
        );
    }

    #[test]
    fn test_malformed_plate_fails_parity_query() {
        let mut lot = populated_lot();
        lot.as_mut()
            .unwrap()
            .allocate("SCOOTER", "Green", "Motor")
            .unwrap();

        for handler in [PlateParityHandler::odd(), PlateParityHandler::even()] {
            let err = run(&handler, &mut lot, "registration_numbers_for_vehicles_with_odd_plate")
                .unwrap_err();
            assert!(matches!(
                err,
                HandlerError::Lot(LotError::MalformedPlate(PlateError::MissingNumber { .. }))
            ));
        }
    }

    #[test]
    fn test_registrations_by_colour() {
        let mut lot = populated_lot();
        assert_eq!(
            run(
                &RegistrationsByColourHandler,
                &mut lot,
                "registration_numbers_for_vehicles_with_colour White"
            )
            .unwrap(),
            vec![Reply::Registrations(vec![
                "KA-01-HH-1234".to_string(),
                "KA-01-HH-9999".to_string(),
            ])]
        );
        // Colour matching is exact, so a case mismatch returns nothing.
        assert_eq!(
            run(
                &RegistrationsByColourHandler,
                &mut lot,
                "registration_numbers_for_vehicles_with_colour white"
            )
            .unwrap(),
            vec![Reply::Registrations(Vec::new())]
        );
    }

    #[test]
    fn test_slot_numbers_by_colour() {
        let mut lot = populated_lot();
        assert_eq!(
            run(
                &SlotsByColourHandler,
                &mut lot,
                "slot_numbers_for_vehicles_with_colour White"
            )
            .unwrap(),
            vec![Reply::SlotNumbers(vec![1, 2])]
        );
    }

    #[test]
    fn test_registration_lookup() {
        let mut lot = populated_lot();
        assert_eq!(
            run(
                &RegistrationLookupHandler,
                &mut lot,
                "slot_number_for_registration_number KA-04-HH-7777"
            )
            .unwrap(),
            vec![Reply::SlotLocated { slot: 4 }]
        );
        assert_eq!(
            run(
                &RegistrationLookupHandler,
                &mut lot,
                "slot_number_for_registration_number MH-04-AY-1111"
            )
            .unwrap(),
            vec![Reply::NotFound]
        );
    }

    #[test]
    fn test_queries_need_their_argument() {
        let mut lot = populated_lot();
        let cases: [(&dyn Handler, &str); 4] = [
            (&VehicleCountHandler, "type_of_vehicles"),
            (
                &RegistrationsByColourHandler,
                "registration_numbers_for_vehicles_with_colour",
            ),
            (&SlotsByColourHandler, "slot_numbers_for_vehicles_with_colour"),
            (
                &RegistrationLookupHandler,
                "slot_number_for_registration_number",
            ),
        ];
        for (handler, line) in cases {
            let err = run(handler, &mut lot, line).unwrap_err();
            assert!(
                matches!(err, HandlerError::NeedMoreParams),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn test_queries_require_lot_before_arguments() {
        let mut lot = None;
        let err = run(&VehicleCountHandler, &mut lot, "type_of_vehicles").unwrap_err();
        assert!(matches!(err, HandlerError::LotMissing));
    }
}
