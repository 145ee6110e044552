//! create_parking_lot command handler.
//!
//! Usage: `create_parking_lot <capacity>`

use park_proto::{CommandRef, Reply};
use tracing::info;

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use crate::state::ParkingLot;

/// Handler for the create_parking_lot command.
pub struct CreateLotHandler;

impl Handler for CreateLotHandler {
    fn handle(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult {
        let size = cmd.arg(0).ok_or(HandlerError::NeedMoreParams)?;
        let capacity: u32 = size
            .parse()
            .map_err(|_| HandlerError::InvalidArgument(size.to_string()))?;

        // Re-creation discards the old lot and every vehicle in it.
        let replaced = ctx.lot.is_some();
        *ctx.lot = Some(ParkingLot::new(capacity));

        info!(capacity, replaced, "parking lot created");
        ctx.sink.send(Reply::LotCreated { capacity })
    }
}
