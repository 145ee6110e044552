//! park command handler.
//!
//! Usage: `park <registration> <colour> <vehicle>`

use park_proto::{CommandRef, Reply};
use tracing::debug;

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{require_lot, Context, Handler};

/// Handler for the park command.
pub struct ParkHandler;

impl Handler for ParkHandler {
    fn handle(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult {
        // Lot existence is checked before arguments are even looked at.
        let lot = require_lot(ctx.lot)?;

        let registration = cmd.arg(0).ok_or(HandlerError::NeedMoreParams)?;
        let color = cmd.arg(1).ok_or(HandlerError::NeedMoreParams)?;
        let vehicle = cmd.arg(2).ok_or(HandlerError::NeedMoreParams)?;

        let slot = lot.allocate(registration, color, vehicle)?;

        debug!(slot, registration = %registration, kind = %vehicle, "vehicle parked");
        ctx.sink.send(Reply::Allocated { slot })
    }
}
