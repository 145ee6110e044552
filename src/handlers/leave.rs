//! leave command handler.
//!
//! Usage: `leave <slot>`

use park_proto::{CommandRef, Reply};
use tracing::debug;

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{require_lot, Context, Handler};

/// Handler for the leave command.
pub struct LeaveHandler;

impl Handler for LeaveHandler {
    fn handle(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult {
        let lot = require_lot(ctx.lot)?;
        let arg = cmd.arg(0).ok_or(HandlerError::NeedMoreParams)?;

        // A present but non-numeric slot argument gets the same reply as a
        // vacant slot, not the invalid-command reply.
        let Ok(slot) = arg.parse::<u32>() else {
            return ctx.sink.send(Reply::VacantOrInvalid);
        };

        let occupant = lot.release(slot)?;

        debug!(slot, registration = %occupant.registration, "slot freed");
        ctx.sink.send(Reply::SlotFreed { slot })
    }
}
