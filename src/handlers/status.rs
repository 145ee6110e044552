//! status command handler.
//!
//! Usage: `status`

use park_proto::{CommandRef, Reply, StatusRow};

use crate::error::HandlerResult;
use crate::handlers::{require_lot, Context, Handler};

/// Handler for the status command.
pub struct StatusHandler;

impl Handler for StatusHandler {
    fn handle(&self, ctx: &mut Context<'_>, _cmd: &CommandRef<'_>) -> HandlerResult {
        let lot = require_lot(ctx.lot)?;

        let rows: Vec<StatusRow> = lot
            .occupied()
            .map(|(slot, occupant)| StatusRow {
                slot,
                registration: occupant.registration.clone(),
                color: occupant.color.clone(),
                vehicle: occupant.vehicle,
            })
            .collect();

        ctx.sink.send(Reply::Status { rows })
    }
}
