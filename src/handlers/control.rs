//! exit command handler.
//!
//! Usage: `exit`

use park_proto::CommandRef;
use tracing::info;

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};

/// Handler for the exit command.
pub struct ExitHandler;

impl Handler for ExitHandler {
    fn handle(&self, _ctx: &mut Context<'_>, _cmd: &CommandRef<'_>) -> HandlerResult {
        info!("client requested exit");

        // Signal shutdown by returning an error the session loop handles.
        Err(HandlerError::Quit)
    }
}
