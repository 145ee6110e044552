//! Command handlers.
//!
//! This module contains the Handler trait and command registry for dispatching
//! parsed input lines to appropriate handlers.
//!
//! ## Zero-Copy Architecture
//!
//! Handlers receive `CommandRef<'_>` which borrows directly from the input
//! line, avoiding allocations in the loop. Use `cmd.arg(n)` to access
//! arguments as `&str` slices.

mod control;
mod leave;
mod lot;
mod park;
mod queries;
mod status;

pub use control::ExitHandler;
pub use leave::LeaveHandler;
pub use lot::CreateLotHandler;
pub use park::ParkHandler;
pub use queries::{
    PlateParityHandler, RegistrationLookupHandler, RegistrationsByColourHandler,
    SlotsByColourHandler, VehicleCountHandler,
};
pub use status::StatusHandler;

use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};

use park_proto::{CommandRef, Reply};

use crate::error::{HandlerError, HandlerResult};
use crate::state::ParkingLot;

/// Middleware for routing handler replies.
/// Direct writes straight to the output stream; Capturing buffers for tests.
pub enum ReplySink<'a> {
    Direct(&'a mut dyn Write),
    #[allow(dead_code)] // Constructed by handler unit tests
    Capturing(&'a mut Vec<Reply>),
}

impl ReplySink<'_> {
    /// Write or buffer a reply depending on sink mode.
    pub fn send(&mut self, reply: Reply) -> HandlerResult {
        match self {
            Self::Direct(out) => {
                writeln!(out, "{reply}")?;
                Ok(())
            }
            Self::Capturing(buf) => {
                buf.push(reply);
                Ok(())
            }
        }
    }
}

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The lot, if a creation command has run yet.
    pub lot: &'a mut Option<ParkingLot>,
    /// Sink for outgoing replies (can capture for tests).
    pub sink: ReplySink<'a>,
}

/// Check lot existence in one call.
///
/// This is the recommended way to start lot-dependent handlers:
/// ```ignore
/// let lot = require_lot(ctx.lot)?;
/// ```
#[inline]
pub fn require_lot<'a>(lot: &'a mut Option<ParkingLot>) -> Result<&'a mut ParkingLot, HandlerError> {
    lot.as_mut().ok_or(HandlerError::LotMissing)
}

/// Trait implemented by all command handlers.
///
/// Handlers receive a borrowed `CommandRef` that references the input line
/// directly. Use `cmd.arg(n)` to access arguments as `&str` slices.
pub trait Handler {
    /// Handle one parsed command.
    fn handle(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult;
}

/// Registry of command handlers.
pub struct Registry {
    handlers: HashMap<&'static str, Box<dyn Handler>>,
    /// Command usage counters, logged when a session ends
    command_counts: HashMap<&'static str, AtomicU64>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<&'static str, Box<dyn Handler>> = HashMap::new();

        // Lot lifecycle handlers
        handlers.insert("create_parking_lot", Box::new(CreateLotHandler));
        handlers.insert("park", Box::new(ParkHandler));
        handlers.insert("leave", Box::new(LeaveHandler));
        handlers.insert("status", Box::new(StatusHandler));

        // Query handlers
        handlers.insert("type_of_vehicles", Box::new(VehicleCountHandler));
        handlers.insert(
            "registration_numbers_for_vehicles_with_odd_plate",
            Box::new(PlateParityHandler::odd()),
        );
        handlers.insert(
            "registration_numbers_for_vehicles_with_even_plate",
            Box::new(PlateParityHandler::even()),
        );
        handlers.insert(
            "registration_numbers_for_vehicles_with_colour",
            Box::new(RegistrationsByColourHandler),
        );
        handlers.insert(
            "slot_numbers_for_vehicles_with_colour",
            Box::new(SlotsByColourHandler),
        );
        handlers.insert(
            "slot_number_for_registration_number",
            Box::new(RegistrationLookupHandler),
        );

        // Session control
        handlers.insert("exit", Box::new(ExitHandler));

        // Initialize command counters for all registered commands
        let mut command_counts = HashMap::new();
        for &cmd in handlers.keys() {
            command_counts.insert(cmd, AtomicU64::new(0));
        }

        Self {
            handlers,
            command_counts,
        }
    }

    /// Get command usage statistics, most-used first.
    pub fn get_command_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|(cmd, count)| (*cmd, count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1));
        stats
    }

    /// Dispatch a parsed command to the appropriate handler.
    ///
    /// Verb matching is case-sensitive: `Park` is not a command, and no
    /// normalization happens on the way in.
    pub fn dispatch(&self, ctx: &mut Context<'_>, cmd: &CommandRef<'_>) -> HandlerResult {
        if let Some(handler) = self.handlers.get(cmd.name()) {
            // Counters exist for every registered verb; a miss here is a
            // logic error in new().
            let counter = self
                .command_counts
                .get(cmd.name())
                .expect("command counter missing for registered handler");
            counter.fetch_add(1, Ordering::Relaxed);

            handler.handle(ctx, cmd)
        } else {
            ctx.sink.send(Reply::InvalidCommand)
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
