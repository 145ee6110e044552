//! Line-oriented session loop.
//!
//! A session reads commands one line at a time, dispatches each through the
//! handler registry and writes replies back out. It owns the lot for its
//! whole lifetime; the lot dies with the session.

use std::io::{BufRead, Write};

use park_proto::{CommandRef, Reply};
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::error::HandlerError;
use crate::handlers::{Context, Registry, ReplySink};
use crate::state::ParkingLot;

/// One interactive session over a pair of byte streams.
pub struct Session {
    registry: Registry,
    lot: Option<ParkingLot>,
    banner: Vec<String>,
}

impl Session {
    /// Build a session from configuration.
    ///
    /// When `lot.capacity` is configured the lot exists up front, without a
    /// creation reply being owed to the client.
    pub fn new(config: &Config) -> Self {
        let lot = config.lot.capacity.map(|capacity| {
            info!(capacity, "parking lot pre-created from config");
            ParkingLot::new(capacity)
        });

        Self {
            registry: Registry::new(),
            lot,
            banner: config.banner.load_lines(),
        }
    }

    /// Run the session until `exit`, end of input, or an I/O failure.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> std::io::Result<()> {
        for line in &self.banner {
            writeln!(output, "{line}")?;
        }

        let mut line = String::new();
        loop {
            line.clear();
            if input.read_line(&mut line)? == 0 {
                // EOF ends the session as cleanly as an explicit exit.
                break;
            }
            trace!(raw = %line.trim_end(), "line received");

            let cmd = match CommandRef::parse(&line) {
                Ok(cmd) => cmd,
                // A line that yields no tokens is not a command at all.
                Err(_) => {
                    writeln!(output, "{}", Reply::InvalidCommand)?;
                    continue;
                }
            };

            // Scope the context so its borrow of `output` ends before the
            // error path below writes to it.
            let result = {
                let mut ctx = Context {
                    lot: &mut self.lot,
                    sink: ReplySink::Direct(&mut output),
                };
                self.registry.dispatch(&mut ctx, &cmd)
            };

            match result {
                Ok(()) => {}
                Err(HandlerError::Quit) => break,
                Err(HandlerError::Io(err)) => return Err(err),
                Err(err) => {
                    debug!(code = err.error_code(), command = cmd.name(), "command rejected");
                    if let Some(reply) = err.to_reply() {
                        writeln!(output, "{reply}")?;
                    }
                }
            }
        }

        let stats = self.registry.get_command_stats();
        if !stats.is_empty() {
            debug!(?stats, "session command usage");
        }

        Ok(())
    }
}
