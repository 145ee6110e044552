//! parkd - Parking Lot Daemon
//!
//! A line-oriented parking slot registry built on zero-copy parsing.

mod config;
mod error;
mod handlers;
mod session;
mod state;

use crate::config::Config;
use crate::session::Session;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize tracing. Replies go to stdout, so logs take stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration. An explicit path must exist; the default path may
    // be absent so a bare `parkd` starts with defaults.
    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).map_err(|e| {
            error!(path = %path, error = %e, "Failed to load config");
            e
        })?,
        None => Config::load_optional("parkd.toml")?,
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        capacity = config.lot.capacity,
        "Starting parkd"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut session = Session::new(&config);
    session.run(stdin.lock(), stdout.lock())?;

    info!("Session ended");
    Ok(())
}
