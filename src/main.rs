//! rolo - Main entry point
//!
//! Runs the interactive address book loop on stdin/stdout. Logging goes to
//! stderr so stdout stays clean for user-facing replies.

use anyhow::Result;
use rolo::{AddressBook, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only; RUST_LOG overrides the configured level)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!("Starting rolo address book");

    let mut book = AddressBook::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = rolo::repl::run(&mut book, stdin.lock(), stdout.lock(), &config.prompt) {
        error!("REPL terminated with I/O error: {e}");
        return Err(e.into());
    }

    info!("rolo shutdown complete");
    Ok(())
}
