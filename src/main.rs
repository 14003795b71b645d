//! Address Book - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout. Logs go to stderr
//! so they never interleave with the prompts.

use address_book::cli::Session;
use address_book::{Config, JsonFileRepository};
use anyhow::Result;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let repository = Box::new(JsonFileRepository::new(config.store_path.clone()));
    info!(
        store = %repository.path().display(),
        locale = %config.locale,
        "Starting address book"
    );

    let stdin = io::stdin();
    let mut session = Session::new(repository, &config, stdin.lock(), io::stdout());
    session.run()?;

    info!("Address book session finished");
    Ok(())
}
