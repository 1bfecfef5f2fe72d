//! Wordgen - deterministic word list generator

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use wordgen::cli::{self, Cli, LogLevel};

fn main() -> Result<()> {
    // Initialize the library
    wordgen::init().context("Failed to initialize")?;

    let args = Cli::parse();
    init_logging(args.log_level)?;

    if let Err(e) = cli::run(&args) {
        tracing::debug!(category = %e.category(), error = %e, "wordgen failed");
        eprintln!("wordgen: {}", e.user_message());
        process::exit(e.exit_code());
    }

    Ok(())
}

/// Initialize logging; `RUST_LOG` refines the chosen level
fn init_logging(level: LogLevel) -> Result<()> {
    env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .parse_default_env()
        .try_init()
        .context("Failed to initialize logging")
}
