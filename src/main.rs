//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `checkdns` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing error output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use checkdns::initialization::init_logger_with;
use checkdns::{run_lookups, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    let config: Config = Opt::parse().into();

    if !config.colorize {
        colored::control::set_override(false);
    }

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_lookups(config).await {
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("{}", format!("{e:#}").red());
            process::exit(1);
        }
    }
}
