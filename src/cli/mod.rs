//! CLI module for user-records
//!
//! Provides subcommands:
//! - `add`: interactively add users (default)
//! - `list`: print the stored users

pub mod add;
pub mod list;

use clap::{Parser, Subcommand};
use tracing::warn;

use crate::config::AppConfig;
use crate::domain::DomainError;
use crate::infrastructure::logging;

/// Record users from the console into a JSON-lines file
#[derive(Parser)]
#[command(name = "user-records")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Record file, one JSON user per line (overrides config)
    #[arg(long, global = true)]
    pub records_file: Option<String>,

    /// Creation log file (overrides config)
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Default)]
pub enum Command {
    /// Interactively add users (default)
    #[default]
    Add,

    /// Print the stored users
    List(list::ListArgs),
}

/// Load configuration, apply command line overrides and start logging
pub fn prepare(cli: &Cli) -> AppConfig {
    dotenvy::dotenv().ok();

    let loaded = AppConfig::load().map_err(|e| DomainError::configuration(e.to_string()));
    let mut config = loaded.as_ref().cloned().unwrap_or_default();

    if let Some(path) = &cli.records_file {
        config.storage.records_file = path.clone();
    }
    if let Some(path) = &cli.log_file {
        config.storage.creation_log = path.clone();
    }

    init_logging(&config);

    if let Err(e) = loaded {
        warn!(error = %e, "Using default configuration");
    }

    config
}

fn init_logging(config: &AppConfig) {
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });
}
