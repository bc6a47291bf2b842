//! Logging setup.
//!
//! Logs go to `~/.pomotrack/logs/pomotrack.log` by default so they never
//! draw over the TUI. `POMOTRACK_LOG` overrides the configured filter.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingConfig, Paths};
use crate::error::PomotrackError;

/// Environment variable holding a filter directive.
pub const LOG_ENV: &str = "POMOTRACK_LOG";

/// Build the filter from the environment, falling back to the config.
///
/// # Errors
///
/// Returns an error if the configured level is not a valid directive.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, PomotrackError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.level).map_err(|e| {
        PomotrackError::Config(format!("Invalid logging.level '{}': {e}", config.level))
    })
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(config: &LoggingConfig, paths: &Paths) -> Result<(), PomotrackError> {
    let filter = build_filter(config)?;

    let installed = if config.file {
        paths.ensure_dirs()?;
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&paths.log_file)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    installed.map_err(|e| PomotrackError::Config(format!("Failed to initialize logging: {e}")))
}
