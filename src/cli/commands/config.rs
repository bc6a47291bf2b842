//! Config command implementation.

use std::path::Path;

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::config::Config;
use crate::error::PomotrackError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// `path` is the config file in effect and `config` what was loaded from it.
///
/// # Errors
///
/// Returns an error if the file cannot be written or output formatting fails.
pub fn config(
    cmd: ConfigCommands,
    config: &Config,
    path: &Path,
    format: OutputFormat,
) -> Result<String, PomotrackError> {
    match cmd {
        ConfigCommands::Show => match format {
            OutputFormat::Json => to_json(config),
            OutputFormat::Pretty => config.to_yaml(),
        },

        ConfigCommands::Path => match format {
            OutputFormat::Json => to_json(&serde_json::json!({ "path": path.display().to_string() })),
            OutputFormat::Pretty => Ok(path.display().to_string()),
        },

        ConfigCommands::Init { force } => init_config(path, force, format),
    }
}

fn init_config(path: &Path, force: bool, format: OutputFormat) -> Result<String, PomotrackError> {
    if path.exists() && !force {
        return Err(PomotrackError::Config(format!(
            "{} already exists.\nUse --force to overwrite it.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    Config::default().save_to_path(path)?;
    tracing::info!(path = %path.display(), "wrote default config");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "path": path.display().to_string(), "created": true })),
        OutputFormat::Pretty => Ok(format!("✅ Wrote {}", path.display()).green().to_string()),
    }
}
