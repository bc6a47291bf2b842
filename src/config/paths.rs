//! Path resolution for pomotrack configuration and data files.
//!
//! All pomotrack data is stored in `~/.pomotrack/`:
//! - `config.yaml` - Main configuration file
//! - `logs/` - Log output (`pomotrack.log`)

use std::path::PathBuf;

use crate::error::PomotrackError;

/// Paths to pomotrack configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.pomotrack/`
    pub root: PathBuf,
    /// Config file: `~/.pomotrack/config.yaml`
    pub config_file: PathBuf,
    /// Logs directory: `~/.pomotrack/logs/`
    pub logs: PathBuf,
    /// Log file: `~/.pomotrack/logs/pomotrack.log`
    pub log_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, PomotrackError> {
        let home = std::env::var("HOME").map_err(|_| {
            PomotrackError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".pomotrack")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        let logs = root.join("logs");
        Self {
            config_file: root.join("config.yaml"),
            log_file: logs.join("pomotrack.log"),
            logs,
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), PomotrackError> {
        for dir in [&self.root, &self.logs] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    PomotrackError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".pomotrack"))
        })
    }
}
