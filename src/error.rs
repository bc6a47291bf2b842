//! Error types for pomotrack.
//!
//! The timer controller itself never fails; these errors come from the
//! layers around it (configuration, logging, terminal handling, output).

use thiserror::Error;

/// Errors that can occur in pomotrack.
#[derive(Error, Debug)]
pub enum PomotrackError {
    /// Configuration could not be loaded, parsed, or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A command-line argument was rejected.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The terminal could not be set up, drawn, or read.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PomotrackError {
    /// Exit code to use when this error terminates the process.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgument(_) => 2,
            _ => 1,
        }
    }
}
