//! Output formatting for pomotrack.
//!
//! Renders timer state for the CLI in pretty or JSON form.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PomotrackError;
use crate::focus::TimerSession;

pub use json::*;
pub use pretty::*;

/// Format the timer state based on output format
///
/// # Errors
///
/// Returns `PomotrackError::Json` if JSON serialization fails.
pub fn format_status(session: &TimerSession, format: OutputFormat) -> Result<String, PomotrackError> {
    match format {
        OutputFormat::Pretty => Ok(format_status_pretty(session)),
        OutputFormat::Json => to_json(&session.snapshot()),
    }
}
