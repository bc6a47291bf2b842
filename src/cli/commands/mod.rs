//! Command implementations for pomotrack.
//!
//! This module contains the implementation of all CLI commands.

mod completions;
mod config;
mod timer;

pub use completions::completions;
pub use config::config;
pub use timer::{run, run_countdown, status, tui, work_minutes};
