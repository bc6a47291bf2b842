//! Command-line interface for pomotrack.

pub mod args;
pub mod commands;
