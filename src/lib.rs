//! pomotrack - A work/break countdown timer for the terminal
//!
//! The heart of this crate is [`focus::TimerController`], a single-session
//! countdown state machine. The TUI and headless runner are thin front ends
//! that read its state and invoke its operations.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod focus;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomotrackError;
pub use focus::{SessionKind, TimerController, TimerSnapshot};
