//! Work/break countdown timer.
//!
//! - [`TimerSession`]: the countdown state and its transitions
//! - [`TimerController`]: owns a session and schedules its ticks
//! - [`Clock`]: time source the controller is driven by

pub mod clock;
pub mod controller;
pub mod format;
pub mod session;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{TickHandle, TimerController, TimerEvent, TICK_INTERVAL};
pub use format::{format_duration, format_duration_mmss, parse_duration, render_progress_bar};
pub use session::{SessionKind, TimerSession, TimerSnapshot, BREAK_MINUTES, DEFAULT_WORK_MINUTES};
