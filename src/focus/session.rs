//! Countdown session state.
//!
//! [`TimerSession`] is the pure state machine behind the timer: it knows how
//! to start, pause, reset, enter a break, and take one tick. It has no notion
//! of wall-clock time; scheduling lives in [`super::TimerController`].

use chrono::Duration;
use serde::{Deserialize, Serialize};

use super::format::format_duration_mmss;

/// Work session length used when none is configured.
pub const DEFAULT_WORK_MINUTES: u32 = 25;

/// Break session length. Not configurable.
pub const BREAK_MINUTES: u32 = 5;

/// Kind of session the timer is counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// Focused work
    Work,
    /// Break between work sessions
    Break,
}

impl SessionKind {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Work => "Work",
            Self::Break => "Break",
        }
    }

    /// Check if this is a break.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        matches!(self, Self::Break)
    }
}

impl std::fmt::Display for SessionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Observable timer state, as read by front ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerSnapshot {
    /// Whole minutes remaining
    pub remaining_minutes: u32,
    /// Seconds remaining within the current minute (0-59)
    pub remaining_seconds: u32,
    /// Whether the countdown is actively decrementing
    pub is_running: bool,
    /// Whether the active session is a break
    pub is_break: bool,
    /// Configured work session length in minutes
    pub work_minutes: u32,
    /// Break session length in minutes
    pub break_minutes: u32,
}

/// A single work/break countdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerSession {
    remaining_minutes: u32,
    remaining_seconds: u32,
    is_running: bool,
    kind: SessionKind,
    work_minutes: u32,
}

impl TimerSession {
    /// Create a stopped work session with `work_minutes` on the clock.
    ///
    /// A zero length is raised to one minute.
    #[must_use]
    pub fn new(work_minutes: u32) -> Self {
        let work_minutes = work_minutes.max(1);
        Self {
            remaining_minutes: work_minutes,
            remaining_seconds: 0,
            is_running: false,
            kind: SessionKind::Work,
            work_minutes,
        }
    }

    /// Set the running flag. Remaining time is not validated here; an
    /// exhausted session is stopped again immediately.
    pub fn start(&mut self) {
        self.is_running = true;
        self.enforce_exhaustion();
    }

    /// Clear the running flag.
    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Stop and put the current session's full length back on the clock.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_minutes = self.target_minutes();
        self.remaining_seconds = 0;
    }

    /// Switch into a stopped break with the full break length on the clock.
    pub fn start_break(&mut self) {
        self.kind = SessionKind::Break;
        self.remaining_minutes = BREAK_MINUTES;
        self.remaining_seconds = 0;
        self.is_running = false;
    }

    /// Take one second off the clock.
    ///
    /// Does nothing unless running with time left. Returns true if the
    /// countdown moved.
    pub fn tick(&mut self) -> bool {
        if !self.should_tick() {
            self.enforce_exhaustion();
            return false;
        }

        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        } else {
            self.remaining_minutes -= 1;
            self.remaining_seconds = 59;
        }

        self.enforce_exhaustion();
        true
    }

    /// Whether a tick would currently move the countdown.
    #[must_use]
    pub const fn should_tick(&self) -> bool {
        self.is_running && !self.is_exhausted()
    }

    /// Whether the countdown has reached 0:00.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining_minutes == 0 && self.remaining_seconds == 0
    }

    fn enforce_exhaustion(&mut self) {
        if self.is_exhausted() {
            self.is_running = false;
        }
    }

    /// Minutes remaining.
    #[must_use]
    pub const fn remaining_minutes(&self) -> u32 {
        self.remaining_minutes
    }

    /// Seconds remaining within the current minute.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Check if this is a break session.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        self.kind.is_break()
    }

    /// Get the session kind.
    #[must_use]
    pub const fn kind(&self) -> SessionKind {
        self.kind
    }

    /// Configured work length in minutes.
    #[must_use]
    pub const fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    /// Full length of the current session in minutes.
    #[must_use]
    pub const fn target_minutes(&self) -> u32 {
        match self.kind {
            SessionKind::Work => self.work_minutes,
            SessionKind::Break => BREAK_MINUTES,
        }
    }

    /// Total remaining time in seconds.
    #[must_use]
    pub fn remaining_total_seconds(&self) -> u64 {
        u64::from(self.remaining_minutes) * 60 + u64::from(self.remaining_seconds)
    }

    /// Get remaining time as Duration.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn remaining(&self) -> Duration {
        Duration::seconds(self.remaining_total_seconds() as i64)
    }

    /// Full length of the current session as Duration.
    #[must_use]
    pub fn total(&self) -> Duration {
        Duration::minutes(i64::from(self.target_minutes()))
    }

    /// Get progress through the current session (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        let total = self.total().num_seconds() as f64;
        if total <= 0.0 {
            return 1.0;
        }
        let remaining = self.remaining().num_seconds() as f64;
        (1.0 - remaining / total).clamp(0.0, 1.0)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_duration_mmss(self.remaining())
    }

    /// Capture the observable state.
    #[must_use]
    pub const fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining_minutes: self.remaining_minutes,
            remaining_seconds: self.remaining_seconds,
            is_running: self.is_running,
            is_break: self.kind.is_break(),
            work_minutes: self.work_minutes,
            break_minutes: BREAK_MINUTES,
        }
    }
}

impl Default for TimerSession {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES)
    }
}
