//! The timer controller.
//!
//! Wraps a [`TimerSession`] with the scheduling of its once-per-second tick.
//! The controller owns a single tick slot. Any operation that changes whether
//! the countdown should be moving cancels or installs that slot before
//! returning, and [`TimerController::poll`] re-reads the session before every
//! tick it applies, so a tick scheduled before a pause or reset can never
//! land afterwards.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};

use super::clock::{Clock, SystemClock};
use super::session::{SessionKind, TimerSession, TimerSnapshot, DEFAULT_WORK_MINUTES};

/// Interval between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Something that happened while applying due ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "lowercase")]
pub enum TimerEvent {
    /// One second came off the clock.
    Tick {
        /// Minutes remaining after the tick
        minutes: u32,
        /// Seconds remaining after the tick
        seconds: u32,
    },
    /// The countdown reached 0:00 and stopped.
    Exhausted {
        /// Kind of session that ran out
        kind: SessionKind,
    },
}

/// The pending tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickHandle {
    generation: u64,
    due: Instant,
}

impl TickHandle {
    /// Identifies which scheduling this handle came from. Every new
    /// schedule gets a fresh generation.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// When the tick fires.
    #[must_use]
    pub const fn due(&self) -> Instant {
        self.due
    }
}

/// Work/break countdown controller.
#[derive(Debug)]
pub struct TimerController<C: Clock = SystemClock> {
    session: TimerSession,
    clock: C,
    ticker: Option<TickHandle>,
    generation: u64,
}

impl TimerController<SystemClock> {
    /// Create a controller for `work_minutes` work sessions on the system clock.
    #[must_use]
    pub fn new(work_minutes: u32) -> Self {
        Self::with_clock(work_minutes, SystemClock)
    }
}

impl Default for TimerController<SystemClock> {
    fn default() -> Self {
        Self::new(DEFAULT_WORK_MINUTES)
    }
}

impl<C: Clock> TimerController<C> {
    /// Create a controller driven by `clock`.
    pub fn with_clock(work_minutes: u32, clock: C) -> Self {
        let session = TimerSession::new(work_minutes);
        debug!(work_minutes = session.work_minutes(), "timer created");
        Self {
            session,
            clock,
            ticker: None,
            generation: 0,
        }
    }

    /// Start the countdown.
    pub fn start(&mut self) {
        self.session.start();
        debug!(remaining = %self.session.format_remaining(), running = self.session.is_running(), "start");
        self.sync_ticker();
    }

    /// Pause the countdown.
    pub fn pause(&mut self) {
        self.session.pause();
        debug!(remaining = %self.session.format_remaining(), "pause");
        self.sync_ticker();
    }

    /// Stop and restore the current session's full length.
    pub fn reset(&mut self) {
        self.session.reset();
        debug!(kind = %self.session.kind(), remaining = %self.session.format_remaining(), "reset");
        self.sync_ticker();
    }

    /// Switch into a stopped, full-length break.
    pub fn start_break(&mut self) {
        self.session.start_break();
        debug!("break started");
        self.sync_ticker();
    }

    /// Apply one tick immediately, regardless of the clock.
    ///
    /// Returns true if the countdown moved.
    pub fn tick(&mut self) -> bool {
        let moved = self.session.tick();
        if moved && self.session.is_exhausted() {
            info!(kind = %self.session.kind(), "countdown exhausted");
        }
        self.sync_ticker();
        moved
    }

    /// Apply every tick that has come due on the clock.
    pub fn poll(&mut self) -> Vec<TimerEvent> {
        let now = self.clock.now();
        let mut events = Vec::new();

        while let Some(handle) = self.ticker {
            if handle.due() > now {
                break;
            }

            if !self.session.should_tick() {
                self.cancel();
                break;
            }

            self.session.tick();
            events.push(TimerEvent::Tick {
                minutes: self.session.remaining_minutes(),
                seconds: self.session.remaining_seconds(),
            });

            if self.session.is_exhausted() {
                info!(kind = %self.session.kind(), "countdown exhausted");
                events.push(TimerEvent::Exhausted {
                    kind: self.session.kind(),
                });
                self.cancel();
            } else {
                self.ticker = Some(TickHandle {
                    generation: handle.generation,
                    due: handle.due() + TICK_INTERVAL,
                });
            }
        }

        events
    }

    /// Cancel or install the tick slot to match the session.
    ///
    /// A slot that is already installed for a running countdown keeps its
    /// phase.
    fn sync_ticker(&mut self) {
        match (self.session.should_tick(), self.ticker.is_some()) {
            (true, false) => {
                self.generation += 1;
                let due = self.clock.now() + TICK_INTERVAL;
                self.ticker = Some(TickHandle {
                    generation: self.generation,
                    due,
                });
                debug!(generation = self.generation, "tick scheduled");
            }
            (false, true) => self.cancel(),
            _ => {}
        }
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.ticker.take() {
            debug!(generation = handle.generation, "tick cancelled");
        }
    }

    /// The pending tick, if any.
    #[must_use]
    pub const fn scheduled_tick(&self) -> Option<TickHandle> {
        self.ticker
    }

    /// Time until the next tick is due, if one is scheduled.
    #[must_use]
    pub fn time_to_next_tick(&self) -> Option<Duration> {
        let now = self.clock.now();
        self.ticker
            .map(|handle| handle.due().saturating_duration_since(now))
    }

    /// Minutes remaining.
    #[must_use]
    pub const fn remaining_minutes(&self) -> u32 {
        self.session.remaining_minutes()
    }

    /// Seconds remaining within the current minute.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.session.remaining_seconds()
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.session.is_running()
    }

    /// Check if this is a break session.
    #[must_use]
    pub const fn is_break(&self) -> bool {
        self.session.is_break()
    }

    /// Read-only access to the session state.
    #[must_use]
    pub const fn session(&self) -> &TimerSession {
        &self.session
    }

    /// Capture the observable state.
    #[must_use]
    pub const fn snapshot(&self) -> TimerSnapshot {
        self.session.snapshot()
    }
}

impl<C: Clock> Drop for TimerController<C> {
    fn drop(&mut self) {
        self.cancel();
    }
}
