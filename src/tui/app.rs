//! Application state for the TUI.

use std::time::Duration;

use crate::focus::{Clock, SessionKind, SystemClock, TimerController, TimerEvent};
use crate::tui::event::Action;

/// Longest wait for input before redrawing.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Key bindings shown by `?`.
pub const HELP_TEXT: &str = "s/space:start-pause | p:pause | r:reset | b:break | q:quit";

/// Application state.
pub struct App<C: Clock = SystemClock> {
    /// The countdown being displayed.
    pub timer: TimerController<C>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Work sessions run to completion since the app started.
    pub completed_work_sessions: u32,
}

impl<C: Clock> App<C> {
    /// Create a new app instance.
    pub fn new(timer: TimerController<C>) -> Self {
        Self {
            timer,
            status: Some("Press s to start, ? for help".to_string()),
            should_quit: false,
            completed_work_sessions: 0,
        }
    }

    /// Apply due ticks and react to the countdown running out.
    pub fn on_frame(&mut self) {
        for event in self.timer.poll() {
            if let TimerEvent::Exhausted { kind } = event {
                if kind == SessionKind::Work {
                    self.completed_work_sessions += 1;
                    self.status = Some("⏰ Time's up! Press b for a break".to_string());
                } else {
                    self.status = Some("⏰ Break over".to_string());
                }
            }
        }
    }

    /// How long to wait for input before the next frame.
    pub fn poll_timeout(&self) -> Duration {
        self.timer
            .time_to_next_tick()
            .map_or(IDLE_POLL, |due| due.min(IDLE_POLL))
    }

    /// Perform a user action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Toggle => {
                if self.timer.is_running() {
                    self.timer.pause();
                    self.status = Some("Paused".to_string());
                } else {
                    self.timer.start();
                    self.status = if self.timer.is_running() {
                        Some("Running".to_string())
                    } else {
                        Some("Nothing left on the clock. Press r to reset".to_string())
                    };
                }
            }
            Action::Pause => {
                self.timer.pause();
                self.status = Some("Paused".to_string());
            }
            Action::Reset => {
                self.timer.reset();
                self.status = Some(format!(
                    "Reset to {}",
                    self.timer.session().format_remaining()
                ));
            }
            Action::StartBreak => {
                self.timer.start_break();
                self.status = Some("Break ready. Press s to start".to_string());
            }
            Action::Help => self.status = Some(HELP_TEXT.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::ManualClock;

    fn app(work_minutes: u32) -> (App<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let timer = TimerController::with_clock(work_minutes, clock.clone());
        (App::new(timer), clock)
    }

    #[test]
    fn test_toggle_starts_and_pauses() {
        let (mut app, _clock) = app(25);
        app.apply(Action::Toggle);
        assert!(app.timer.is_running());
        app.apply(Action::Toggle);
        assert!(!app.timer.is_running());
        assert_eq!(app.status.as_deref(), Some("Paused"));
    }

    #[test]
    fn test_frames_advance_countdown() {
        let (mut app, clock) = app(25);
        app.apply(Action::Toggle);
        clock.advance(Duration::from_secs(3));
        app.on_frame();
        assert_eq!(app.timer.session().format_remaining(), "24:57");
    }

    #[test]
    fn test_work_exhaustion_counts_and_reports() {
        let (mut app, clock) = app(1);
        app.apply(Action::Toggle);
        clock.advance(Duration::from_secs(60));
        app.on_frame();

        assert_eq!(app.completed_work_sessions, 1);
        assert!(!app.timer.is_running());
        assert!(app.status.as_deref().is_some_and(|s| s.contains("Time's up")));

        app.apply(Action::Toggle);
        assert!(!app.timer.is_running());
        assert!(app.status.as_deref().is_some_and(|s| s.contains("reset")));
    }

    #[test]
    fn test_break_then_reset() {
        let (mut app, _clock) = app(25);
        app.apply(Action::StartBreak);
        assert!(app.timer.is_break());
        app.apply(Action::Reset);
        assert_eq!(app.status.as_deref(), Some("Reset to 05:00"));
    }

    #[test]
    fn test_poll_timeout_tracks_next_tick() {
        let (mut app, clock) = app(25);
        assert_eq!(app.poll_timeout(), IDLE_POLL);

        app.apply(Action::Toggle);
        clock.advance(Duration::from_millis(900));
        assert_eq!(app.poll_timeout(), Duration::from_millis(100));
    }

    #[test]
    fn test_quit() {
        let (mut app, _clock) = app(25);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
