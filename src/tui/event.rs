//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomotrackError;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start if stopped, pause if running.
    Toggle,
    /// Pause the countdown.
    Pause,
    /// Reset the current session.
    Reset,
    /// Switch into a break.
    StartBreak,
    /// Show key bindings.
    Help,
}

/// Map a key press to an action.
#[must_use]
pub fn key_to_action(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('s' | ' ') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('p') => Some(Action::Pause),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('b') => Some(Action::StartBreak),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(timeout: Duration) -> Result<Option<Action>, PomotrackError> {
    if event::poll(timeout)
        .map_err(|e| PomotrackError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| PomotrackError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(key_to_action(key));
        }
    }

    Ok(None)
}
