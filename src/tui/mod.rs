//! Terminal User Interface (TUI) for pomotrack.
//!
//! Full-screen countdown view over a [`TimerController`].
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;
pub use event::{key_to_action, Action};

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomotrackError;
use crate::focus::{Clock, TimerController};

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<C: Clock>(timer: TimerController<C>) -> Result<(), PomotrackError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomotrackError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| PomotrackError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomotrackError::Terminal(format!("Failed to create terminal: {e}")))?;

    tracing::info!("tui started");
    let mut app = App::new(timer);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();
    tracing::info!("tui stopped");

    // Dropping the app drops the controller and its pending tick.
    drop(app);
    result
}

/// Run the main application loop.
fn run_app<B: Backend, C: Clock>(
    terminal: &mut Terminal<B>,
    app: &mut App<C>,
) -> Result<(), PomotrackError> {
    while !app.should_quit {
        app.on_frame();

        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomotrackError::Terminal(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app.poll_timeout())? {
            app.apply(action);
        }
    }

    Ok(())
}
