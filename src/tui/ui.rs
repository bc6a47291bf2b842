//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::focus::{Clock, SessionKind};
use crate::output::state_label;
use crate::tui::app::{App, HELP_TEXT};

/// Render the application UI.
pub fn render<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    // Create layout: header, countdown, progress, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Countdown
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

const fn kind_color(kind: SessionKind) -> Color {
    match kind {
        SessionKind::Work => Color::Cyan,
        SessionKind::Break => Color::Green,
    }
}

/// Render the header.
fn render_header<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let session = app.timer.session();
    let color = kind_color(session.kind());
    let title = format!(
        " {} session · {} · {} done ",
        session.kind(),
        state_label(session),
        app.completed_work_sessions
    );

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

    frame.render_widget(header, area);
}

/// Render the remaining time.
fn render_countdown<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let session = app.timer.session();
    let style = if session.is_exhausted() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if session.is_running() {
        Style::default()
            .fg(kind_color(session.kind()))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    // Vertically center within the block
    let padding = usize::from(area.height.saturating_sub(3) / 2);
    let mut lines = vec![Line::from(""); padding];
    lines.push(Line::from(Span::styled(session.format_remaining(), style)));

    let countdown = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(countdown, area);
}

/// Render the progress gauge.
fn render_progress<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let session = app.timer.session();
    let progress = session.progress();

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(kind_color(session.kind())))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar<C: Clock>(frame: &mut Frame<'_>, app: &App<C>, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP_TEXT);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::{ManualClock, TimerController};
    use crate::tui::event::Action;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen<C: Clock>(app: &App<C>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 14)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_initial() {
        let app = App::new(TimerController::with_clock(25, ManualClock::new()));
        let text = screen(&app);
        assert!(text.contains("25:00"));
        assert!(text.contains("Work session"));
        assert!(text.contains("Paused"));
    }

    #[test]
    fn test_render_break() {
        let mut app = App::new(TimerController::with_clock(25, ManualClock::new()));
        app.apply(Action::StartBreak);
        let text = screen(&app);
        assert!(text.contains("05:00"));
        assert!(text.contains("Break session"));
    }
}
