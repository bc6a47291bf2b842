//! Human-readable output formatting.

use colored::Colorize;

use crate::focus::{format_duration, render_progress_bar, SessionKind, TimerSession};

/// Label for the running/paused/done state.
#[must_use]
pub fn state_label(session: &TimerSession) -> &'static str {
    if session.is_running() {
        "Running"
    } else if session.is_exhausted() {
        "Done"
    } else {
        "Paused"
    }
}

/// Format the timer state as a short status block.
#[must_use]
pub fn format_status_pretty(session: &TimerSession) -> String {
    let icon = match session.kind() {
        SessionKind::Work => "🎯",
        SessionKind::Break => "☕",
    };

    let mut output = Vec::new();
    output.push(
        format!("{icon} {} Session", session.kind().display_name())
            .bold()
            .to_string(),
    );
    output.push("─".repeat(40));

    let remaining = session.format_remaining();
    let remaining = if session.is_exhausted() {
        remaining.yellow().to_string()
    } else {
        remaining.green().to_string()
    };
    output.push(format!("Remaining: {remaining}"));
    output.push(format!("State:     {}", state_label(session)));
    output.push(format!("Length:    {}", format_duration(session.total())));
    output.push(format!(
        "Progress:  {} {:.0}%",
        render_progress_bar(session.progress(), 30),
        session.progress() * 100.0
    ));

    if session.is_exhausted() {
        output.push(String::new());
        output.push("⏰ Time's up!".yellow().to_string());
    }

    output.join("\n")
}
