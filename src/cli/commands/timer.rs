//! Timer command implementations.
//!
//! `tui` opens the full-screen timer, `run` counts down in place, and
//! `status` prints what a fresh timer looks like.

use std::io::Write;
use std::time::Duration;

use colored::Colorize;

use crate::cli::args::{OutputFormat, RunArgs, TimerArgs};
use crate::config::Config;
use crate::error::PomotrackError;
use crate::focus::{Clock, SessionKind, TimerController, TimerEvent, TICK_INTERVAL};
use crate::output::{format_status, to_json_line};

/// Work length from the command line, falling back to the config.
#[must_use]
pub const fn work_minutes(args: &TimerArgs, config: &Config) -> u32 {
    match args.minutes {
        Some(minutes) => minutes,
        None => config.timer.work_minutes,
    }
}

/// Open the full-screen timer.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn.
pub fn tui(args: &TimerArgs, config: &Config) -> Result<String, PomotrackError> {
    let timer = TimerController::new(work_minutes(args, config));
    crate::tui::run(timer)?;
    Ok(String::new())
}

/// Show the state of a fresh timer.
///
/// # Errors
///
/// Returns an error if output formatting fails.
pub fn status(
    args: &TimerArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<String, PomotrackError> {
    let timer = TimerController::new(work_minutes(args, config));
    format_status(timer.session(), format)
}

/// Count down on stdout until the session runs out.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn run(args: &RunArgs, config: &Config, format: OutputFormat) -> Result<String, PomotrackError> {
    let mut timer = TimerController::new(work_minutes(&args.timer, config));
    if args.break_session {
        timer.start_break();
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_countdown(&mut timer, &mut out, format, std::thread::sleep)?;
    Ok(String::new())
}

/// Start `timer` and drive it to exhaustion, writing each tick to `out`.
///
/// `wait` is called with the time until the next tick is due.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_countdown<C, W, F>(
    timer: &mut TimerController<C>,
    out: &mut W,
    format: OutputFormat,
    mut wait: F,
) -> Result<(), PomotrackError>
where
    C: Clock,
    W: Write,
    F: FnMut(Duration),
{
    timer.start();
    match format {
        OutputFormat::Json => writeln!(out, "{}", to_json_line(&timer.snapshot())?)?,
        OutputFormat::Pretty => write_pretty_frame(
            out,
            timer.session().kind(),
            &timer.session().format_remaining(),
        )?,
    }

    while timer.is_running() {
        wait(timer.time_to_next_tick().unwrap_or(TICK_INTERVAL));

        for event in timer.poll() {
            match format {
                OutputFormat::Json => writeln!(out, "{}", to_json_line(&event)?)?,
                OutputFormat::Pretty => match event {
                    TimerEvent::Tick { .. } => write_pretty_frame(
                        out,
                        timer.session().kind(),
                        &timer.session().format_remaining(),
                    )?,
                    TimerEvent::Exhausted { kind } => {
                        writeln!(out)?;
                        writeln!(
                            out,
                            "{}",
                            format!("⏰ Time's up! {kind} session finished.").yellow()
                        )?;
                    }
                },
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn write_pretty_frame<W: Write>(
    out: &mut W,
    kind: SessionKind,
    remaining: &str,
) -> Result<(), PomotrackError> {
    let icon = match kind {
        SessionKind::Work => "🎯",
        SessionKind::Break => "☕",
    };
    write!(out, "\r{icon} {kind} {}", remaining.bold())?;
    out.flush()?;
    Ok(())
}
