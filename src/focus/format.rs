//! Duration parsing and formatting for the timer.

use chrono::Duration;

/// Format a duration as MM:SS.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Format a duration as a human-readable string.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let total_minutes = d.num_minutes();

    if total_minutes < 1 {
        let seconds = d.num_seconds();
        return format!("{} second{}", seconds, plural(seconds));
    }

    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    match (hours, minutes) {
        (0, m) => format!("{m} minute{}", plural(m)),
        (h, 0) => format!("{h} hour{}", plural(h)),
        (h, m) => format!("{h} hour{}, {m} minute{}", plural(h), plural(m)),
    }
}

const fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Longest duration [`parse_duration`] accepts: `u32::MAX` minutes.
#[allow(clippy::cast_lossless)]
pub const MAX_DURATION_SECONDS: i64 = u32::MAX as i64 * 60;

/// Parse a duration string like "25m", "1h30m", "90s".
///
/// A bare number, or a trailing number without a unit, is taken as minutes.
/// Returns `None` for zero, malformed input, or anything longer than
/// [`MAX_DURATION_SECONDS`].
#[must_use]
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    let mut total_seconds: i64 = 0;
    let mut digits = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            digits.push(c);
            continue;
        }
        let unit = match c {
            'h' => 3600,
            'm' => 60,
            's' => 1,
            _ => return None,
        };
        total_seconds = add_component(total_seconds, &digits, unit)?;
        digits.clear();
    }

    if !digits.is_empty() {
        total_seconds = add_component(total_seconds, &digits, 60)?;
    }

    (total_seconds > 0).then(|| Duration::seconds(total_seconds))
}

/// Add `digits * unit` seconds to `total`, staying within the bound.
fn add_component(total: i64, digits: &str, unit: i64) -> Option<i64> {
    if digits.is_empty() {
        return None;
    }
    let value: i64 = digits.parse().ok()?;
    let total = value.checked_mul(unit)?.checked_add(total)?;
    (total <= MAX_DURATION_SECONDS).then_some(total)
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_minutes() {
        assert_eq!(parse_duration("25"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration("25m"), Some(Duration::minutes(25)));
        assert_eq!(parse_duration(" 50M "), Some(Duration::minutes(50)));
    }

    #[test]
    fn test_parse_duration_hours() {
        assert_eq!(parse_duration("1h"), Some(Duration::hours(1)));
        assert_eq!(parse_duration("2h30m"), Some(Duration::minutes(150)));
    }

    #[test]
    fn test_parse_duration_seconds() {
        assert_eq!(parse_duration("90s"), Some(Duration::seconds(90)));
        assert_eq!(parse_duration("1m30s"), Some(Duration::seconds(90)));
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_none());
        assert!(parse_duration("abc").is_none());
        assert!(parse_duration("0").is_none());
        assert!(parse_duration("-5").is_none());
        assert!(parse_duration("10x").is_none());
        assert!(parse_duration("h").is_none());
    }

    #[test]
    fn test_parse_duration_out_of_range() {
        assert!(parse_duration("9223372036854775807").is_none());
        assert!(parse_duration("99999999999999999h").is_none());
        assert!(parse_duration("99999999999999999999999m").is_none());
        assert!(parse_duration("1h9223372036854775807s").is_none());

        let max_minutes = u32::MAX.to_string();
        assert_eq!(
            parse_duration(&max_minutes),
            Some(Duration::seconds(MAX_DURATION_SECONDS))
        );
        assert!(parse_duration(&format!("{max_minutes}m1s")).is_none());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::minutes(25)), "25 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "1 minute");
        assert_eq!(format_duration(Duration::hours(2)), "2 hours");
        assert_eq!(format_duration(Duration::minutes(90)), "1 hour, 30 minutes");
        assert_eq!(format_duration(Duration::seconds(45)), "45 seconds");
    }

    #[test]
    fn test_format_duration_mmss() {
        assert_eq!(format_duration_mmss(Duration::minutes(25)), "25:00");
        assert_eq!(format_duration_mmss(Duration::seconds(90)), "01:30");
        assert_eq!(format_duration_mmss(Duration::seconds(0)), "00:00");
        assert_eq!(format_duration_mmss(Duration::minutes(120)), "120:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert_eq!(bar, "[█████░░░░░]");
        assert_eq!(render_progress_bar(1.5, 4), "[████]");
        assert_eq!(render_progress_bar(0.0, 3), "[░░░]");
    }
}
