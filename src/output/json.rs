//! JSON output formatting.

use serde::Serialize;

use crate::error::PomotrackError;

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `PomotrackError::Json` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, PomotrackError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Single-line JSON, for streaming one record per line.
///
/// # Errors
///
/// Returns `PomotrackError::Json` if JSON serialization fails.
pub fn to_json_line<T: Serialize>(value: &T) -> Result<String, PomotrackError> {
    Ok(serde_json::to_string(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::focus::TimerSession;

    #[test]
    fn test_snapshot_json() {
        let session = TimerSession::new(25);
        let json = to_json(&session.snapshot()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["remaining_minutes"], 25);
        assert_eq!(value["remaining_seconds"], 0);
        assert_eq!(value["is_running"], false);
        assert_eq!(value["is_break"], false);
        assert_eq!(value["break_minutes"], 5);
    }

    #[test]
    fn test_json_line_has_no_newlines() {
        let session = TimerSession::new(25);
        let line = to_json_line(&session.snapshot()).unwrap();
        assert!(!line.contains('\n'));
    }
}
