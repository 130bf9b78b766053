//! Duration parsing for the schedule step.

use crate::error::ConfigError;

/// Parse a duration string like "1d", "1h", "30m", "300s", "300" into seconds.
/// Supports:
/// - Plain numbers (interpreted as seconds): "300"
/// - Seconds suffix: "300s"
/// - Minutes suffix: "30m"
/// - Hours suffix: "1h"
/// - Days suffix: "1d"
///
/// The sign is preserved; rejecting non-positive steps is left to the
/// schedule.
pub fn parse_duration_to_secs(s: &str) -> Result<i64, ConfigError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ConfigError::invalid("Empty duration string"));
    }

    let (num_str, multiplier, unit) = if let Some(n) = s.strip_suffix('d') {
        (n, 86_400, "days")
    } else if let Some(n) = s.strip_suffix('h') {
        (n, 3_600, "hours")
    } else if let Some(n) = s.strip_suffix('m') {
        (n, 60, "minutes")
    } else if let Some(n) = s.strip_suffix('s') {
        (n, 1, "seconds")
    } else {
        (s, 1, "duration")
    };

    let value: i64 = num_str
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid(format!("Invalid {unit} value: {num_str}")))?;

    value
        .checked_mul(multiplier)
        .ok_or_else(|| ConfigError::invalid(format!("Duration out of range: {s}")))
}
