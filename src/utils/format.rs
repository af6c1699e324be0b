//! Time formatting for display

use std::time::Duration;

/// Render remaining time as `m:ss`.
///
/// The value is truncated toward zero to whole seconds before splitting, so
/// `65.9` renders as `"1:05"`. Negative values carry a leading `-`.
pub fn format_seconds(seconds_remaining: f64) -> String {
    // `as` saturates and maps NaN to zero
    let whole = seconds_remaining.trunc() as i64;
    let sign = if whole < 0 { "-" } else { "" };
    let whole = whole.unsigned_abs();

    format!("{}{}:{:02}", sign, whole / 60, whole % 60)
}

/// Format an elapsed duration as a compact uptime string
pub fn format_uptime(duration: Duration) -> String {
    let hours = duration.as_secs() / 3600;
    let minutes = (duration.as_secs() % 3600) / 60;
    let seconds = duration.as_secs() % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}
