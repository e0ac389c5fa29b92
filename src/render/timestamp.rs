//! Timestamp rendering.

use crate::domain::Timestamp;

/// Render a time of day as zero-padded `HH:MM:SS`, with a truncated
/// millisecond suffix (`.mmm`) when requested.
#[must_use]
pub fn format_timestamp(ts: &Timestamp, show_millis: bool) -> String {
    if show_millis {
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            ts.hours,
            ts.minutes,
            ts.seconds,
            ts.micros / 1000
        )
    } else {
        format!("{:02}:{:02}:{:02}", ts.hours, ts.minutes, ts.seconds)
    }
}
