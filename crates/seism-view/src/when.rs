//! Date and time rendering for the event timestamp.
//!
//! The public pair renders in the process-local zone, matching what a reader
//! of the list expects; the `_in` variants take an explicit zone so tests can
//! pin the output.

use chrono::{DateTime, Local, TimeZone};

/// Date part, `"Mar 3, 1984"` style, in the process-local time zone.
pub fn format_date(time_ms: i64) -> String {
    format_date_in(&Local, time_ms)
}

/// Time part, `"4:30 PM"` style (12-hour clock), in the process-local zone.
pub fn format_time(time_ms: i64) -> String {
    format_time_in(&Local, time_ms)
}

/// Zone-explicit variant of [`format_date`].
pub fn format_date_in<Tz: TimeZone>(zone: &Tz, time_ms: i64) -> String
where
    Tz::Offset: std::fmt::Display,
{
    stamp(zone, time_ms).format("%b %-d, %Y").to_string()
}

/// Zone-explicit variant of [`format_time`].
pub fn format_time_in<Tz: TimeZone>(zone: &Tz, time_ms: i64) -> String
where
    Tz::Offset: std::fmt::Display,
{
    stamp(zone, time_ms).format("%-I:%M %p").to_string()
}

// Out-of-range millis clamp to the epoch so the functions stay total.
fn stamp<Tz: TimeZone>(zone: &Tz, time_ms: i64) -> DateTime<Tz> {
    DateTime::from_timestamp_millis(time_ms)
        .unwrap_or(DateTime::UNIX_EPOCH)
        .with_timezone(zone)
}
