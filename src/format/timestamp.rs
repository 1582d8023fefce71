//! Timestamp rendering for log lines.

use chrono::{DateTime, Offset, TimeZone};

/// Render a fixed-width timestamp: weekday abbreviation, date, time with
/// milliseconds, and the local offset as whole hours (`GMT+2`).
///
/// Fractional-hour zones (e.g. UTC+5:30) are truncated to whole hours. This
/// is a known limitation of the format, kept for compatibility.
pub fn render_timestamp<Tz: TimeZone>(now: DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let offset_hours = now.offset().fix().local_minus_utc() / 3600;
    let offset = if offset_hours < 0 {
        offset_hours.to_string()
    } else {
        format!("+{}", offset_hours)
    };
    format!("{} GMT{}", now.format("%a %Y-%m-%d %H:%M:%S%.3f"), offset)
}
