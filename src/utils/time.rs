//! Time utilities: instant parsing and 12-hour clock formatting.

use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// Parse a dataset instant. RFC 3339 first (offsets and `Z` allowed), then
/// the bare `YYYY-MM-DDTHH:MM:SS` form, which is treated as UTC.
pub fn parse_instant(s: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }

    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|n| n.and_utc().fixed_offset())
}

/// 12-hour clock, e.g. "09:00 AM". Uses the wall clock exactly as stated
/// by the source instant, no zone conversion.
pub fn format_clock(dt: &DateTime<FixedOffset>) -> String {
    dt.format("%I:%M %p").to_string()
}

/// "hh:mm AM - hh:mm PM" range for a meeting slot.
pub fn format_time_range(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> String {
    format!("{} - {}", format_clock(start), format_clock(end))
}
