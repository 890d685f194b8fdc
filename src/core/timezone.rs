//! Display-zone adjustment for calendar instants.
//!
//! The calendar presents instants in a fixed +05:30 display zone. The
//! data pipeline historically shifted instants by the display offset minus
//! the host zone offset instead of doing a real zone conversion; that
//! shift is reproduced here as a named operation so it stays testable on
//! its own. It is only exact when the display zone has no DST (true for
//! +05:30) and it takes the host offset as a parameter so tests do not
//! depend on the machine's zone.

use crate::models::day_summary::DaySummary;
use chrono::{Duration, Local, NaiveDateTime, NaiveTime};

/// Minutes the display zone (+05:30) sits ahead of UTC.
pub const DISPLAY_OFFSET_MIN: i32 = 330;

/// Shift `t` so that, rendered in a zone `local_offset_min` minutes ahead
/// of UTC, it reads as the +05:30 wall clock.
pub fn to_display_instant(t: NaiveDateTime, local_offset_min: i32) -> NaiveDateTime {
    t + Duration::minutes(i64::from(DISPLAY_OFFSET_MIN - local_offset_min))
}

/// Host zone offset from UTC, in minutes.
pub fn host_offset_min() -> i32 {
    Local::now().offset().local_minus_utc() / 60
}

/// The widget window for a summary: both bounds sit at the bucket's
/// midnight, pushed through the display shift.
pub fn display_window(
    summary: &DaySummary,
    local_offset_min: i32,
) -> (NaiveDateTime, NaiveDateTime) {
    let start = summary.start.and_time(NaiveTime::MIN);
    let end = summary.end.and_time(NaiveTime::MIN);

    (
        to_display_instant(start, local_offset_min),
        to_display_instant(end, local_offset_min),
    )
}
