use super::detail::EnrichedDetail;
use chrono::NaiveDate;
use serde::Serialize;

/// The calendar-cell-level aggregation of all interviews on one day.
///
/// `count == details.len()` always holds and `date_key` is unique across
/// one aggregation pass; `start`/`end` are the bucket's calendar day with
/// no time-of-day component.
#[derive(Debug, Clone, Serialize)]
pub struct DaySummary {
    pub date_key: String, // "YYYY-MM-DD"
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub title: String,
    pub count: usize,
    pub details: Vec<EnrichedDetail>,
}
