//! Event aggregation and enrichment.
//!
//! Turns the two raw datasets into calendar-ready day summaries: events
//! are bucketed by the calendar-day portion of their stated start instant,
//! joined to their meeting metadata by id, and enriched with the three
//! display fields.

use std::collections::HashMap;

use crate::models::day_summary::DaySummary;
use crate::models::detail::{EnrichedDetail, NOT_AVAILABLE, UNKNOWN_INTERVIEWER};
use crate::models::event::EventRecord;
use crate::models::meeting::MeetingRecord;
use crate::ui::messages::warning;
use crate::utils::time::{format_time_range, parse_instant};
use chrono::NaiveDate;

/// Group, join and enrich.
///
/// One `DaySummary` per distinct calendar day with at least one
/// well-formed event. Bucket order is first-occurrence order, order
/// within a bucket is input order, and every well-formed event lands in
/// exactly one summary.
///
/// An event whose `start` does not parse is skipped with a warning so a
/// day key is never derived from a corrupt timestamp.
pub fn aggregate(events: &[EventRecord], meetings: &[MeetingRecord]) -> Vec<DaySummary> {
    let mut order: Vec<NaiveDate> = Vec::new();
    let mut buckets: HashMap<NaiveDate, Vec<&EventRecord>> = HashMap::new();

    for event in events {
        let Some(start) = parse_instant(&event.start) else {
            warning(format!(
                "Skipping event {}: invalid start timestamp '{}'",
                event.id, event.start
            ));
            continue;
        };

        // calendar day as stated by the instant itself, no zone conversion
        let day = start.date_naive();

        let bucket = buckets.entry(day).or_insert_with(|| {
            order.push(day);
            Vec::new()
        });
        bucket.push(event);
    }

    order
        .into_iter()
        .filter_map(|day| {
            let bucket = buckets.remove(&day)?;
            Some(build_summary(day, &bucket, meetings))
        })
        .collect()
}

fn build_summary(day: NaiveDate, bucket: &[&EventRecord], meetings: &[MeetingRecord]) -> DaySummary {
    let details: Vec<EnrichedDetail> = bucket.iter().map(|e| enrich(e, meetings)).collect();

    DaySummary {
        date_key: day.format("%Y-%m-%d").to_string(),
        start: day,
        end: day,
        title: bucket.first().map(|e| e.title.clone()).unwrap_or_default(),
        count: details.len(),
        details,
    }
}

/// Join one event to the first meeting with a matching id and resolve the
/// three display fields, each with its named default. Duplicate meeting
/// ids resolve to the first record in normalized order.
fn enrich(event: &EventRecord, meetings: &[MeetingRecord]) -> EnrichedDetail {
    let meeting = meetings.iter().find(|m| m.id == event.id);

    let interviewer = meeting
        .and_then(|m| m.interviewer())
        .unwrap_or(UNKNOWN_INTERVIEWER)
        .to_string();

    let interview_time = meeting
        .and_then(format_meeting_slot)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    let job_role = meeting
        .and_then(|m| m.job_role())
        .unwrap_or(NOT_AVAILABLE)
        .to_string();

    EnrichedDetail {
        id: event.id,
        start: event.start.clone(),
        title: event.title.clone(),
        desc: event.desc.clone(),
        candidate: event.candidate.clone(),
        interviewer,
        interview_time,
        job_role,
    }
}

/// "hh:mm AM - hh:mm PM" when both meeting instants are present and parse;
/// a matched meeting with broken times degrades to the same fallback as no
/// match at all.
fn format_meeting_slot(meeting: &MeetingRecord) -> Option<String> {
    let start = parse_instant(meeting.start.as_deref()?)?;
    let end = parse_instant(meeting.end.as_deref()?)?;
    Some(format_time_range(&start, &end))
}
