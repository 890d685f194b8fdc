use ivcal::core::aggregator::aggregate;
use ivcal::core::logic::Core;
use ivcal::models::event::EventRecord;
use ivcal::models::meeting::MeetingSet;
use serde_json::json;

fn event(id: i64, start: &str, title: &str) -> EventRecord {
    EventRecord {
        id,
        start: start.to_string(),
        title: title.to_string(),
        desc: format!("{} round", title),
        candidate: None,
    }
}

fn sample_meetings() -> MeetingSet {
    MeetingSet::from_value(json!([
        {
            "id": 1,
            "start": "2024-08-01T10:00:00Z",
            "end": "2024-08-01T10:30:00Z",
            "user_det": { "handled_by": { "firstName": "Sam" } },
            "job_id": { "jobRequest_Title": "Engineer" }
        }
    ]))
    .expect("valid meetings")
}

#[test]
fn groups_events_by_calendar_day() {
    let events = vec![
        event(1, "2024-08-01T10:00:00Z", "A"),
        event(2, "2024-08-02T09:00:00Z", "B"),
        event(3, "2024-08-01T15:00:00Z", "C"),
    ];

    let summaries = aggregate(&events, &[]);

    assert_eq!(summaries.len(), 2);
    // bucket order is first-occurrence order
    assert_eq!(summaries[0].date_key, "2024-08-01");
    assert_eq!(summaries[1].date_key, "2024-08-02");
    assert_eq!(summaries[0].count, 2);
    assert_eq!(summaries[1].count, 1);

    // no event dropped, each appears exactly once
    let total: usize = summaries.iter().map(|s| s.count).sum();
    assert_eq!(total, events.len());

    let mut ids: Vec<i64> = summaries
        .iter()
        .flat_map(|s| s.details.iter().map(|d| d.id))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn count_always_matches_details_len() {
    let events = vec![
        event(1, "2024-08-01T10:00:00Z", "A"),
        event(2, "2024-08-01T11:00:00Z", "B"),
        event(3, "2024-08-03T09:00:00Z", "C"),
    ];

    for summary in aggregate(&events, &[]) {
        assert_eq!(summary.count, summary.details.len());
        assert_eq!(summary.start, summary.end);
        assert_eq!(summary.date_key, summary.start.format("%Y-%m-%d").to_string());
    }
}

#[test]
fn within_bucket_order_is_input_order() {
    let events = vec![
        event(10, "2024-08-01T15:00:00Z", "Later"),
        event(11, "2024-08-01T09:00:00Z", "Earlier"),
    ];

    let summaries = aggregate(&events, &[]);

    assert_eq!(summaries.len(), 1);
    // input order, not chronological order
    assert_eq!(summaries[0].details[0].id, 10);
    assert_eq!(summaries[0].details[1].id, 11);
    // the first event of the bucket names the summary
    assert_eq!(summaries[0].title, "Later");
}

#[test]
fn enrichment_resolves_all_three_fields() {
    let events = vec![event(1, "2024-08-01T10:00:00Z", "Interview A")];

    let summaries = Core::build_calendar(&events, sample_meetings());

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].date_key, "2024-08-01");
    assert_eq!(summaries[0].count, 1);

    let detail = &summaries[0].details[0];
    assert_eq!(detail.interviewer, "Sam");
    assert_eq!(detail.job_role, "Engineer");
    assert_eq!(detail.interview_time, "10:00 AM - 10:30 AM");
}

#[test]
fn unmatched_events_get_all_fallbacks() {
    let events = vec![
        event(7, "2024-08-05T10:00:00Z", "A"),
        event(8, "2024-08-05T11:00:00Z", "B"),
    ];

    let summaries = aggregate(&events, &[]);

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].count, 2);
    for detail in &summaries[0].details {
        assert_eq!(detail.interviewer, "Unknown");
        assert_eq!(detail.interview_time, "N/A");
        assert_eq!(detail.job_role, "N/A");
    }
}

#[test]
fn partial_meeting_chain_falls_back_per_field() {
    let meetings = MeetingSet::from_value(json!([
        {
            "id": 1,
            "start": "2024-08-01T10:00:00Z",
            "end": "2024-08-01T10:30:00Z",
            "user_det": { "handled_by": {} },
            "job_id": { "jobRequest_Title": "Engineer" }
        }
    ]))
    .expect("valid meetings");

    let events = vec![event(1, "2024-08-01T10:00:00Z", "A")];
    let summaries = Core::build_calendar(&events, meetings);
    let detail = &summaries[0].details[0];

    // only the broken link degrades, the others resolve
    assert_eq!(detail.interviewer, "Unknown");
    assert_eq!(detail.job_role, "Engineer");
    assert_eq!(detail.interview_time, "10:00 AM - 10:30 AM");
}

#[test]
fn matched_meeting_with_broken_times_degrades_time_only() {
    let meetings = MeetingSet::from_value(json!([
        {
            "id": 1,
            "start": "soon",
            "end": "2024-08-01T10:30:00Z",
            "user_det": { "handled_by": { "firstName": "Sam" } },
            "job_id": { "jobRequest_Title": "Engineer" }
        }
    ]))
    .expect("valid meetings");

    let events = vec![event(1, "2024-08-01T10:00:00Z", "A")];
    let summaries = Core::build_calendar(&events, meetings);
    let detail = &summaries[0].details[0];

    assert_eq!(detail.interview_time, "N/A");
    assert_eq!(detail.interviewer, "Sam");
    assert_eq!(detail.job_role, "Engineer");
}

#[test]
fn duplicate_meeting_ids_resolve_to_first_match() {
    let meetings = MeetingSet::from_value(json!([
        {
            "id": 1,
            "start": "2024-08-01T10:00:00Z",
            "end": "2024-08-01T10:30:00Z",
            "user_det": { "handled_by": { "firstName": "First" } },
            "job_id": { "jobRequest_Title": "Engineer" }
        },
        {
            "id": 1,
            "start": "2024-08-01T12:00:00Z",
            "end": "2024-08-01T12:30:00Z",
            "user_det": { "handled_by": { "firstName": "Second" } },
            "job_id": { "jobRequest_Title": "Manager" }
        }
    ]))
    .expect("valid meetings");

    let events = vec![event(1, "2024-08-01T10:00:00Z", "A")];
    let summaries = Core::build_calendar(&events, meetings);

    assert_eq!(summaries[0].details[0].interviewer, "First");
}

#[test]
fn keyed_mapping_is_equivalent_to_sequence() {
    let sequence = MeetingSet::from_value(json!([
        {
            "id": 1,
            "start": "2024-08-01T10:00:00Z",
            "end": "2024-08-01T10:30:00Z",
            "user_det": { "handled_by": { "firstName": "Sam" } },
            "job_id": { "jobRequest_Title": "Engineer" }
        },
        {
            "id": 2,
            "start": "2024-08-01T11:00:00Z",
            "end": "2024-08-01T11:30:00Z",
            "user_det": { "handled_by": { "firstName": "Ada" } },
            "job_id": { "jobRequest_Title": "Manager" }
        }
    ]))
    .expect("valid sequence");

    let keyed = MeetingSet::from_value(json!({
        "a": {
            "id": 1,
            "start": "2024-08-01T10:00:00Z",
            "end": "2024-08-01T10:30:00Z",
            "user_det": { "handled_by": { "firstName": "Sam" } },
            "job_id": { "jobRequest_Title": "Engineer" }
        },
        "b": {
            "id": 2,
            "start": "2024-08-01T11:00:00Z",
            "end": "2024-08-01T11:30:00Z",
            "user_det": { "handled_by": { "firstName": "Ada" } },
            "job_id": { "jobRequest_Title": "Manager" }
        }
    }))
    .expect("valid keyed mapping");

    let events = vec![
        event(1, "2024-08-01T10:00:00Z", "A"),
        event(2, "2024-08-01T11:00:00Z", "B"),
    ];

    let from_sequence = Core::build_calendar(&events, sequence);
    let from_keyed = Core::build_calendar(&events, keyed);

    assert_eq!(from_sequence.len(), from_keyed.len());
    for (a, b) in from_sequence.iter().zip(from_keyed.iter()) {
        assert_eq!(a.date_key, b.date_key);
        assert_eq!(a.details, b.details);
    }
}

#[test]
fn malformed_timestamp_is_skipped_not_fatal() {
    let events = vec![
        event(1, "2024-08-01T10:00:00Z", "Good"),
        event(2, "yesterday-ish", "Bad"),
        event(3, "2024-08-01T12:00:00Z", "Also good"),
    ];

    let summaries = aggregate(&events, &[]);

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].count, 2);
    let ids: Vec<i64> = summaries[0].details.iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn event_fields_survive_enrichment_unmodified() {
    let events = vec![EventRecord {
        id: 1,
        start: "2024-08-01T10:00:00Z".to_string(),
        title: "Interview A".to_string(),
        desc: "1st Round".to_string(),
        candidate: Some("Mohan".to_string()),
    }];

    let summaries = Core::build_calendar(&events, sample_meetings());
    let detail = &summaries[0].details[0];

    assert_eq!(detail.id, 1);
    assert_eq!(detail.start, "2024-08-01T10:00:00Z");
    assert_eq!(detail.title, "Interview A");
    assert_eq!(detail.desc, "1st Round");
    assert_eq!(detail.candidate.as_deref(), Some("Mohan"));
}

#[test]
fn date_key_uses_the_stated_wall_clock() {
    // 01:00 on Aug 2nd in +05:30 is still Aug 1st in UTC; the stated
    // wall clock wins
    let events = vec![event(1, "2024-08-02T01:00:00+05:30", "A")];

    let summaries = aggregate(&events, &[]);

    assert_eq!(summaries[0].date_key, "2024-08-02");
}
