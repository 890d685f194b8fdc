use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{SAMPLE_MEETINGS_KEYED, ivc, seed_datasets, write_dataset};

#[test]
fn show_renders_the_month_grid() {
    let (events, meetings) = seed_datasets("show_grid");

    ivc()
        .args([
            "--events",
            &events,
            "--meetings",
            &meetings,
            "show",
            "--month",
            "2024-08",
        ])
        .assert()
        .success()
        .stdout(contains("August 2024"))
        .stdout(contains("Mon"))
        .stdout(contains("R: Engineer"))
        .stdout(contains("I: Sam"));
}

#[test]
fn show_rejects_a_bad_month_expression() {
    let (events, meetings) = seed_datasets("show_bad_month");

    ivc()
        .args([
            "--events",
            &events,
            "--meetings",
            &meetings,
            "show",
            "--month",
            "2024-13",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn day_prints_one_card_per_interview() {
    let (events, meetings) = seed_datasets("day_cards");

    ivc()
        .args(["--events", &events, "--meetings", &meetings, "day", "2024-08-29"])
        .assert()
        .success()
        .stdout(contains("Interviews on 29 Aug 2024"))
        .stdout(contains("2 scheduled"))
        .stdout(contains("Engineer"))
        .stdout(contains("Sam"))
        .stdout(contains("10:00 AM - 10:30 AM"))
        .stdout(contains("Mohan"));
}

#[test]
fn day_without_interviews_fails_cleanly() {
    let (events, meetings) = seed_datasets("day_empty");

    ivc()
        .args(["--events", &events, "--meetings", &meetings, "day", "1999-01-01"])
        .assert()
        .failure()
        .stderr(contains("No interviews found for date 1999-01-01"));
}

#[test]
fn day_rejects_an_invalid_date() {
    let (events, meetings) = seed_datasets("day_invalid");

    ivc()
        .args(["--events", &events, "--meetings", &meetings, "day", "29/08/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn list_filters_by_period() {
    let (events, meetings) = seed_datasets("list_period");

    ivc()
        .args([
            "--events",
            &events,
            "--meetings",
            &meetings,
            "list",
            "--period",
            "2024-08",
        ])
        .assert()
        .success()
        .stdout(contains("2024-08-29"))
        .stdout(contains("2024-08-30"))
        .stdout(contains("2024-09-02").not());
}

#[test]
fn list_details_shows_enriched_rows() {
    let (events, meetings) = seed_datasets("list_details");

    ivc()
        .args([
            "--events",
            &events,
            "--meetings",
            &meetings,
            "list",
            "--details",
        ])
        .assert()
        .success()
        .stdout(contains("=== 2024-08-29 ==="))
        .stdout(contains("#1 Interview A"))
        .stdout(contains("Unknown"));
}

#[test]
fn keyed_meetings_file_behaves_like_the_array_file() {
    let events = write_dataset("keyed_events", common::SAMPLE_EVENTS);
    let meetings = write_dataset("keyed_meetings", SAMPLE_MEETINGS_KEYED);

    ivc()
        .args(["--events", &events, "--meetings", &meetings, "day", "2024-08-29"])
        .assert()
        .success()
        .stdout(contains("Sam"))
        .stdout(contains("QA Analyst"));
}

#[test]
fn malformed_event_is_skipped_with_a_warning() {
    let events = write_dataset(
        "skip_events",
        r#"[
          { "id": 1, "start": "2024-08-29T10:00:00Z", "title": "Good", "desc": "ok" },
          { "id": 2, "start": "not-a-timestamp", "title": "Bad", "desc": "broken" }
        ]"#,
    );
    let meetings = write_dataset("skip_meetings", "[]");

    ivc()
        .args(["--events", &events, "--meetings", &meetings, "list"])
        .assert()
        .success()
        .stdout(contains("2024-08-29"))
        .stderr(contains("Skipping event 2"));
}

#[test]
fn unreadable_meetings_shape_is_rejected() {
    let events = write_dataset("shape_events", common::SAMPLE_EVENTS);
    let meetings = write_dataset("shape_meetings", "42");

    ivc()
        .args(["--events", &events, "--meetings", &meetings, "list"])
        .assert()
        .failure()
        .stderr(contains("Unsupported meetings collection shape"));
}

#[test]
fn missing_dataset_file_is_reported() {
    let (_, meetings) = seed_datasets("missing_ds");

    ivc()
        .args([
            "--events",
            "/nonexistent/ivcal_events.json",
            "--meetings",
            &meetings,
            "list",
        ])
        .assert()
        .failure()
        .stderr(contains("Dataset file not found"));
}
