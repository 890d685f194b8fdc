#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ivc() -> Command {
    cargo_bin_cmd!("ivcal")
}

/// Write a dataset file with a unique name inside the system temp dir
pub fn write_dataset(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_ivcal.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, json).expect("write dataset");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub const SAMPLE_EVENTS: &str = r#"[
  { "id": 1, "start": "2024-08-29T10:00:00Z", "title": "Interview A", "desc": "1st Round", "candidate": "Mohan" },
  { "id": 2, "start": "2024-08-29T11:00:00Z", "title": "Interview B", "desc": "Tech" },
  { "id": 3, "start": "2024-08-30T09:00:00Z", "title": "Interview C", "desc": "HR" },
  { "id": 4, "start": "2024-09-02T09:30:00Z", "title": "Interview D", "desc": "Final" }
]"#;

pub const SAMPLE_MEETINGS: &str = r#"[
  {
    "id": 1,
    "start": "2024-08-29T10:00:00Z",
    "end": "2024-08-29T10:30:00Z",
    "user_det": { "handled_by": { "firstName": "Sam" } },
    "job_id": { "jobRequest_Title": "Engineer" }
  },
  {
    "id": 2,
    "start": "2024-08-29T11:00:00Z",
    "end": "2024-08-29T11:45:00Z",
    "user_det": { "handled_by": {} },
    "job_id": { "jobRequest_Title": "QA Analyst" }
  }
]"#;

/// Same meetings as SAMPLE_MEETINGS, delivered as a keyed object
pub const SAMPLE_MEETINGS_KEYED: &str = r#"{
  "m1": {
    "id": 1,
    "start": "2024-08-29T10:00:00Z",
    "end": "2024-08-29T10:30:00Z",
    "user_det": { "handled_by": { "firstName": "Sam" } },
    "job_id": { "jobRequest_Title": "Engineer" }
  },
  "m2": {
    "id": 2,
    "start": "2024-08-29T11:00:00Z",
    "end": "2024-08-29T11:45:00Z",
    "user_det": { "handled_by": {} },
    "job_id": { "jobRequest_Title": "QA Analyst" }
  }
}"#;

/// Seed the standard sample datasets and return (events_path, meetings_path)
pub fn seed_datasets(prefix: &str) -> (String, String) {
    (
        write_dataset(&format!("{prefix}_events"), SAMPLE_EVENTS),
        write_dataset(&format!("{prefix}_meetings"), SAMPLE_MEETINGS),
    )
}
