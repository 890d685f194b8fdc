//! Dataset loading: the two JSON collections the calendar is built from.
//!
//! Events must be an array; the meetings collection may be an array or a
//! keyed object and is normalized into a `MeetingSet` right here at the
//! boundary.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::EventRecord;
use crate::models::meeting::MeetingSet;
use crate::utils::path::expand_tilde;

pub fn load_events(path: &str) -> AppResult<Vec<EventRecord>> {
    let raw = read_dataset(&expand_tilde(path))?;
    let events: Vec<EventRecord> = serde_json::from_str(&raw)?;
    Ok(events)
}

pub fn load_meetings(path: &str) -> AppResult<MeetingSet> {
    let raw = read_dataset(&expand_tilde(path))?;
    let value: serde_json::Value = serde_json::from_str(&raw)?;
    MeetingSet::from_value(value)
}

/// Load both collections from the configured paths.
pub fn load_datasets(cfg: &Config) -> AppResult<(Vec<EventRecord>, MeetingSet)> {
    let events = load_events(&cfg.events_file)?;
    let meetings = load_meetings(&cfg.meetings_file)?;
    Ok((events, meetings))
}

fn read_dataset(path: &Path) -> AppResult<String> {
    if !path.exists() {
        return Err(AppError::DatasetNotFound(path.display().to_string()));
    }
    Ok(fs::read_to_string(path)?)
}
