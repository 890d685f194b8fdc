use serde::{Deserialize, Serialize};

/// A single interview event from the scheduling dataset.
///
/// `start` is kept as the raw instant string supplied by the data source;
/// parsing happens during aggregation so one bad record cannot poison the
/// whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: i64,
    pub start: String, // ISO 8601 instant, e.g. "2024-08-29T18:00:00Z"
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
}
