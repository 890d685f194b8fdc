use serde::Serialize;

/// Fallback shown when the interviewer chain is missing.
pub const UNKNOWN_INTERVIEWER: &str = "Unknown";

/// Fallback shown for a missing meeting slot or job title.
pub const NOT_AVAILABLE: &str = "N/A";

/// An `EventRecord` augmented with the fields resolved from its joined
/// `MeetingRecord`. The original event fields are carried unmodified.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedDetail {
    pub id: i64,
    pub start: String,
    pub title: String,
    pub desc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<String>,
    pub interviewer: String,
    #[serde(rename = "interviewTime")]
    pub interview_time: String,
    #[serde(rename = "jobRole")]
    pub job_role: String,
}
