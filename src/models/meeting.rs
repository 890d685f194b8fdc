use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Metadata about one interview session (time range, interviewer, job
/// role), joined to an `EventRecord` by id. Every link of the nested
/// chains is optional in the source data, so each lookup resolves through
/// explicit `Option` chaining with a named default at the call site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: i64,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub user_det: Option<UserDet>,
    #[serde(default)]
    pub job_id: Option<JobRequest>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDet {
    #[serde(default)]
    pub handled_by: Option<HandledBy>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandledBy {
    #[serde(rename = "firstName", default)]
    pub first_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRequest {
    #[serde(rename = "jobRequest_Title", default)]
    pub job_request_title: Option<String>,
}

impl MeetingRecord {
    /// Interviewer first name, if the whole handler chain is present.
    pub fn interviewer(&self) -> Option<&str> {
        self.user_det
            .as_ref()?
            .handled_by
            .as_ref()?
            .first_name
            .as_deref()
    }

    /// Job title, if the job link is present.
    pub fn job_role(&self) -> Option<&str> {
        self.job_id.as_ref()?.job_request_title.as_deref()
    }
}

/// The meetings dataset arrives either as a plain array or as an object
/// keyed by an arbitrary id. The shape is checked here, once, before the
/// aggregation ever sees the data; anything else is rejected outright.
#[derive(Debug, Clone)]
pub enum MeetingSet {
    Sequence(Vec<MeetingRecord>),
    Keyed(Vec<(String, MeetingRecord)>),
}

impl MeetingSet {
    pub fn from_value(value: Value) -> AppResult<Self> {
        match value {
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for item in items {
                    records.push(serde_json::from_value(item)?);
                }
                Ok(MeetingSet::Sequence(records))
            }
            Value::Object(map) => {
                let mut entries = Vec::with_capacity(map.len());
                for (key, item) in map {
                    entries.push((key, serde_json::from_value(item)?));
                }
                Ok(MeetingSet::Keyed(entries))
            }
            other => Err(AppError::MeetingsShape(format!(
                "expected an array or an object, got {}",
                json_type_name(&other)
            ))),
        }
    }

    /// Flatten to the record sequence the aggregator works on. Keyed input
    /// keeps its insertion order, so the result is identical to supplying
    /// the equivalent array of its values.
    pub fn into_records(self) -> Vec<MeetingRecord> {
        match self {
            MeetingSet::Sequence(records) => records,
            MeetingSet::Keyed(entries) => entries.into_iter().map(|(_, m)| m).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            MeetingSet::Sequence(records) => records.len(),
            MeetingSet::Keyed(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
