// src/export/model.rs

use crate::models::day_summary::DaySummary;
use serde::Serialize;

/// Flat per-interview row for CSV / JSON export.
#[derive(Serialize, Clone, Debug)]
pub struct DetailExport {
    pub date: String,
    pub id: i64,
    pub title: String,
    pub desc: String,
    pub candidate: String,
    pub interviewer: String,
    pub interview_time: String,
    pub job_role: String,
}

/// Flatten day summaries into one export row per enriched detail.
pub(crate) fn summaries_to_rows(summaries: &[DaySummary]) -> Vec<DetailExport> {
    summaries
        .iter()
        .flat_map(|summary| {
            summary.details.iter().map(|d| DetailExport {
                date: summary.date_key.clone(),
                id: d.id,
                title: d.title.clone(),
                desc: d.desc.clone(),
                candidate: d.candidate.clone().unwrap_or_default(),
                interviewer: d.interviewer.clone(),
                interview_time: d.interview_time.clone(),
                job_role: d.job_role.clone(),
            })
        })
        .collect()
}
