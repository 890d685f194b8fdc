// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::summaries_to_rows;
use crate::export::range::parse_range;
use crate::models::day_summary::DaySummary;
use crate::ui::messages::warning;

use chrono::NaiveDate;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the aggregated interview details.
    ///
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or expressions like:
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY-MM:YYYY-MM` (and the other interval forms)
    pub fn export(
        summaries: &[DaySummary],
        format: &ExportFormat,
        file: &str,
        range: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let date_bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let selected: Vec<DaySummary> = summaries
            .iter()
            .filter(|s| match date_bounds {
                None => true,
                Some((lo, hi)) => s.start >= lo && s.start <= hi,
            })
            .cloned()
            .collect();

        let rows = summaries_to_rows(&selected);

        if rows.is_empty() {
            warning("No interviews found for the selected range. Nothing to export.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
