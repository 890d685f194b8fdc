// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::period_bounds;
use chrono::NaiveDate;

/// Parse --range (year / month / day / interval).
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - and `start:end` intervals of the same forms
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    period_bounds(r).map_err(AppError::InvalidPeriod)
}
