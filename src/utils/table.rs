//! Table and calendar-grid rendering for CLI outputs.

use crate::utils::date::month_name;
use crate::utils::formatting::{bold, pad_visible};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            out.push_str(&pad_visible(&bold(&col.header), col.width));
            out.push(' ');
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows (cells beyond the declared columns are ignored)
        for row in &self.rows {
            for (i, col) in self.columns.iter().enumerate() {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                out.push_str(&pad_visible(cell, col.width));
                out.push(' ');
            }
            out.push('\n');
        }

        out
    }
}

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// One month rendered as a 7-column grid. Day cells carry the summary
/// lines set by the caller (role, interviewer, time, badge).
pub struct MonthGrid {
    year: i32,
    month: u32,
    cell_width: usize,
    day_lines: BTreeMap<u32, Vec<String>>,
}

impl MonthGrid {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            cell_width: 18,
            day_lines: BTreeMap::new(),
        }
    }

    pub fn set_day_lines(&mut self, day: u32, lines: Vec<String>) {
        self.day_lines.insert(day, lines);
    }

    pub fn render(&self) -> String {
        let w = self.cell_width;
        let total = (w + 1) * 7;
        let mut out = String::new();

        let title = format!("{} {}", month_name(self.month), self.year);
        let pad = total.saturating_sub(title.len()) / 2;
        out.push_str(&" ".repeat(pad));
        out.push_str(&bold(&title));
        out.push_str("\n\n");

        for wd in WEEKDAYS {
            out.push_str(&pad_visible(wd, w));
            out.push(' ');
        }
        out.push('\n');
        out.push_str(&"=".repeat(total));
        out.push('\n');

        let Some(first) = NaiveDate::from_ymd_opt(self.year, self.month, 1) else {
            return out;
        };

        let offset = first.weekday().num_days_from_monday() as i64;
        let days = crate::utils::date::all_days_of_month(self.year, self.month).len() as i64;

        let mut day = 1 - offset;
        while day <= days {
            let week: Vec<i64> = (0..7).map(|c| day + c).collect();

            let content_rows = week
                .iter()
                .filter(|d| (1..=days).contains(*d))
                .filter_map(|d| self.day_lines.get(&(*d as u32)))
                .map(Vec::len)
                .max()
                .unwrap_or(0);

            for line in 0..=content_rows {
                for d in &week {
                    let cell = if !(1..=days).contains(d) {
                        String::new()
                    } else if line == 0 {
                        self.day_header(*d as u32)
                    } else {
                        self.day_lines
                            .get(&(*d as u32))
                            .and_then(|lines| lines.get(line - 1))
                            .cloned()
                            .unwrap_or_default()
                    };

                    out.push_str(&pad_visible(&cell, w));
                    out.push(' ');
                }
                out.push('\n');
            }

            out.push_str(&"-".repeat(total));
            out.push('\n');

            day += 7;
        }

        out
    }

    fn day_header(&self, day: u32) -> String {
        if self.day_lines.contains_key(&day) {
            bold(&day.to_string())
        } else {
            day.to_string()
        }
    }
}
