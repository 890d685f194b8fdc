use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::timezone;
use crate::data::load_datasets;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::models::detail::{EnrichedDetail, NOT_AVAILABLE};
use crate::ui::messages::warning;
use crate::utils::colors::count_badge;
use crate::utils::date::parse_month;
use crate::utils::formatting::truncate_visible;
use crate::utils::table::MonthGrid;
use crate::utils::time::{format_clock, parse_instant};
use chrono::Datelike;

// interior width of one calendar cell
const CELL_TEXT_WIDTH: usize = 17;

/// Handle the `show` command: the month calendar grid.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { month } = cmd {
        let (events, meetings) = load_datasets(cfg)?;
        let summaries = Core::build_calendar(&events, meetings);

        if summaries.is_empty() {
            warning("No interviews in the datasets, nothing to render.");
            return Ok(());
        }

        let offset_min = timezone::host_offset_min();

        let (year, month_no) = match month {
            Some(m) => parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?,
            None => {
                // summaries are never empty here, checked above
                let first = timezone::display_window(&summaries[0], offset_min).0.date();
                (first.year(), first.month())
            }
        };

        let mut grid = MonthGrid::new(year, month_no);
        let mut placed = 0;

        for summary in &summaries {
            // cells are placed after the display-zone shift, like the widget
            let day = timezone::display_window(summary, offset_min).0.date();
            if day.year() != year || day.month() != month_no {
                continue;
            }
            grid.set_day_lines(day.day(), cell_lines(summary));
            placed += 1;
        }

        println!("{}", grid.render());

        if placed == 0 {
            warning(format!("No interviews in {}-{:02}.", year, month_no));
        }
    }
    Ok(())
}

/// The calendar-cell preview: first interview's role, interviewer and
/// start time, plus the count badge for busy days.
fn cell_lines(summary: &DaySummary) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(first) = summary.details.first() {
        lines.push(truncate_visible(
            &format!("R: {}", first.job_role),
            CELL_TEXT_WIDTH,
        ));
        lines.push(truncate_visible(
            &format!("I: {}", first.interviewer),
            CELL_TEXT_WIDTH,
        ));
        lines.push(truncate_visible(
            &format!("T: {}", start_clock(first)),
            CELL_TEXT_WIDTH,
        ));
    }

    let badge = count_badge(summary.count);
    if !badge.is_empty() {
        lines.push(badge);
    }

    lines
}

fn start_clock(detail: &EnrichedDetail) -> String {
    parse_instant(&detail.start)
        .map(|dt| format_clock(&dt))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
