use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::data::load_datasets;
use crate::errors::{AppError, AppResult};
use crate::models::day_summary::DaySummary;
use crate::utils::colors::colorize_fallback;
use crate::utils::date;
use crate::utils::formatting::truncate_visible;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        now: l_now,
        details,
    } = cmd
    {
        let (events, meetings) = load_datasets(cfg)?;
        let summaries = Core::build_calendar(&events, meetings);

        let bounds = resolve_bounds(period, *l_now)?;

        let selected: Vec<&DaySummary> = summaries
            .iter()
            .filter(|s| match bounds {
                None => true,
                Some((lo, hi)) => s.start >= lo && s.start <= hi,
            })
            .collect();

        if selected.is_empty() {
            println!("No interviews for the selected period.");
            return Ok(());
        }

        let show_weekday = !cfg.show_weekday.eq_ignore_ascii_case("none");

        let mut columns = vec![Column {
            header: "Date".to_string(),
            width: 10,
        }];
        if show_weekday {
            columns.push(Column {
                header: "Day".to_string(),
                width: 4,
            });
        }
        columns.extend([
            Column {
                header: "Title".to_string(),
                width: 24,
            },
            Column {
                header: "Count".to_string(),
                width: 5,
            },
            Column {
                header: "First slot".to_string(),
                width: 19,
            },
        ]);

        let mut table = Table::new(columns);

        for s in &selected {
            let mut row = vec![s.date_key.clone()];
            if show_weekday {
                row.push(s.start.format("%a").to_string());
            }
            row.push(truncate_visible(&s.title, 24));
            row.push(s.count.to_string());
            row.push(first_slot(s));
            table.add_row(row);
        }

        println!("{}", table.render());

        if *details {
            for s in &selected {
                println!("=== {} ===", s.date_key);
                for d in &s.details {
                    println!(
                        "- #{} {} | {} | {} | {}",
                        d.id,
                        d.title,
                        colorize_fallback(&d.job_role),
                        colorize_fallback(&d.interviewer),
                        colorize_fallback(&d.interview_time),
                    );
                }
                println!();
            }
        }
    }
    Ok(())
}

/// Date bounds for the listing: --today wins, then the period expression,
/// and no filter at all when neither is given (the datasets are static and
/// usually small).
fn resolve_bounds(
    period: &Option<String>,
    now: bool,
) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    if now {
        let today = date::today();
        return Ok(Some((today, today)));
    }

    match period {
        None => Ok(None),
        Some(p) if p.eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => date::period_bounds(p)
            .map(Some)
            .map_err(AppError::InvalidPeriod),
    }
}

fn first_slot(summary: &DaySummary) -> String {
    summary
        .details
        .first()
        .map(|d| colorize_fallback(&d.interview_time))
        .unwrap_or_default()
}
