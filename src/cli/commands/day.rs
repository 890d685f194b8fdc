use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::data::load_datasets;
use crate::errors::{AppError, AppResult};
use crate::models::detail::{EnrichedDetail, NOT_AVAILABLE};
use crate::ui::messages::header;
use crate::utils::colors::colorize_fallback;
use crate::utils::date::parse_date;
use crate::utils::formatting::bold;
use crate::utils::time::parse_instant;
use chrono::NaiveDate;

/// Handle the `day` command: one detail card per interview on that day,
/// the counterpart of the calendar's detail dialog.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { date } = cmd {
        let day = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let date_key = day.format("%Y-%m-%d").to_string();

        let (events, meetings) = load_datasets(cfg)?;
        let summaries = Core::build_calendar(&events, meetings);

        let Some(summary) = summaries.iter().find(|s| s.date_key == date_key) else {
            return Err(AppError::NoInterviewsForDate(date_key));
        };

        header(format!("Interviews on {}", day.format("%d %b %Y")));
        println!("{} scheduled\n", summary.count);

        let sep = cfg.separator_char.repeat(44);
        for detail in &summary.details {
            print_card(detail, day, &sep);
        }
    }
    Ok(())
}

fn print_card(detail: &EnrichedDetail, day: NaiveDate, sep: &str) {
    println!("{}", bold(&detail.job_role));

    let round = format!(
        "Round: {}  Interviewer: {}",
        detail.desc,
        colorize_fallback(&detail.interviewer)
    );
    println!("{}", textwrap::fill(&round, 72));

    println!(
        "Date: {}  Time: {}",
        card_date(detail, day),
        colorize_fallback(&detail.interview_time)
    );
    println!(
        "Interview With: {}",
        colorize_fallback(detail.candidate.as_deref().unwrap_or(NOT_AVAILABLE))
    );
    println!("{}", sep);
}

/// "DD MMM YYYY" from the event's own instant, falling back to the bucket
/// day it was grouped under.
fn card_date(detail: &EnrichedDetail, day: NaiveDate) -> String {
    parse_instant(&detail.start)
        .map(|dt| dt.format("%d %b %Y").to_string())
        .unwrap_or_else(|| day.format("%d %b %Y").to_string())
}
