use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::data::load_datasets;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let (events, meetings) = load_datasets(cfg)?;
        let summaries = Core::build_calendar(&events, meetings);
        ExportLogic::export(&summaries, format, file, range, *force)?;
    }
    Ok(())
}
