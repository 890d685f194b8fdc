use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file, seeded with the dataset paths
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing ivcal…");

    let cfg = Config::init_all(cli.events.clone(), cli.meetings.clone(), cli.test)?;

    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗓️  Events     : {}", cfg.events_file);
    println!("🗓️  Meetings   : {}", cfg.meetings_file);

    for (label, path) in [("events", &cfg.events_file), ("meetings", &cfg.meetings_file)] {
        if !expand_tilde(path).exists() {
            warning(format!(
                "The {} dataset does not exist yet: {}",
                label, path
            ));
        }
    }

    success("ivcal initialization completed!");
    Ok(())
}
