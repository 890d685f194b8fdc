use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for ivcal
/// CLI application to browse interview schedules on a monthly calendar
#[derive(Parser)]
#[command(
    name = "ivcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple interview-calendar CLI: group interviews by day and inspect meeting details",
    long_about = None
)]
pub struct Cli {
    /// Override the events dataset path (useful for tests or custom data)
    #[arg(global = true, long = "events")]
    pub events: Option<String>,

    /// Override the meetings dataset path
    #[arg(global = true, long = "meetings")]
    pub meetings: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render the month calendar with per-day interview summaries
    Show {
        /// Month to render (YYYY-MM); defaults to the month of the first interview
        #[arg(long, short, help = "Month to render (YYYY-MM)")]
        month: Option<String>,
    },

    /// Show the interview detail cards for one day
    Day {
        /// Date of the day to inspect (YYYY-MM-DD)
        date: String,
    },

    /// List day summaries
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's interviews")]
        now: bool,

        #[arg(long = "details", help = "Show enriched details for each day")]
        details: bool,
    },

    /// Export enriched interview details
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
