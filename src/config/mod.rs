use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::ui::messages::warning;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub events_file: String,
    pub meetings_file: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: String,
}

fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> String {
    "Short".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: "data/events.json".to_string(),
            meetings_file: "data/meetings.json".to_string(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ivcal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ivcal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ivcal.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A file that fails to parse also falls back to defaults so a broken
    /// config can never make the tool unusable.
    pub fn load() -> Self {
        let path = Self::config_file();

        if !path.exists() {
            return Config::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!(
                        "Failed to parse configuration file {}: {} (using defaults)",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            },
            Err(e) => {
                warning(format!(
                    "Failed to read configuration file {}: {} (using defaults)",
                    path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    /// Initialize the configuration directory and file.
    ///
    /// Dataset paths from the command line (if any) become the configured
    /// defaults. Test mode skips writing the file.
    pub fn init_all(
        events_override: Option<String>,
        meetings_override: Option<String>,
        is_test: bool,
    ) -> io::Result<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(events) = events_override {
            config.events_file = events;
        }
        if let Some(meetings) = meetings_override {
            config.meetings_file = meetings;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(config)
    }

    /// Report configuration keys missing from the on-disk file (they are
    /// filled from defaults at load time).
    pub fn missing_fields() -> io::Result<Vec<String>> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(vec!["<no configuration file>".to_string()]);
        }

        let content = fs::read_to_string(&path)?;
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(io::Error::other)?;

        let required = [
            "events_file",
            "meetings_file",
            "separator_char",
            "show_weekday",
        ];

        Ok(required
            .into_iter()
            .filter(|k| value.get(*k).is_none())
            .map(str::to_string)
            .collect())
    }
}
