//! Tool settings layered from `styleday.toml` and `STYLEDAY__`-prefixed
//! environment variables over built-in defaults. Settings are loaded in
//! `main` and passed down; nothing here is global.

use chrono::NaiveDate;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use styleday_core::calendar::Boundary;
use styleday_core::dates;

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default = "default_archive_dir")]
    pub archive_dir: String,
    #[serde(default = "default_theme_config")]
    pub theme_config: String,
    #[serde(default = "default_profile")]
    pub profile: String,
    #[serde(default = "default_quotes")]
    pub quotes: String,
    /// Inception date of the archive; days before it are never selectable.
    #[serde(default = "default_min_date")]
    pub min_date: String,
    /// Whether the inception date itself is selectable.
    #[serde(default)]
    pub boundary: Boundary,
    #[serde(default)]
    pub logging: LoggingSettings,
}

fn default_archive_dir() -> String {
    "public/archive".to_string()
}

fn default_theme_config() -> String {
    "public/theme-config.json".to_string()
}

fn default_profile() -> String {
    "public/profile.json".to_string()
}

fn default_quotes() -> String {
    "public/quotes.json".to_string()
}

fn default_min_date() -> String {
    "2026-01-01".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            archive_dir: default_archive_dir(),
            theme_config: default_theme_config(),
            profile: default_profile(),
            quotes: default_quotes(),
            min_date: default_min_date(),
            boundary: Boundary::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Settings {
    /// Layer the optional `styleday.toml` and environment entries over
    /// defaults. Environment entries override file values when present.
    pub fn load() -> Result<Self, ConfigError> {
        let file_source = File::with_name("styleday").required(false);
        let env_source = Environment::with_prefix("STYLEDAY")
            .prefix_separator("__")
            .separator("__");

        Config::builder()
            .add_source(file_source)
            .add_source(env_source)
            .build()?
            .try_deserialize()
    }

    /// The parsed inception date.
    pub fn min_date(&self) -> anyhow::Result<NaiveDate> {
        dates::parse_iso(&self.min_date)
            .map_err(|e| anyhow::anyhow!("invalid min_date in settings: {e}"))
    }
}
