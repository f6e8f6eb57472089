use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::core::filters::DEFAULT_MIN_PRICE;
use crate::core::scoring::DEFAULT_SIMILARITY_THRESHOLD;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_restaurants_path")]
    pub restaurants_path: PathBuf,
    #[serde(default = "default_cuisines_path")]
    pub cuisines_path: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            restaurants_path: default_restaurants_path(),
            cuisines_path: default_cuisines_path(),
        }
    }
}

fn default_restaurants_path() -> PathBuf { PathBuf::from("csv/restaurants.csv") }
fn default_cuisines_path() -> PathBuf { PathBuf::from("csv/cuisines.csv") }

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SearchSettings {
    #[serde(default = "default_similarity_threshold")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub similarity_threshold: f64,
    #[serde(default = "default_min_price")]
    pub min_price: i64,
    #[serde(default = "default_display_limit")]
    #[validate(range(min = 1))]
    pub display_limit: usize,
    /// Engine letter code (`L` or `J`). Prompted for when unset.
    #[serde(default)]
    pub default_engine: Option<String>,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            similarity_threshold: default_similarity_threshold(),
            min_price: default_min_price(),
            display_limit: default_display_limit(),
            default_engine: None,
        }
    }
}

fn default_similarity_threshold() -> f64 { DEFAULT_SIMILARITY_THRESHOLD }
fn default_min_price() -> i64 { DEFAULT_MIN_PRICE }
fn default_display_limit() -> usize { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "warn".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RSEARCH)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RSEARCH__SEARCH__DISPLAY_LIMIT -> search.display_limit
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize::<Self>()?.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.search
            .validate()
            .map_err(|e| ConfigError::Message(format!("invalid search settings: {}", e)))?;
        Ok(self)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RSEARCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
