//! Application configuration.
//!
//! Calendar conventions and preferred display units, persisted as TOML in
//! the platform data directory.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::goals::calendar::LocalCalendar;
use crate::models::{DistanceUnit, WeightUnit};

/// First day of the week for weekly goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// ISO weeks (default)
    #[default]
    Monday,
    Sunday,
    Saturday,
}

impl WeekStart {
    /// Matching chrono weekday.
    pub fn weekday(&self) -> Weekday {
        match self {
            WeekStart::Monday => Weekday::Mon,
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Saturday => Weekday::Sat,
        }
    }
}

impl std::fmt::Display for WeekStart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeekStart::Monday => write!(f, "Monday"),
            WeekStart::Sunday => write!(f, "Sunday"),
            WeekStart::Saturday => write!(f, "Saturday"),
        }
    }
}

/// Calendar settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarSettings {
    /// First day of the week
    pub week_start: WeekStart,
}

impl CalendarSettings {
    /// Build the calendar used for period bucketing.
    pub fn calendar(&self) -> LocalCalendar {
        LocalCalendar::new(self.week_start.weekday())
    }
}

/// Preferred units for new goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitPreferences {
    /// Distance unit
    pub distance: DistanceUnit,
    /// Weight unit
    pub weight: WeightUnit,
}

impl Default for UnitPreferences {
    fn default() -> Self {
        Self {
            distance: DistanceUnit::Mi,
            weight: WeightUnit::Lb,
        }
    }
}

impl UnitPreferences {
    /// Metric preferences (km, kg).
    pub fn metric() -> Self {
        Self {
            distance: DistanceUnit::Km,
            weight: WeightUnit::Kg,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Calendar settings
    #[serde(default)]
    pub calendar: CalendarSettings,
    /// Unit preferences
    #[serde(default)]
    pub units: UnitPreferences,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            calendar: CalendarSettings::default(),
            units: UnitPreferences::default(),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "ironstreak", "IronStreak")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let mut config = load_config_from(&get_config_path())?;
    config.data_dir = get_data_dir();
    Ok(config)
}

/// Load configuration from `path`, falling back to defaults if it is missing.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save application configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<PathBuf, ConfigError> {
    let path = get_config_path();
    save_config_to(config, &path)?;
    Ok(path)
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content = toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    tracing::info!("Saved config to {}", path.display());
    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
