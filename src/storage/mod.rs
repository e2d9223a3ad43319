//! Storage module for configuration and snapshot files.

pub mod config;
pub mod snapshot;

pub use config::{AppConfig, CalendarSettings, ConfigError, UnitPreferences, WeekStart};
pub use snapshot::{load_snapshot, parse_snapshot, save_snapshot, SnapshotError, SnapshotFile};
