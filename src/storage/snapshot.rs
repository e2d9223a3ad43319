//! JSON snapshot files.
//!
//! A snapshot bundles the user's goals with every activity record, as
//! exported by the storage layer.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::goals::Goal;
use crate::models::ActivitySnapshot;

/// Goals plus the activity they are measured against.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotFile {
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(flatten)]
    pub activity: ActivitySnapshot,
}

/// Parse a snapshot from JSON text.
pub fn parse_snapshot(json: &str) -> Result<SnapshotFile, SnapshotError> {
    let snapshot: SnapshotFile = serde_json::from_str(json)?;
    tracing::debug!(
        "Parsed snapshot with {} goals and {} records",
        snapshot.goals.len(),
        snapshot.activity.record_count()
    );
    Ok(snapshot)
}

/// Load a snapshot from a JSON file.
pub fn load_snapshot(path: &Path) -> Result<SnapshotFile, SnapshotError> {
    let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_snapshot(&content)
}

/// Write a snapshot as pretty-printed JSON.
pub fn save_snapshot(snapshot: &SnapshotFile, path: &Path) -> Result<(), SnapshotError> {
    let content = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, content).map_err(|source| SnapshotError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Snapshot loading errors.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}
