use chrono::{DateTime, Utc};

use crate::types::FoodSource;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotBuildConfig {
    pub version: String,
    pub hash_algorithm: String,
}

impl SnapshotBuildConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            hash_algorithm: "sha256".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestTableEntry {
    pub source: FoodSource,
    pub version: String,
    pub record_count: usize,
    pub file: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SnapshotManifest {
    pub snapshot_version: String,
    pub build_config: SnapshotBuildConfig,
    pub created_at: DateTime<Utc>, // informational only
    pub record_count: usize,
    pub tables: Vec<ManifestTableEntry>,
}

pub(crate) fn table_file(source: FoodSource) -> String {
    format!("tables/{}.json", source.as_str().to_ascii_lowercase())
}
