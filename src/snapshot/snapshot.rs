// Read-only view of a built snapshot:
// no mutation
// no "update" methods
// every table is hash-checked against the manifest before use

use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;

use crate::gateway::{InMemoryTable, MultiSourceGateway};
use crate::snapshot::versioning::SnapshotManifest;
use crate::types::{FoodRecord, FoodSource};

#[derive(Debug, Error)]
pub enum SnapshotLoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Table version mismatch for {file}: manifest says {expected}, content hashes to {actual}")]
    VersionMismatch {
        file: String,
        expected: String,
        actual: String,
    },
    #[error("Table {file} holds a record from {found}, expected {expected}")]
    SourceMismatch {
        file: String,
        expected: FoodSource,
        found: FoodSource,
    },
    #[error("Table {file} holds {actual} records, manifest says {expected}")]
    RecordCountMismatch {
        file: String,
        expected: usize,
        actual: usize,
    },
}

#[derive(Debug)]
pub struct FoodSnapshot {
    pub root: PathBuf,
    pub manifest: SnapshotManifest,
}

impl FoodSnapshot {
    pub fn open(root: &Path) -> Result<Self, SnapshotLoadError> {
        let f = std::fs::File::open(root.join("manifest.json"))?;
        let manifest: SnapshotManifest = serde_json::from_reader(f)?;
        Ok(Self {
            root: root.to_path_buf(),
            manifest,
        })
    }

    /// Loads and verifies every table, grouped per source in manifest order.
    pub fn load_tables(&self) -> Result<Vec<(FoodSource, Vec<FoodRecord>)>, SnapshotLoadError> {
        let mut tables = Vec::with_capacity(self.manifest.tables.len());
        for entry in &self.manifest.tables {
            let bytes = std::fs::read(self.root.join(&entry.file))?;

            // Verify version matches manifest (recompute from content)
            let actual = format!("sha256:{}", hex::encode(Sha256::digest(&bytes)));
            if actual != entry.version {
                return Err(SnapshotLoadError::VersionMismatch {
                    file: entry.file.clone(),
                    expected: entry.version.clone(),
                    actual,
                });
            }

            let records: Vec<FoodRecord> = serde_json::from_slice(&bytes)?;
            if records.len() != entry.record_count {
                return Err(SnapshotLoadError::RecordCountMismatch {
                    file: entry.file.clone(),
                    expected: entry.record_count,
                    actual: records.len(),
                });
            }
            if let Some(stray) = records.iter().find(|r| r.source != entry.source) {
                return Err(SnapshotLoadError::SourceMismatch {
                    file: entry.file.clone(),
                    expected: entry.source,
                    found: stray.source,
                });
            }

            tables.push((entry.source, records));
        }
        Ok(tables)
    }

    /// A gateway serving exactly the records in this snapshot.
    pub fn load_gateway(&self) -> Result<MultiSourceGateway, SnapshotLoadError> {
        let mut gateway = MultiSourceGateway::new();
        let mut loaded = 0;
        for (source, records) in self.load_tables()? {
            loaded += records.len();
            gateway.register(InMemoryTable::from_records(source, records));
        }

        info!(
            path = %self.root.display(),
            records = loaded,
            version = %self.manifest.snapshot_version,
            "loaded composition table snapshot"
        );
        Ok(gateway)
    }
}
