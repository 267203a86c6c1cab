use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;

use crate::snapshot::snapshot::FoodSnapshot;
use crate::snapshot::versioning::{table_file, ManifestTableEntry, SnapshotBuildConfig, SnapshotManifest};
use crate::types::{FoodKey, FoodRecord, FoodSource};

#[derive(Debug, Error)]
pub enum SnapshotBuildError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Output directory already exists: {0}")]
    OutputExists(PathBuf),
    #[error("Duplicate food record: {0}")]
    DuplicateFoodKey(FoodKey),
}

/// SnapshotBuilder is single-threaded and non-reentrant.
pub struct SnapshotBuilder {
    config: SnapshotBuildConfig,
}

impl SnapshotBuilder {
    pub fn new(config: SnapshotBuildConfig) -> Self {
        Self { config }
    }

    /// Writes one table file per source plus `manifest.json` into
    /// `output_dir`, which must not exist yet. Every source gets a table,
    /// empty if no record belongs to it.
    pub fn build(
        &self,
        records: Vec<FoodRecord>,
        output_dir: &Path,
    ) -> Result<FoodSnapshot, SnapshotBuildError> {
        if output_dir.exists() {
            return Err(SnapshotBuildError::OutputExists(output_dir.to_path_buf()));
        }

        // 1. Sort by (source, id) so table bytes do not depend on input order
        let mut sorted = records;
        sorted.sort_by_key(|r| r.key());

        for pair in sorted.windows(2) {
            if pair[0].key() == pair[1].key() {
                return Err(SnapshotBuildError::DuplicateFoodKey(pair[0].key()));
            }
        }

        let mut by_source: BTreeMap<FoodSource, Vec<&FoodRecord>> =
            FoodSource::ALL.iter().map(|s| (*s, Vec::new())).collect();
        for record in &sorted {
            by_source.entry(record.source).or_default().push(record);
        }

        // 2. Serialize tables and compute versions
        // snapshot_version := sha256(config_json + for each table "source:version")
        let mut version_hasher = Sha256::new();
        version_hasher.update(serde_json::to_vec(&self.config)?);

        let mut tables = Vec::with_capacity(by_source.len());
        for (source, table_records) in &by_source {
            let bytes = serde_json::to_vec(table_records)?;
            let table_version = format!("sha256:{}", hex::encode(Sha256::digest(&bytes)));

            version_hasher.update(format!("{source}:{table_version}").as_bytes());

            let entry = ManifestTableEntry {
                source: *source,
                version: table_version,
                record_count: table_records.len(),
                file: table_file(*source),
            };
            tables.push((entry, bytes));
        }

        let snapshot_version = format!("sha256:{}", hex::encode(version_hasher.finalize()));

        // Note: created_at is strictly informational
        let manifest = SnapshotManifest {
            snapshot_version: snapshot_version.clone(),
            build_config: self.config.clone(),
            created_at: Utc::now(),
            record_count: sorted.len(),
            tables: tables.iter().map(|(entry, _)| entry.clone()).collect(),
        };

        // 3. Write to a temp dir keyed by the snapshot version
        let temp_suffix = format!("tmp.{}", &snapshot_version[7..19]);
        let temp_dir = output_dir.with_extension(temp_suffix);

        if temp_dir.exists() {
            fs::remove_dir_all(&temp_dir)?;
        }
        fs::create_dir_all(temp_dir.join("tables"))?;

        for (entry, bytes) in &tables {
            let mut f = fs::File::create(temp_dir.join(&entry.file))?;
            f.write_all(bytes)?;
            f.sync_all()?;
        }

        let manifest_path = temp_dir.join("manifest.json");
        let f_man = fs::File::create(manifest_path)?;
        serde_json::to_writer_pretty(&f_man, &manifest)?;
        f_man.sync_all()?;

        // 4. Atomic Rename
        fs::rename(&temp_dir, output_dir)?;

        info!(
            path = %output_dir.display(),
            records = manifest.record_count,
            version = %manifest.snapshot_version,
            "built composition table snapshot"
        );

        Ok(FoodSnapshot {
            root: output_dir.to_path_buf(),
            manifest,
        })
    }
}
