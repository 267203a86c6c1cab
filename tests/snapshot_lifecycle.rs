use std::fs;

use chrono::{TimeZone, Utc};
use nutri_match::gateway::{FoodLookupGateway, LookupError};
use nutri_match::snapshot::{
    FoodSnapshot, SnapshotBuildConfig, SnapshotBuildError, SnapshotBuilder, SnapshotLoadError,
    SnapshotManifest,
};
use nutri_match::types::{FoodRecord, FoodSource};
use tempfile::tempdir;

fn records() -> Vec<FoodRecord> {
    vec![
        FoodRecord::new(FoodSource::TableB, 7, "Ovo, de galinha, cozido").with_macros(146.0, 13.3, 0.6, 9.5),
        FoodRecord::new(FoodSource::TableA, 2, "Arroz, integral, cozido")
            .with_macros(124.0, 2.6, 25.8, 1.0)
            .with_household_unit("1 colher de sopa", 25.0),
        FoodRecord::new(FoodSource::TableA, 1, "Frango, peito, sem pele, grelhado")
            .with_category("Carnes e derivados"),
    ]
}

#[test]
fn snapshot_round_trips_through_the_gateway() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("snapshot");

    let builder = SnapshotBuilder::new(SnapshotBuildConfig::v0());
    let built = builder.build(records(), &out).unwrap();

    assert_eq!(built.manifest.record_count, 3);
    let sources: Vec<FoodSource> = built.manifest.tables.iter().map(|t| t.source).collect();
    assert_eq!(sources, FoodSource::ALL.to_vec(), "every source gets a table");
    assert_eq!(built.manifest.tables[2].record_count, 0);

    let opened = FoodSnapshot::open(&out).unwrap();
    assert_eq!(opened.manifest.snapshot_version, built.manifest.snapshot_version);

    let gateway = opened.load_gateway().unwrap();
    for original in records() {
        let loaded = gateway.get(original.source, original.id).unwrap();
        assert_eq!(loaded, original);
    }
    assert!(matches!(
        gateway.get(FoodSource::TableC, 1),
        Err(LookupError::NotFound(_))
    ));
}

#[test]
fn snapshot_version_ignores_input_order() {
    let dir_a = tempdir().unwrap();
    let dir_b = tempdir().unwrap();
    let mut reversed = records();
    reversed.reverse();

    let builder = SnapshotBuilder::new(SnapshotBuildConfig::v0());
    let a = builder.build(records(), &dir_a.path().join("snap")).unwrap();
    let b = builder.build(reversed, &dir_b.path().join("snap")).unwrap();

    assert_eq!(a.manifest.snapshot_version, b.manifest.snapshot_version);
    for entry in &a.manifest.tables {
        let bytes_a = fs::read(dir_a.path().join("snap").join(&entry.file)).unwrap();
        let bytes_b = fs::read(dir_b.path().join("snap").join(&entry.file)).unwrap();
        assert_eq!(bytes_a, bytes_b, "table file mismatch: {}", entry.file);
    }

    // Normalize created_at before comparing manifests (informational field)
    let mut manifest_a: SnapshotManifest =
        serde_json::from_slice(&fs::read(dir_a.path().join("snap/manifest.json")).unwrap()).unwrap();
    let mut manifest_b: SnapshotManifest =
        serde_json::from_slice(&fs::read(dir_b.path().join("snap/manifest.json")).unwrap()).unwrap();
    let fixed_time = Utc.timestamp_opt(0, 0).unwrap();
    manifest_a.created_at = fixed_time;
    manifest_b.created_at = fixed_time;
    assert_eq!(
        serde_json::to_string_pretty(&manifest_a).unwrap(),
        serde_json::to_string_pretty(&manifest_b).unwrap()
    );
}

#[test]
fn config_change_changes_snapshot_version() {
    let dir = tempdir().unwrap();

    let mut config = SnapshotBuildConfig::v0();
    let a = SnapshotBuilder::new(config.clone())
        .build(records(), &dir.path().join("a"))
        .unwrap();
    config.version = "2".into();
    let b = SnapshotBuilder::new(config)
        .build(records(), &dir.path().join("b"))
        .unwrap();

    assert_ne!(a.manifest.snapshot_version, b.manifest.snapshot_version);
}

#[test]
fn duplicate_keys_are_fatal() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("dup");

    let mut input = records();
    input.push(FoodRecord::new(FoodSource::TableA, 2, "Arroz, branco, cozido"));

    match SnapshotBuilder::new(SnapshotBuildConfig::v0()).build(input, &out) {
        Err(SnapshotBuildError::DuplicateFoodKey(key)) => {
            assert_eq!(key.source, FoodSource::TableA);
            assert_eq!(key.id, 2);
        }
        other => panic!("expected duplicate key error, got {other:?}"),
    }
    assert!(!out.exists(), "snapshot output must not be created on failure");
}

#[test]
fn existing_output_is_refused() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("exists");
    fs::create_dir(&out).unwrap();

    let result = SnapshotBuilder::new(SnapshotBuildConfig::v0()).build(records(), &out);
    assert!(matches!(result, Err(SnapshotBuildError::OutputExists(_))));
}

#[test]
fn tampered_tables_are_rejected() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("tampered");

    let snapshot = SnapshotBuilder::new(SnapshotBuildConfig::v0())
        .build(records(), &out)
        .unwrap();

    let entry = &snapshot.manifest.tables[0];
    let path = out.join(&entry.file);
    let text = fs::read_to_string(&path).unwrap();
    fs::write(&path, text.replace("Arroz", "Arros")).unwrap();

    match FoodSnapshot::open(&out).unwrap().load_gateway() {
        Err(SnapshotLoadError::VersionMismatch { file, .. }) => assert_eq!(file, entry.file),
        other => panic!("expected version mismatch, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_manifest_is_an_io_error() {
    let dir = tempdir().unwrap();
    assert!(matches!(
        FoodSnapshot::open(dir.path()),
        Err(SnapshotLoadError::Io(_))
    ));
}
