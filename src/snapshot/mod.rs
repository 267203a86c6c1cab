pub mod builder;
pub mod snapshot;
pub mod versioning;

pub use builder::{SnapshotBuildError, SnapshotBuilder};
pub use snapshot::{FoodSnapshot, SnapshotLoadError};
pub use versioning::{ManifestTableEntry, SnapshotBuildConfig, SnapshotManifest};
