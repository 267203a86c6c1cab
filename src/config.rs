use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::classification::ClassifierConfig;
use crate::selection::ScoringConfig;
use crate::text::NormalizerConfig;
pub use crate::types::ConfigurationError;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub normalizer: NormalizerConfig,
    pub scoring: ScoringConfig,
    pub classifier: ClassifierConfig,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            normalizer: NormalizerConfig::v0(),
            scoring: ScoringConfig::v0(),
            classifier: ClassifierConfig::v0(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.normalizer.validate()?;
        self.scoring.weights.validate()?;
        self.classifier.validate()?;
        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigurationError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "loaded engine configuration");
        Ok(config)
    }

    /// `sha256:<hex>` over the canonical JSON form. Equal configs always
    /// share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        // Plain structs and vectors: serialization cannot fail
        if let Ok(bytes) = serde_json::to_vec(self) {
            hasher.update(&bytes);
        }
        format!("sha256:{}", hex::encode(hasher.finalize()))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}
