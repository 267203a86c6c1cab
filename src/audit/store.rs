use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::{ConfigurationError, NutrientPredominant, RawSubstitutionRule, SubstitutionRule};

#[derive(Debug, Error)]
pub enum RuleStoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Read access to persisted substitution rules.
pub trait RuleStore {
    /// All rules, or only those preserving `filter` when given, ordered by id.
    fn rules(&self, filter: Option<NutrientPredominant>) -> Result<Vec<SubstitutionRule>, RuleStoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleStore {
    rules: Vec<SubstitutionRule>,
}

impl InMemoryRuleStore {
    pub fn new(rules: Vec<SubstitutionRule>) -> Self {
        Self { rules }
    }

    pub fn from_raw(raw: Vec<RawSubstitutionRule>) -> Result<Self, ConfigurationError> {
        let rules = raw
            .into_iter()
            .map(SubstitutionRule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }
}

impl RuleStore for InMemoryRuleStore {
    fn rules(&self, filter: Option<NutrientPredominant>) -> Result<Vec<SubstitutionRule>, RuleStoreError> {
        Ok(filtered(self.rules.iter().cloned(), filter))
    }
}

/// Rules kept as a JSON array of raw rules, re-read on every call.
#[derive(Debug, Clone)]
pub struct JsonRuleStore {
    path: PathBuf,
}

impl JsonRuleStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RuleStore for JsonRuleStore {
    fn rules(&self, filter: Option<NutrientPredominant>) -> Result<Vec<SubstitutionRule>, RuleStoreError> {
        let f = std::fs::File::open(&self.path)?;
        let raw: Vec<RawSubstitutionRule> = serde_json::from_reader(f)?;
        let rules = raw
            .into_iter()
            .map(SubstitutionRule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(filtered(rules.into_iter(), filter))
    }
}

fn filtered(
    rules: impl Iterator<Item = SubstitutionRule>,
    filter: Option<NutrientPredominant>,
) -> Vec<SubstitutionRule> {
    let mut rules: Vec<SubstitutionRule> = rules
        .filter(|r| filter.map_or(true, |n| r.nutrient_predominant == n))
        .collect();
    rules.sort_by_key(|r| r.id);
    rules
}
