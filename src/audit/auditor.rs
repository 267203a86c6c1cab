use chrono::Utc;
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};

use crate::audit::policy::is_compatible;
use crate::audit::store::{RuleStore, RuleStoreError};
use crate::classification::GroupClassifier;
use crate::config::EngineConfig;
use crate::gateway::{FoodLookupGateway, LookupError};
use crate::text::Normalizer;
use crate::types::{
    AuditFailure, AuditFinding, AuditOutcome, AuditReport, NutrientPredominant, SubstitutionRule,
};

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Lookup failed: {0}")]
    Lookup(#[from] LookupError),
    #[error("Rule storage failed: {0}")]
    Store(#[from] RuleStoreError),
}

/// Checks substitution rules against the group of the food they point at.
pub struct SubstitutionAuditor {
    classifier: GroupClassifier,
    config_fingerprint: String,
}

impl Default for SubstitutionAuditor {
    fn default() -> Self {
        Self::from_config(&EngineConfig::v0())
    }
}

impl SubstitutionAuditor {
    pub fn from_config(config: &EngineConfig) -> Self {
        let normalizer = Normalizer::new(config.normalizer.clone());
        Self {
            classifier: GroupClassifier::new(normalizer, config.classifier.clone()),
            config_fingerprint: config.fingerprint(),
        }
    }

    pub fn classifier(&self) -> &GroupClassifier {
        &self.classifier
    }

    /// Audits one rule.
    ///
    /// A dangling substitute reference yields `AuditOutcome::NotFound`; only
    /// gateway failures other than not-found are errors.
    pub fn audit<G>(&self, rule: &SubstitutionRule, lookup: &G) -> Result<AuditOutcome, AuditError>
    where
        G: FoodLookupGateway + ?Sized,
    {
        let substitute = match lookup.get(rule.substitute_source, rule.substitute_food_id) {
            Ok(record) => record,
            Err(LookupError::NotFound(key)) => {
                return Ok(AuditOutcome::NotFound { substitute: key });
            }
            Err(e) => return Err(e.into()),
        };

        let substitute_group = self.classifier.classify(&substitute);
        Ok(AuditOutcome::Checked {
            consistent: is_compatible(rule.nutrient_predominant, substitute_group),
            substitute_group,
        })
    }

    /// Audits every rule in `rules` and reports each inconsistent or
    /// dangling one.
    ///
    /// A rule whose lookup fails (rather than finding nothing) lands in
    /// `failed` and the sweep moves on to the next rule.
    pub fn audit_batch<G>(&self, rules: &[SubstitutionRule], lookup: &G) -> Result<AuditReport, AuditError>
    where
        G: FoodLookupGateway + ?Sized,
    {
        let mut ordered: Vec<&SubstitutionRule> = rules.iter().collect();
        ordered.sort_by_key(|r| r.id);

        // Report version covers the classifier config and every outcome
        let mut version_hasher = Sha256::new();
        version_hasher.update(self.config_fingerprint.as_bytes());

        let mut consistent = 0;
        let mut inconsistent = Vec::new();
        let mut not_found = Vec::new();
        let mut failed = Vec::new();

        for rule in &ordered {
            let outcome = match self.audit(rule, lookup) {
                Ok(outcome) => outcome,
                Err(AuditError::Lookup(e)) => {
                    warn!(
                        rule_id = %rule.id,
                        substitute = %rule.substitute_key(),
                        error = %e,
                        "substitution rule could not be checked"
                    );
                    version_hasher.update(format!("{}:failed", rule.id).as_bytes());
                    failed.push(AuditFailure {
                        rule_id: rule.id,
                        substitute: rule.substitute_key(),
                        reason: e.to_string(),
                    });
                    continue;
                }
                Err(e) => return Err(e),
            };

            let line = format!("{}:{}", rule.id, outcome_tag(&outcome));
            version_hasher.update(line.as_bytes());

            let finding = || AuditFinding {
                rule_id: rule.id,
                original_food_name: rule.original_food_name.clone(),
                substitute_food_name: rule.substitute_food_name.clone(),
                substitute: rule.substitute_key(),
                nutrient_predominant: rule.nutrient_predominant,
                substitute_group: outcome.substitute_group(),
            };

            match outcome {
                AuditOutcome::Checked { consistent: true, .. } => consistent += 1,
                AuditOutcome::Checked { substitute_group, .. } => {
                    warn!(
                        rule_id = %rule.id,
                        nutrient = %rule.nutrient_predominant,
                        substitute = %rule.substitute_food_name,
                        group = ?substitute_group,
                        "substitution rule inconsistent with predominant nutrient"
                    );
                    inconsistent.push(finding());
                }
                AuditOutcome::NotFound { substitute } => {
                    warn!(
                        rule_id = %rule.id,
                        substitute = %substitute,
                        "substitution rule references a missing food record"
                    );
                    not_found.push(finding());
                }
            }
        }

        let report_version = format!("sha256:{}", hex::encode(version_hasher.finalize()));

        info!(
            rules = ordered.len(),
            consistent,
            inconsistent = inconsistent.len(),
            not_found = not_found.len(),
            failed = failed.len(),
            "substitution audit complete"
        );

        // Note: created_at is strictly informational
        Ok(AuditReport {
            report_version,
            config_fingerprint: self.config_fingerprint.clone(),
            created_at: Utc::now(),
            rules_scanned: ordered.len(),
            consistent,
            inconsistent,
            not_found,
            failed,
        })
    }

    /// Reads rules from `store`, optionally only those preserving `filter`,
    /// and audits them as a batch.
    pub fn audit_store<R, G>(
        &self,
        store: &R,
        filter: Option<NutrientPredominant>,
        lookup: &G,
    ) -> Result<AuditReport, AuditError>
    where
        R: RuleStore + ?Sized,
        G: FoodLookupGateway + ?Sized,
    {
        let rules = store.rules(filter)?;
        self.audit_batch(&rules, lookup)
    }
}

fn outcome_tag(outcome: &AuditOutcome) -> String {
    match outcome {
        AuditOutcome::Checked {
            consistent,
            substitute_group,
        } => format!("checked:{consistent}:{substitute_group:?}"),
        AuditOutcome::NotFound { substitute } => format!("not_found:{substitute}"),
    }
}
