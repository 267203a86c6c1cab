use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::identifiers::{FoodKey, NutrientPredominant, ProfessionalGroup, RuleId};

/// Outcome of auditing a single rule.
///
/// `NotFound` is a data-integrity problem (the rule points at a missing
/// record) and is never folded into `Checked { consistent: false, .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum AuditOutcome {
    Checked {
        consistent: bool,
        substitute_group: ProfessionalGroup,
    },
    NotFound {
        substitute: FoodKey,
    },
}

impl AuditOutcome {
    pub fn is_consistent(&self) -> bool {
        matches!(self, AuditOutcome::Checked { consistent: true, .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AuditOutcome::NotFound { .. })
    }

    pub fn substitute_group(&self) -> Option<ProfessionalGroup> {
        match self {
            AuditOutcome::Checked { substitute_group, .. } => Some(*substitute_group),
            AuditOutcome::NotFound { .. } => None,
        }
    }
}

/// One flagged rule, with the fields needed to locate and fix it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFinding {
    pub rule_id: RuleId,
    pub original_food_name: String,
    pub substitute_food_name: String,
    pub substitute: FoodKey,
    pub nutrient_predominant: NutrientPredominant,
    /// `None` when the substitute could not be resolved.
    pub substitute_group: Option<ProfessionalGroup>,
}

/// A rule the sweep could not check because the lookup itself failed
/// (e.g. its source has no registered table).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditFailure {
    pub rule_id: RuleId,
    pub substitute: FoodKey,
    pub reason: String,
}

/// Result of a data-quality sweep over a rule collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub report_version: String,
    pub config_fingerprint: String,
    pub created_at: DateTime<Utc>, // informational only
    pub rules_scanned: usize,
    pub consistent: usize,
    pub inconsistent: Vec<AuditFinding>,
    pub not_found: Vec<AuditFinding>,
    #[serde(default)]
    pub failed: Vec<AuditFailure>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.inconsistent.is_empty() && self.not_found.is_empty() && self.failed.is_empty()
    }
}
