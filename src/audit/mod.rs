//! Substitution rule auditing and substitute suggestion.

pub mod auditor;
pub mod policy;
pub mod store;
pub mod suggest;

use std::sync::LazyLock;

pub use auditor::{AuditError, SubstitutionAuditor};
pub use policy::{compatible_groups, is_compatible};
pub use store::{InMemoryRuleStore, JsonRuleStore, RuleStore, RuleStoreError};
pub use suggest::SubstituteSuggestion;

use crate::gateway::FoodLookupGateway;
use crate::types::{AuditOutcome, AuditReport, SubstitutionRule};

static DEFAULT_AUDITOR: LazyLock<SubstitutionAuditor> = LazyLock::new(SubstitutionAuditor::default);

/// Audits one rule with the default classifier.
pub fn audit<G>(rule: &SubstitutionRule, lookup: &G) -> Result<AuditOutcome, AuditError>
where
    G: FoodLookupGateway + ?Sized,
{
    DEFAULT_AUDITOR.audit(rule, lookup)
}

/// Audits a rule collection with the default classifier.
pub fn audit_batch<G>(rules: &[SubstitutionRule], lookup: &G) -> Result<AuditReport, AuditError>
where
    G: FoodLookupGateway + ?Sized,
{
    DEFAULT_AUDITOR.audit_batch(rules, lookup)
}
