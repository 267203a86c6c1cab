pub mod audit_report;
pub mod food;
pub mod identifiers;
pub mod search_bundle;
pub mod substitution;

pub use audit_report::{AuditFailure, AuditFinding, AuditOutcome, AuditReport};
pub use food::FoodRecord;
pub use identifiers::{
    ConfigurationError, FoodKey, FoodSource, NutrientPredominant, ProfessionalGroup, RuleId,
};
pub use search_bundle::{MatchWhy, RankedFood, ScoreDetails, ScoredFood, SearchMetadata, SearchResult};
pub use substitution::{RawSubstitutionRule, SubstitutionRule};
