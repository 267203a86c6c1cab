//! Deterministic food search, nutrition-group classification and
//! substitution auditing over nutrition composition tables.
//!
//! `nutri-match` folds and tokenizes free-text food names into radicals,
//! ranks composition-table records against a query, maps records to
//! professional nutrition groups through an ordered rule table, and audits
//! substitution rules whose substitute does not preserve the declared
//! predominant nutrient. All scoring and classification is pure: identical
//! inputs always produce identical outputs. I/O happens only at the
//! [`gateway`], [`snapshot`] and rule-store boundaries.

pub mod audit;
pub mod classification;
pub mod config;
pub mod gateway;
pub mod selection;
pub mod snapshot;
pub mod text;
pub mod types;

pub use audit::{audit, audit_batch};
pub use classification::classify;
pub use selection::{score, search};
pub use text::{normalize, normalize_to_text};
