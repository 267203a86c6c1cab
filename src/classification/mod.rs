//! Professional nutrition-group classification.

pub mod classifier;
pub mod rules;

use std::sync::LazyLock;

pub use classifier::GroupClassifier;
pub use rules::{ClassificationRule, ClassifierConfig, MacroFallback};

use crate::types::{FoodRecord, ProfessionalGroup};

static DEFAULT_CLASSIFIER: LazyLock<GroupClassifier> = LazyLock::new(GroupClassifier::default);

/// Classifies `food` with the default rule table.
pub fn classify(food: &FoodRecord) -> ProfessionalGroup {
    DEFAULT_CLASSIFIER.classify(food)
}
