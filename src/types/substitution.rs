use serde::{Deserialize, Serialize};

use crate::types::identifiers::{ConfigurationError, FoodKey, FoodSource, NutrientPredominant, RuleId};

/// A recommended swap between two foods. Owned by external curation tooling,
/// consumed read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstitutionRule {
    pub id: RuleId,
    pub original_food_name: String,
    pub substitute_source: FoodSource,
    pub substitute_food_id: u32,
    pub substitute_food_name: String,
    pub nutrient_predominant: NutrientPredominant,
}

impl SubstitutionRule {
    pub fn substitute_key(&self) -> FoodKey {
        FoodKey::new(self.substitute_source, self.substitute_food_id)
    }
}

/// A rule as it comes out of storage, enumerated fields still untyped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSubstitutionRule {
    pub id: u64,
    pub original_food_name: String,
    pub substitute_source: String,
    pub substitute_food_id: u32,
    pub substitute_food_name: String,
    pub nutrient_predominant: String,
}

impl TryFrom<RawSubstitutionRule> for SubstitutionRule {
    type Error = ConfigurationError;

    fn try_from(raw: RawSubstitutionRule) -> Result<Self, Self::Error> {
        Ok(SubstitutionRule {
            id: RuleId::new(raw.id),
            original_food_name: raw.original_food_name,
            substitute_source: raw.substitute_source.parse()?,
            substitute_food_id: raw.substitute_food_id,
            substitute_food_name: raw.substitute_food_name,
            nutrient_predominant: raw.nutrient_predominant.parse()?,
        })
    }
}
