use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::audit::auditor::SubstitutionAuditor;
use crate::audit::policy::is_compatible;
use crate::types::{FoodRecord, NutrientPredominant, ProfessionalGroup};

/// A candidate substitute that keeps the original's predominant nutrient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstituteSuggestion {
    pub food: FoodRecord,
    pub group: ProfessionalGroup,
    /// Grams of the predominant nutrient per 100 g of the substitute.
    pub nutrient_per_100g: f64,
    /// Absolute difference to the original, in grams per 100 g.
    pub nutrient_delta: f64,
    /// Grams of substitute supplying as much nutrient as 100 g of the original.
    pub equivalent_grams: Option<f64>,
    /// `equivalent_grams` expressed in the substitute's household unit.
    pub equivalent_household_units: Option<f64>,
}

impl SubstitutionAuditor {
    /// Proposes up to `limit` substitutes for `original` from `candidates`.
    ///
    /// Only candidates whose group is compatible with `nutrient` and that
    /// actually contain some of it are kept; the original itself is skipped.
    /// Closest nutrient content ranks first, then the shorter name.
    pub fn suggest_substitutes(
        &self,
        original: &FoodRecord,
        nutrient: NutrientPredominant,
        candidates: &[FoodRecord],
        limit: usize,
    ) -> Vec<SubstituteSuggestion> {
        let reference = original.nutrient(nutrient);

        let mut suggestions: Vec<SubstituteSuggestion> = candidates
            .iter()
            .filter(|c| c.key() != original.key())
            .filter_map(|candidate| {
                let group = self.classifier().classify(candidate);
                if !is_compatible(nutrient, group) {
                    return None;
                }
                let amount = candidate.nutrient(nutrient);
                if amount <= 0.0 {
                    return None;
                }

                let equivalent_grams = (reference > 0.0).then(|| reference * 100.0 / amount);
                let equivalent_household_units = equivalent_grams.and_then(|grams| {
                    candidate
                        .household_unit_weight_g
                        .filter(|w| w.is_finite() && *w > 0.0)
                        .map(|w| grams / w)
                });

                Some(SubstituteSuggestion {
                    food: candidate.clone(),
                    group,
                    nutrient_per_100g: amount,
                    nutrient_delta: (amount - reference).abs(),
                    equivalent_grams,
                    equivalent_household_units,
                })
            })
            .collect();

        suggestions.sort_by(|a, b| {
            a.nutrient_delta
                .partial_cmp(&b.nutrient_delta)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.food.name.chars().count().cmp(&b.food.name.chars().count()))
                .then_with(|| a.food.key().cmp(&b.food.key()))
        });
        suggestions.truncate(limit);
        suggestions
    }
}
