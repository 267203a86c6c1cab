use crate::types::{NutrientPredominant, ProfessionalGroup};

/// Groups a substitute may belong to while preserving `nutrient`.
/// Dairy counts as a fat source.
pub fn compatible_groups(nutrient: NutrientPredominant) -> &'static [ProfessionalGroup] {
    match nutrient {
        NutrientPredominant::Protein => &[ProfessionalGroup::Protein],
        NutrientPredominant::Carbohydrate => &[ProfessionalGroup::Carbohydrate],
        NutrientPredominant::Fat => &[ProfessionalGroup::Fat, ProfessionalGroup::Dairy],
    }
}

pub fn is_compatible(nutrient: NutrientPredominant, group: ProfessionalGroup) -> bool {
    compatible_groups(nutrient).contains(&group)
}
