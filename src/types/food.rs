use serde::{Deserialize, Serialize};

use crate::types::identifiers::{FoodKey, FoodSource, NutrientPredominant};

/// One composition-table entry. Immutable from this crate's point of view.
///
/// Names are human-authored and neither unique nor clean; macronutrient
/// fields may be missing and are read as zero wherever a number is needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    pub source: FoodSource,
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub energy_kcal: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub carbohydrate_g: Option<f64>,
    #[serde(default)]
    pub fat_g: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_unit_weight_g: Option<f64>,
}

impl FoodRecord {
    /// A record with only its identity and name set.
    pub fn new(source: FoodSource, id: u32, name: impl Into<String>) -> Self {
        Self {
            source,
            id,
            name: name.into(),
            category: None,
            energy_kcal: None,
            protein_g: None,
            carbohydrate_g: None,
            fat_g: None,
            household_unit: None,
            household_unit_weight_g: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_macros(mut self, energy_kcal: f64, protein_g: f64, carbohydrate_g: f64, fat_g: f64) -> Self {
        self.energy_kcal = Some(energy_kcal);
        self.protein_g = Some(protein_g);
        self.carbohydrate_g = Some(carbohydrate_g);
        self.fat_g = Some(fat_g);
        self
    }

    pub fn with_household_unit(mut self, unit: impl Into<String>, weight_g: f64) -> Self {
        self.household_unit = Some(unit.into());
        self.household_unit_weight_g = Some(weight_g);
        self
    }

    pub fn key(&self) -> FoodKey {
        FoodKey::new(self.source, self.id)
    }

    pub fn energy(&self) -> f64 {
        non_negative(self.energy_kcal)
    }

    pub fn protein(&self) -> f64 {
        non_negative(self.protein_g)
    }

    pub fn carbohydrate(&self) -> f64 {
        non_negative(self.carbohydrate_g)
    }

    pub fn fat(&self) -> f64 {
        non_negative(self.fat_g)
    }

    /// Grams per 100 g of the given macronutrient.
    pub fn nutrient(&self, nutrient: NutrientPredominant) -> f64 {
        match nutrient {
            NutrientPredominant::Protein => self.protein(),
            NutrientPredominant::Carbohydrate => self.carbohydrate(),
            NutrientPredominant::Fat => self.fat(),
        }
    }
}

// Missing, negative and NaN values all read as zero.
fn non_negative(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => 0.0,
    }
}
