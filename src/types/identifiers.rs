use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A caller or configuration defect, as opposed to a data defect.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Unknown food source: {0}")]
    UnknownSource(String),
    #[error("Unknown predominant nutrient: {0}")]
    UnknownNutrient(String),
    #[error("Food source {0} is not registered with this gateway")]
    UnregisteredSource(FoodSource),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
    #[error("IO error reading configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One of the three independent composition tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FoodSource {
    #[serde(rename = "TABLE_A")]
    TableA,
    #[serde(rename = "TABLE_B")]
    TableB,
    #[serde(rename = "TABLE_C")]
    TableC,
}

impl FoodSource {
    pub const ALL: [FoodSource; 3] = [FoodSource::TableA, FoodSource::TableB, FoodSource::TableC];

    pub fn as_str(&self) -> &'static str {
        match self {
            FoodSource::TableA => "TABLE_A",
            FoodSource::TableB => "TABLE_B",
            FoodSource::TableC => "TABLE_C",
        }
    }
}

impl fmt::Display for FoodSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodSource {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TABLE_A" => Ok(FoodSource::TableA),
            "TABLE_B" => Ok(FoodSource::TableB),
            "TABLE_C" => Ok(FoodSource::TableC),
            _ => Err(ConfigurationError::UnknownSource(s.to_string())),
        }
    }
}

/// `(source, id)` uniquely identifies a food record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoodKey {
    pub source: FoodSource,
    pub id: u32,
}

impl FoodKey {
    pub fn new(source: FoodSource, id: u32) -> Self {
        Self { source, id }
    }
}

impl fmt::Display for FoodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(u64);

impl RuleId {
    pub fn new(id: u64) -> Self {
        RuleId(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The macronutrient a substitution rule claims to preserve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NutrientPredominant {
    Protein,
    Carbohydrate,
    Fat,
}

impl NutrientPredominant {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientPredominant::Protein => "PROTEIN",
            NutrientPredominant::Carbohydrate => "CARBOHYDRATE",
            NutrientPredominant::Fat => "FAT",
        }
    }
}

impl fmt::Display for NutrientPredominant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NutrientPredominant {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PROTEIN" => Ok(NutrientPredominant::Protein),
            "CARBOHYDRATE" => Ok(NutrientPredominant::Carbohydrate),
            "FAT" => Ok(NutrientPredominant::Fat),
            _ => Err(ConfigurationError::UnknownNutrient(s.to_string())),
        }
    }
}

/// Coarse nutrition-practice classification of a food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProfessionalGroup {
    Protein,
    Carbohydrate,
    Fruit,
    Vegetable,
    Fat,
    Dairy,
    Other,
}

impl ProfessionalGroup {
    pub const ALL: [ProfessionalGroup; 7] = [
        ProfessionalGroup::Protein,
        ProfessionalGroup::Carbohydrate,
        ProfessionalGroup::Fruit,
        ProfessionalGroup::Vegetable,
        ProfessionalGroup::Fat,
        ProfessionalGroup::Dairy,
        ProfessionalGroup::Other,
    ];
}
