use std::collections::BTreeSet;

use crate::classification::rules::{ClassifierConfig, MacroFallback};
use crate::text::{fold, Normalizer};
use crate::types::{FoodRecord, ProfessionalGroup};

const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBOHYDRATE: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

#[derive(Debug, Clone)]
struct CompiledRule {
    group: ProfessionalGroup,
    /// Each keyword as its radical sequence.
    phrases: Vec<Vec<String>>,
}

impl CompiledRule {
    fn matches(&self, radicals: &[&str]) -> bool {
        self.phrases.iter().any(|phrase| {
            radicals
                .windows(phrase.len())
                .any(|window| window.iter().zip(phrase).all(|(a, b)| *a == b.as_str()))
        })
    }

    fn matches_head(&self, radicals: &[&str]) -> bool {
        self.phrases.iter().any(|phrase| {
            radicals.len() >= phrase.len()
                && radicals.iter().zip(phrase).all(|(a, b)| *a == b.as_str())
        })
    }
}

/// Ordered keyword-radical classifier. Pure: the same text always yields the
/// same group.
#[derive(Debug, Clone)]
pub struct GroupClassifier {
    normalizer: Normalizer,
    rules: Vec<CompiledRule>,
    negating_words: BTreeSet<String>,
    macro_fallback: Option<MacroFallback>,
}

impl Default for GroupClassifier {
    fn default() -> Self {
        Self::new(Normalizer::default(), ClassifierConfig::v0())
    }
}

impl GroupClassifier {
    pub fn new(normalizer: Normalizer, config: ClassifierConfig) -> Self {
        let rules = config
            .rules
            .iter()
            .map(|rule| CompiledRule {
                group: rule.group,
                phrases: rule
                    .keywords
                    .iter()
                    .map(|keyword| {
                        normalizer
                            .tokens(keyword)
                            .into_iter()
                            .map(|t| t.radical)
                            .collect::<Vec<_>>()
                    })
                    .filter(|phrase| !phrase.is_empty())
                    .collect(),
            })
            .collect();

        Self {
            normalizer,
            rules,
            negating_words: config.negating_words.iter().map(|w| fold(w)).collect(),
            macro_fallback: config.macro_fallback,
        }
    }

    pub fn classify(&self, food: &FoodRecord) -> ProfessionalGroup {
        self.keyword_group(&food.name, food.category.as_deref())
            .or_else(|| self.macro_group(food))
            .unwrap_or(ProfessionalGroup::Other)
    }

    /// Keyword rules only; no record, so no macronutrient fallback.
    pub fn classify_text(&self, name: &str, category: Option<&str>) -> ProfessionalGroup {
        self.keyword_group(name, category)
            .unwrap_or(ProfessionalGroup::Other)
    }

    fn keyword_group(&self, name: &str, category: Option<&str>) -> Option<ProfessionalGroup> {
        let name_radicals = self.affirmed_radicals(name);
        let name_radicals: Vec<&str> = name_radicals.iter().map(String::as_str).collect();

        let category_radicals = category.map(|c| self.affirmed_radicals(c)).unwrap_or_default();
        let category_radicals: Vec<&str> = category_radicals.iter().map(String::as_str).collect();

        // The head noun names the food ("Atum, conserva em óleo"); later
        // words only describe it. Rule order decides within each pass.
        self.rules
            .iter()
            .find(|rule| rule.matches_head(&name_radicals))
            .or_else(|| {
                self.rules
                    .iter()
                    .find(|rule| rule.matches(&name_radicals) || rule.matches(&category_radicals))
            })
            .map(|rule| rule.group)
    }

    /// Radicals of `text` with every negated stretch left out.
    fn affirmed_radicals(&self, text: &str) -> Vec<String> {
        text.split(',')
            .flat_map(|segment| self.normalizer.tokens(self.affirmed(segment)))
            .map(|t| t.radical)
            .collect()
    }

    /// The part of a comma-separated segment before its first negating word.
    fn affirmed<'a>(&self, segment: &'a str) -> &'a str {
        let mut word_start = None;
        for (i, c) in segment.char_indices().chain(std::iter::once((segment.len(), ' '))) {
            if c.is_alphanumeric() {
                word_start.get_or_insert(i);
            } else if let Some(start) = word_start.take() {
                if self.negating_words.contains(&fold(&segment[start..i])) {
                    return &segment[..start];
                }
            }
        }
        segment
    }

    fn macro_group(&self, food: &FoodRecord) -> Option<ProfessionalGroup> {
        let fallback = self.macro_fallback.as_ref()?;

        let shares = [
            (ProfessionalGroup::Protein, food.protein() * KCAL_PER_G_PROTEIN),
            (ProfessionalGroup::Carbohydrate, food.carbohydrate() * KCAL_PER_G_CARBOHYDRATE),
            (ProfessionalGroup::Fat, food.fat() * KCAL_PER_G_FAT),
        ];
        let total: f64 = shares.iter().map(|(_, kcal)| kcal).sum();
        if total <= 0.0 {
            return None;
        }

        // Ties resolve to the earlier entry
        let (group, kcal) = shares
            .iter()
            .copied()
            .fold(shares[0], |best, next| if next.1 > best.1 { next } else { best });

        (kcal / total >= fallback.min_energy_share).then_some(group)
    }
}
