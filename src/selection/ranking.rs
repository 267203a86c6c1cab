use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::text::{NormalizedQuery, Normalizer, NormalizerConfig};
use crate::types::{ConfigurationError, ScoreDetails};

/// Ingredient-list terms that mark a candidate as a composed dish.
const DEFAULT_DISTRACTORS: &[&str] = &[
    "molho", "maionese", "croutons", "parmesão", "anchova", "farinha", "óleo", "milanesa",
    "salada", "empanado", "recheado", "recheio", "calda", "cobertura", "torta", "pastel",
    "sanduíche", "coxinha", "farofa", "pizza",
];

/// Named, tunable scoring constants. Values in `v0()` are tuned against
/// the ordering scenarios in the integration tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    /// Awarded when the first query token (the main ingredient) matches.
    pub first_token_match: f32,
    /// Awarded per matching query token after the first.
    pub token_match: f32,
    /// Awarded when two or more matches appear in query order.
    pub order_bonus: f32,
    /// Awarded when the whole query appears as a contiguous run in a
    /// candidate without distractors.
    pub exact_phrase_bonus: f32,
    /// Subtracted per unmatched distractor token in the candidate. Must
    /// outweigh any length penalty a plain record can collect.
    pub distractor_penalty: f32,
    /// Candidate/query token ratio above which the length penalty applies.
    pub length_ratio_threshold: f32,
    /// Subtracted per unit of ratio above the threshold.
    pub length_ratio_penalty: f32,
}

impl ScoringWeights {
    pub fn v0() -> Self {
        Self {
            first_token_match: 3.0,
            token_match: 1.5,
            order_bonus: 1.0,
            exact_phrase_bonus: 5.0,
            distractor_penalty: 3.0,
            length_ratio_threshold: 4.0,
            length_ratio_penalty: 0.5,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let fields = [
            ("scoring.weights.first_token_match", self.first_token_match),
            ("scoring.weights.token_match", self.token_match),
            ("scoring.weights.order_bonus", self.order_bonus),
            ("scoring.weights.exact_phrase_bonus", self.exact_phrase_bonus),
            ("scoring.weights.distractor_penalty", self.distractor_penalty),
            ("scoring.weights.length_ratio_penalty", self.length_ratio_penalty),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigurationError::InvalidValue {
                    field,
                    value: value.to_string(),
                });
            }
        }
        if !self.length_ratio_threshold.is_finite() || self.length_ratio_threshold <= 0.0 {
            return Err(ConfigurationError::InvalidValue {
                field: "scoring.weights.length_ratio_threshold",
                value: self.length_ratio_threshold.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self::v0()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub distractor_vocabulary: Vec<String>,
}

impl ScoringConfig {
    pub fn v0() -> Self {
        Self {
            weights: ScoringWeights::v0(),
            distractor_vocabulary: DEFAULT_DISTRACTORS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::v0()
    }
}

pub trait Scorer {
    fn score(&self, query: &NormalizedQuery, candidate_name: &str) -> ScoreDetails;

    fn score_value(&self, details: &ScoreDetails) -> f32;
}

/// v0: radical overlap with order, phrase, distractor and length terms.
#[derive(Debug, Clone)]
pub struct RadicalOverlapScorer {
    normalizer: Normalizer,
    weights: ScoringWeights,
    distractors: BTreeSet<String>,
}

impl Default for RadicalOverlapScorer {
    fn default() -> Self {
        Self::new(Normalizer::new(NormalizerConfig::v0()), ScoringConfig::v0())
    }
}

impl RadicalOverlapScorer {
    pub fn new(normalizer: Normalizer, config: ScoringConfig) -> Self {
        let distractors = config
            .distractor_vocabulary
            .iter()
            .map(|term| normalizer.radical(term))
            .collect();
        Self {
            normalizer,
            weights: config.weights,
            distractors,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }
}

impl Scorer for RadicalOverlapScorer {
    fn score(&self, query: &NormalizedQuery, candidate_name: &str) -> ScoreDetails {
        let candidate = self.normalizer.tokens(candidate_name);
        if query.is_empty() {
            return ScoreDetails::empty(candidate.len());
        }

        let query_radicals: Vec<&str> = query.radicals();
        let candidate_radicals: Vec<&str> = candidate.iter().map(|t| t.radical.as_str()).collect();

        // (query index, first candidate position) for every matching query token
        let mut matches: Vec<(usize, usize)> = Vec::new();
        let mut seen = BTreeSet::new();
        for (qi, radical) in query_radicals.iter().enumerate() {
            if !seen.insert(*radical) {
                continue;
            }
            if let Some(pos) = candidate_radicals.iter().position(|c| c == radical) {
                matches.push((qi, pos));
            }
        }

        let first_token_matched = matches.first().is_some_and(|(qi, _)| *qi == 0);
        let order_preserved = matches.len() >= 2 && matches.windows(2).all(|w| w[0].1 < w[1].1);
        let exact_phrase = candidate_radicals
            .windows(query_radicals.len())
            .any(|window| window == query_radicals.as_slice());

        let distractors = candidate
            .iter()
            .filter(|t| !seen.contains(t.radical.as_str()))
            .filter(|t| self.distractors.contains(&t.radical))
            .map(|t| t.surface.clone())
            .collect();

        ScoreDetails {
            query_radicals: query_radicals.iter().map(|r| r.to_string()).collect(),
            matched_radicals: matches
                .iter()
                .map(|(qi, _)| query_radicals[*qi].to_string())
                .collect(),
            first_token_matched,
            order_preserved,
            exact_phrase,
            distractors,
            candidate_tokens: candidate.len(),
        }
    }

    fn score_value(&self, details: &ScoreDetails) -> f32 {
        if !details.is_match() {
            return 0.0;
        }
        let w = &self.weights;

        let other_matches = details.matched_radicals.len() - usize::from(details.first_token_matched);
        let mut score = other_matches as f32 * w.token_match;
        if details.first_token_matched {
            score += w.first_token_match;
        }
        if details.order_preserved {
            score += w.order_bonus;
        }
        // A composed dish quoting the query verbatim is still a composed dish
        if details.exact_phrase && details.distractors.is_empty() {
            score += w.exact_phrase_bonus;
        }

        score -= details.distractors.len() as f32 * w.distractor_penalty;

        let ratio = details.candidate_tokens as f32 / details.query_radicals.len() as f32;
        if ratio > w.length_ratio_threshold {
            score -= (ratio - w.length_ratio_threshold) * w.length_ratio_penalty;
        }

        debug_assert!(score.is_finite(), "score {score} is not finite");
        score
    }
}
