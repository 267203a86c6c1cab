use serde::{Deserialize, Serialize};

use crate::types::food::FoodRecord;

/// A ranked food returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFood {
    pub food: FoodRecord,
    pub score: f32,
    pub why: MatchWhy,
}

/// Explanation for why a food received its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWhy {
    pub query_radicals: Vec<String>,
    pub matched_radicals: Vec<String>,
    pub order_preserved: bool,
    pub exact_phrase: bool,
    pub distractors: Vec<String>,
    pub candidate_tokens: usize,
}

/// Metadata describing the outcome of a search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub query: String,
    pub limit: usize,

    pub candidates_considered: usize,
    pub candidates_matched: usize,
    pub candidates_excluded_by_limit: usize,
}

/// The final result of a ranked search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub results: Vec<RankedFood>,
    pub search: SearchMetadata,
}

impl SearchResult {
    /// The `(record, score)` pairs in rank order.
    pub fn into_pairs(self) -> Vec<(FoodRecord, f32)> {
        self.results.into_iter().map(|r| (r.food, r.score)).collect()
    }
}

/// Internal: a candidate that has been scored but not yet admitted.
/// Holds a reference to the original record to avoid cloning prematurely.
#[derive(Debug, Clone)]
pub struct ScoredFood<'a> {
    pub food: &'a FoodRecord,

    pub score: f32,
    pub score_details: ScoreDetails,
}

/// Internal: detailed scoring components before serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDetails {
    pub query_radicals: Vec<String>,
    pub matched_radicals: Vec<String>,
    pub first_token_matched: bool,
    pub order_preserved: bool,
    pub exact_phrase: bool,
    pub distractors: Vec<String>,
    pub candidate_tokens: usize,
}

impl ScoreDetails {
    pub fn empty(candidate_tokens: usize) -> Self {
        Self {
            query_radicals: Vec::new(),
            matched_radicals: Vec::new(),
            first_token_matched: false,
            order_preserved: false,
            exact_phrase: false,
            distractors: Vec::new(),
            candidate_tokens,
        }
    }

    pub fn is_match(&self) -> bool {
        !self.matched_radicals.is_empty()
    }
}

impl From<ScoreDetails> for MatchWhy {
    fn from(details: ScoreDetails) -> Self {
        MatchWhy {
            query_radicals: details.query_radicals,
            matched_radicals: details.matched_radicals,
            order_preserved: details.order_preserved,
            exact_phrase: details.exact_phrase,
            distractors: details.distractors,
            candidate_tokens: details.candidate_tokens,
        }
    }
}
