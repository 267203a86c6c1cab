pub mod limiting;
pub mod ranking;

use std::cmp::Ordering;
use std::sync::LazyLock;

use tracing::debug;

use crate::config::EngineConfig;
use crate::text::{NormalizedQuery, Normalizer, Token};
use crate::types::{FoodRecord, ScoredFood, SearchMetadata, SearchResult};
pub use limiting::{apply_limit, LimitResult};
pub use ranking::{RadicalOverlapScorer, Scorer, ScoringConfig, ScoringWeights};

static DEFAULT_SEARCHER: LazyLock<FoodSearcher<RadicalOverlapScorer>> =
	LazyLock::new(FoodSearcher::default);

pub struct FoodSearcher<S> {
	normalizer: Normalizer,
	scorer: S,
}

impl Default for FoodSearcher<RadicalOverlapScorer> {
	fn default() -> Self {
		Self {
			normalizer: Normalizer::default(),
			scorer: RadicalOverlapScorer::default(),
		}
	}
}

impl FoodSearcher<RadicalOverlapScorer> {
	pub fn from_config(config: &EngineConfig) -> Self {
		let normalizer = Normalizer::new(config.normalizer.clone());
		let scorer = RadicalOverlapScorer::new(normalizer.clone(), config.scoring.clone());
		Self { normalizer, scorer }
	}
}

impl<S> FoodSearcher<S>
where
	S: Scorer,
{
	pub fn new(normalizer: Normalizer, scorer: S) -> Self {
		Self { normalizer, scorer }
	}

	pub fn scorer(&self) -> &S {
		&self.scorer
	}

	pub fn normalize_query(&self, query: &str) -> NormalizedQuery {
		self.normalizer.query(query)
	}

	/// Ranks `candidates` against `query` and keeps the best `limit`.
	///
	/// Candidates sharing no radical with the query are not hits and are
	/// dropped before ranking, so an empty query yields an empty result.
	pub fn search(&self, query: &str, candidates: &[FoodRecord], limit: usize) -> SearchResult {
		// 0. Normalize once
		let normalized = self.normalizer.query(query);

		// 1. Scoring Phase
		let mut scored: Vec<ScoredFood> = if normalized.is_empty() {
			Vec::new()
		} else {
			candidates
				.iter()
				.filter_map(|food| {
					let details = self.scorer.score(&normalized, &food.name);
					if !details.is_match() {
						return None;
					}
					let score = self.scorer.score_value(&details);
					Some(ScoredFood {
						food,
						score,
						score_details: details,
					})
				})
				.collect()
		};
		let candidates_matched = scored.len();

		// 2. Ordering Phase
		// Sort globally by (score desc, name length asc, key asc)
		scored.sort_by(rank_order);

		debug_assert!(scored.windows(2).all(|w| rank_order(&w[0], &w[1]) != Ordering::Greater));

		// 3. Limit Phase
		let LimitResult {
			ranked,
			candidates_excluded_by_limit,
		} = apply_limit(scored, limit);

		debug!(
			query = %normalized.raw,
			candidates = candidates.len(),
			matched = candidates_matched,
			returned = ranked.len(),
			"ranked food search"
		);

		SearchResult {
			results: ranked,
			search: SearchMetadata {
				query: normalized.raw,
				limit,
				candidates_considered: candidates.len(),
				candidates_matched,
				candidates_excluded_by_limit,
			},
		}
	}
}

fn rank_order(a: &ScoredFood<'_>, b: &ScoredFood<'_>) -> Ordering {
	// Descending score
	b.score
		.partial_cmp(&a.score)
		.unwrap_or(Ordering::Equal)
		// Simplest description first
		.then_with(|| a.food.name.chars().count().cmp(&b.food.name.chars().count()))
		.then_with(|| a.food.key().cmp(&b.food.key()))
}

/// Ranks `candidates` against `query` with the default configuration.
pub fn search(query: &str, candidates: &[FoodRecord], limit: usize) -> Vec<(FoodRecord, f32)> {
	DEFAULT_SEARCHER.search(query, candidates, limit).into_pairs()
}

/// Scores one candidate name against already-normalized query tokens.
pub fn score(query_tokens: &[Token], candidate_name: &str) -> f32 {
	let query = NormalizedQuery {
		raw: crate::text::normalize_to_text(query_tokens),
		tokens: query_tokens.to_vec(),
	};
	let scorer = DEFAULT_SEARCHER.scorer();
	let details = scorer.score(&query, candidate_name);
	scorer.score_value(&details)
}
