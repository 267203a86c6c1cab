use crate::types::{RankedFood, ScoredFood};

pub struct LimitResult {
    pub ranked: Vec<RankedFood>,
    pub candidates_excluded_by_limit: usize,
}

/// Admits the first `limit` scored candidates, which must already be in rank order.
pub fn apply_limit(scored: Vec<ScoredFood<'_>>, limit: usize) -> LimitResult {
    let total = scored.len();
    let ranked: Vec<RankedFood> = scored
        .into_iter()
        .take(limit)
        .map(|sfood| RankedFood {
            food: sfood.food.clone(),
            score: sfood.score,
            why: sfood.score_details.into(),
        })
        .collect();

    LimitResult {
        candidates_excluded_by_limit: total - ranked.len(),
        ranked,
    }
}
