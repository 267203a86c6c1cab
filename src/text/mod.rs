//! Text folding, tokenization and radical extraction.

pub mod normalizer;

use std::sync::LazyLock;

pub use normalizer::{fold, normalize_to_text, NormalizedQuery, Normalizer, NormalizerConfig, Token};

static DEFAULT_NORMALIZER: LazyLock<Normalizer> = LazyLock::new(Normalizer::default);

/// Tokenizes `text` with the default configuration.
///
/// Returns an empty sequence when nothing but stop words and punctuation
/// remain; callers treat that as "no matches", not as an error.
pub fn normalize(text: &str) -> Vec<Token> {
    DEFAULT_NORMALIZER.tokens(text)
}
