use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::types::ConfigurationError;

/// Articles, prepositions and conjunctions that carry no food identity.
const DEFAULT_STOP_WORDS: &[&str] = &[
    "a", "o", "as", "os", "e", "ou", "de", "da", "do", "das", "dos", "com", "sem", "em", "na",
    "no", "nas", "nos", "ao", "aos", "para", "por", "um", "uma", "tipo",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizerConfig {
    pub stop_words: Vec<String>,
    /// Tokens shorter than this (in characters) are dropped.
    pub min_token_length: usize,
    /// Radicals are truncated to at most this many characters.
    pub radical_length: usize,
    /// Fold common plural endings ("-s", "-oes", "-aes") before truncation.
    pub strip_plurals: bool,
}

impl NormalizerConfig {
    pub fn v0() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|s| s.to_string()).collect(),
            min_token_length: 2,
            radical_length: 6,
            strip_plurals: true,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.radical_length == 0 {
            return Err(ConfigurationError::InvalidValue {
                field: "normalizer.radical_length",
                value: self.radical_length.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// A surviving word of the input: its folded surface form and its radical.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    pub radical: String,
}

/// A normalized query.
/// Normalization rules:
/// - Lowercase, diacritics stripped
/// - Split on anything that is not a letter or digit
/// - Short tokens and stop words dropped
/// - Empty token list handled by scorer (score 0.0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub raw: String,
    pub tokens: Vec<Token>,
}

impl NormalizedQuery {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn radicals(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.radical.as_str()).collect()
    }

    pub fn text(&self) -> String {
        normalize_to_text(&self.tokens)
    }
}

#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizerConfig,
    stop_words: BTreeSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::v0())
    }
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        let stop_words = config.stop_words.iter().map(|w| fold(w)).collect();
        Self { config, stop_words }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn query(&self, raw: impl Into<String>) -> NormalizedQuery {
        let raw = raw.into();
        let tokens = self.tokens(&raw);
        NormalizedQuery { raw, tokens }
    }

    pub fn tokens(&self, text: &str) -> Vec<Token> {
        fold(text)
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .filter(|word| word.chars().count() >= self.config.min_token_length)
            .filter(|word| !self.stop_words.contains(*word))
            .map(|word| Token {
                surface: word.to_string(),
                radical: self.radical_of_folded(word),
            })
            .collect()
    }

    /// Radical of a single word, folding it first.
    pub fn radical(&self, word: &str) -> String {
        self.radical_of_folded(&fold(word))
    }

    fn radical_of_folded(&self, word: &str) -> String {
        let stem = if self.config.strip_plurals {
            strip_plural(word)
        } else {
            word.to_string()
        };
        stem.chars().take(self.config.radical_length.max(1)).collect()
    }
}

/// Lowercase and strip diacritics down to base letters.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn strip_plural(word: &str) -> String {
    if word.chars().count() <= 3 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("oes").or_else(|| word.strip_suffix("aes")) {
        return format!("{stem}ao");
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.ends_with('s') => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Joins token surfaces back into a single normalized string.
pub fn normalize_to_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.surface.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
