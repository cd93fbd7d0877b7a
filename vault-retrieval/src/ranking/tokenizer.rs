//! Query/content tokenizer shared by scorer and title matching.
//!
//! Case-insensitive, splits on whitespace and punctuation, drops tokens
//! shorter than [`MIN_TOKEN_LEN`] chars.

use std::collections::{BTreeSet, HashMap};

use vault_core::constants::MIN_TOKEN_LEN;

/// Tokenize into an ordered, deduplicated token set (query side).
pub fn token_set(text: &str) -> BTreeSet<String> {
    tokens(text).collect()
}

/// Tokenize into per-token occurrence counts (content side).
pub fn token_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for t in tokens(text) {
        *counts.entry(t).or_insert(0usize) += 1;
    }
    counts
}

fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= MIN_TOKEN_LEN)
        .map(|t| t.to_lowercase())
}
