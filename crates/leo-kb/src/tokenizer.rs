//! Free-text tokenization for the candidate scorer.

use std::collections::HashSet;

use leo_core::constants::MIN_TOKEN_LEN;

/// Lowercase the text, strip every character that is not a letter, digit, or
/// whitespace (Unicode-aware), split on whitespace, and drop tokens shorter
/// than three characters. Membership only: counts are not kept.
pub fn token_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}
