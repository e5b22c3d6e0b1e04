//! Text normalization and tokenization.
//!
//! Token characters are Hangul syllables (가-힣), ASCII lowercase letters and
//! digits; every other character separates tokens.

use once_cell::sync::Lazy;
use regex::Regex;

static SEPARATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^가-힣a-z0-9]+").expect("separator pattern is valid"));

/// Lowercase and trim.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split normalized text into tokens, dropping empties.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    SEPARATOR_RE
        .split(&normalized)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
