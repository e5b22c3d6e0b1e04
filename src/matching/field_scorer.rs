//! Weighted field scoring.
//!
//! For every weighted field the scorer adds `3 * weight` when the field
//! contains the whole normalized query, plus `weight` for each query token
//! that also appears among the field's tokens. Repeated query tokens count
//! once per occurrence.

use super::tokenizer::{normalize, tokenize};
use crate::models::Searchable;
use std::collections::HashSet;

/// Multiplier applied when the field contains the whole query.
const CONTAINS_MULTIPLIER: u32 = 3;

/// Static field-name to weight table, one per item kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldWeights(&'static [(&'static str, u32)]);

impl FieldWeights {
    /// Wrap a static weight table.
    pub const fn new(weights: &'static [(&'static str, u32)]) -> Self {
        Self(weights)
    }

    /// Iterate over `(field, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.0.iter().copied()
    }

    /// Weight of a single field, if it is scored at all.
    pub fn weight(&self, field: &str) -> Option<u32> {
        self.iter().find(|(name, _)| *name == field).map(|(_, w)| w)
    }
}

/// Weights for FAQ entries.
pub const QA_WEIGHTS: FieldWeights =
    FieldWeights::new(&[("question", 5), ("tags", 4), ("answer", 3), ("policy_id", 2)]);

/// Weights for contact-directory rows.
pub const CONTACT_WEIGHTS: FieldWeights = FieldWeights::new(&[
    ("dept", 5),
    ("person", 4),
    ("tags", 4),
    ("note", 2),
    ("phone", 3),
]);

/// Score one item against one query.
///
/// Total over all inputs: absent fields and an empty query contribute 0.
pub fn score<T: Searchable + ?Sized>(item: &T, query: &str, weights: FieldWeights) -> u32 {
    let normalized_query = normalize(query);
    if normalized_query.is_empty() {
        return 0;
    }
    let query_tokens = tokenize(query);

    weights
        .iter()
        .map(|(field, weight)| {
            item.field(field)
                .map(|value| score_field(&value.joined(), &normalized_query, &query_tokens, weight))
                .unwrap_or(0)
        })
        .sum()
}

fn score_field(raw: &str, normalized_query: &str, query_tokens: &[String], weight: u32) -> u32 {
    let value = normalize(raw);
    if value.is_empty() {
        return 0;
    }

    let mut total = 0;
    if value.contains(normalized_query) {
        total += CONTAINS_MULTIPLIER * weight;
    }

    let field_tokens: HashSet<String> = tokenize(&value).into_iter().collect();
    let overlap = query_tokens
        .iter()
        .filter(|token| field_tokens.contains(*token))
        .count() as u32;

    total + overlap * weight
}
