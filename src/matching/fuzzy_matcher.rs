//! Fuzzy matching backed by the nucleo matcher.
//!
//! Every searchable field is scored as a fuzzy subsequence match. Scores are
//! made comparable across queries by dividing by the query's score against
//! itself, giving a ratio in `0.0..=1.0`. A row is kept when its best field
//! ratio is within `threshold` of a perfect match.
//!
//! nucleo only rewards word starts it recognizes, so an exact hit inside a
//! Hangul compound ("기한" in "제출기한") would score far below a perfect
//! match. A field that contains the query verbatim is instead scored by where
//! the hit starts: `1 - offset / 100`, the location penalty Fuse.js applies.

use super::ranking::{sort_ranked, Ranked};
use super::tokenizer::normalize;
use crate::models::{Corpus, Searchable};
use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};
use std::sync::Mutex;

/// Fields of a FAQ entry considered by the fuzzy strategy.
pub const QA_FUZZY_FIELDS: [&str; 4] = ["question", "answer", "tags", "policy_id"];

/// Default distance threshold (0 = perfect matches only, 1 = any match).
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.3;

/// Characters over which a verbatim hit's position penalty grows to 1.
const LOCATION_DISTANCE: f64 = 100.0;

/// Fuzzy matcher with a reusable scratch matcher.
pub struct FuzzyMatcher {
    // nucleo needs `&mut Matcher`; the lock lets ranking run through `&self`.
    matcher: Mutex<Matcher>,
    threshold: f64,
}

impl FuzzyMatcher {
    /// Create a matcher with the given distance threshold, clamped to `0.0..=1.0`.
    pub fn new(threshold: f64) -> Self {
        Self {
            matcher: Mutex::new(Matcher::new(Config::DEFAULT)),
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// Configured distance threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Rank `corpus` against `query`, considering only `fields`.
    pub fn rank<T: Searchable>(&self, query: &str, corpus: &Corpus<T>, fields: &[&str]) -> Vec<Ranked> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let pattern = Pattern::new(query, CaseMatching::Ignore, Normalization::Smart, AtomKind::Fuzzy);
        let mut matcher = self.matcher.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut buf = Vec::new();

        let perfect = match pattern.score(Utf32Str::new(query, &mut buf), &mut matcher) {
            Some(score) if score > 0 => f64::from(score),
            _ => return Vec::new(),
        };

        let normalized_query = normalize(query);
        let mut ranked = Vec::new();
        for (id, item) in corpus.iter() {
            let best = fields
                .iter()
                .filter_map(|name| item.field(name))
                .filter_map(|value| {
                    let text = value.joined();
                    let fuzzy = pattern
                        .score(Utf32Str::new(&text, &mut buf), &mut matcher)
                        .map(|score| (f64::from(score) / perfect).min(1.0));
                    let verbatim = substring_ratio(&normalize(&text), &normalized_query);
                    match (fuzzy, verbatim) {
                        (Some(a), Some(b)) => Some(a.max(b)),
                        (a, b) => a.or(b),
                    }
                })
                .fold(None, |acc: Option<f64>, ratio| Some(acc.map_or(ratio, |a| a.max(ratio))));

            if let Some(ratio) = best {
                if 1.0 - ratio <= self.threshold {
                    ranked.push(Ranked::new(id, ratio));
                }
            }
        }

        sort_ranked(&mut ranked);
        ranked
    }
}

/// Ratio for a field containing the query verbatim, decaying with the
/// character offset of the first occurrence.
fn substring_ratio(field: &str, query: &str) -> Option<f64> {
    let byte_offset = field.find(query)?;
    let offset = field[..byte_offset].chars().count() as f64;
    Some((1.0 - offset / LOCATION_DISTANCE).max(0.0))
}

impl Default for FuzzyMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_FUZZY_THRESHOLD)
    }
}
