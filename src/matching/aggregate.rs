//! Best-score aggregation across query variants.

use crate::domain::ItemId;
use crate::models::Corpus;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// How rows with identical content are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// Every row is its own result, keyed by its [`ItemId`].
    #[default]
    Distinct,

    /// Structurally equal rows collapse onto their first occurrence.
    MergeIdentical,
}

/// Score every item against every variant and keep the maximum per item.
///
/// The result never exceeds the best single-variant score of any item:
/// repeated or synonym-expanded variants cannot inflate a score.
pub fn aggregate<T, F>(
    corpus: &Corpus<T>,
    variants: &[String],
    policy: DuplicatePolicy,
    mut score_fn: F,
) -> BTreeMap<ItemId, u32>
where
    T: Eq + Hash,
    F: FnMut(&T, &str) -> u32,
{
    let keys = aggregation_keys(corpus, policy);
    let mut best: BTreeMap<ItemId, u32> = BTreeMap::new();

    for variant in variants {
        for (id, item) in corpus.iter() {
            let score = score_fn(item, variant);
            let slot = best.entry(keys[id.index()]).or_insert(0);
            *slot = (*slot).max(score);
        }
    }

    best
}

/// Aggregation key for every row, indexed by position.
fn aggregation_keys<T: Eq + Hash>(corpus: &Corpus<T>, policy: DuplicatePolicy) -> Vec<ItemId> {
    match policy {
        DuplicatePolicy::Distinct => corpus.iter().map(|(id, _)| id).collect(),
        DuplicatePolicy::MergeIdentical => {
            let mut first_seen: HashMap<&T, ItemId> = HashMap::new();
            corpus
                .iter()
                .map(|(id, item)| *first_seen.entry(item).or_insert(id))
                .collect()
        }
    }
}
