//! Ranking of aggregated scores.

use super::aggregate::{aggregate, DuplicatePolicy};
use super::field_scorer::{score, FieldWeights};
use super::synonyms::SynonymTable;
use crate::domain::ItemId;
use crate::models::{Corpus, Searchable};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::Hash;

/// A scored reference into a corpus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ranked {
    /// Row the score belongs to
    pub id: ItemId,

    /// Relevance; larger is better
    pub score: f64,
}

impl Ranked {
    pub fn new(id: ItemId, score: f64) -> Self {
        Self { id, score }
    }
}

/// Drop non-positive scores and sort descending.
///
/// Ties keep corpus order.
pub fn rank(aggregated: &BTreeMap<ItemId, u32>) -> Vec<Ranked> {
    let mut ranked: Vec<Ranked> = aggregated
        .iter()
        .filter(|(_, score)| **score > 0)
        .map(|(id, score)| Ranked::new(*id, f64::from(*score)))
        .collect();
    sort_ranked(&mut ranked);
    ranked
}

/// Sort descending by score, then ascending by id.
pub fn sort_ranked(ranked: &mut [Ranked]) {
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Full lexical pipeline: expand, score every variant, aggregate, rank.
pub fn rank_lexical<T>(
    corpus: &Corpus<T>,
    query: &str,
    synonyms: &SynonymTable,
    weights: FieldWeights,
    policy: DuplicatePolicy,
) -> Vec<Ranked>
where
    T: Searchable + Eq + Hash,
{
    let variants = synonyms.expand(query);
    let aggregated = aggregate(corpus, &variants, policy, |item, variant| {
        score(item, variant, weights)
    });
    rank(&aggregated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::field_scorer::{CONTACT_WEIGHTS, QA_WEIGHTS};
    use crate::models::{ContactItem, QaItem};

    #[test]
    fn test_rank_filters_zero_and_sorts() {
        let mut aggregated = BTreeMap::new();
        aggregated.insert(ItemId::new(0), 0);
        aggregated.insert(ItemId::new(1), 5);
        aggregated.insert(ItemId::new(2), 12);

        let ranked = rank(&aggregated);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, ItemId::new(2));
        assert_eq!(ranked[1].id, ItemId::new(1));
    }

    #[test]
    fn test_rank_ties_keep_corpus_order() {
        let mut aggregated = BTreeMap::new();
        aggregated.insert(ItemId::new(3), 7);
        aggregated.insert(ItemId::new(1), 7);
        aggregated.insert(ItemId::new(2), 9);

        let ids: Vec<usize> = rank(&aggregated).iter().map(|r| r.id.index()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_ranked_handles_nan() {
        let mut ranked = vec![
            Ranked::new(ItemId::new(0), f64::NAN),
            Ranked::new(ItemId::new(1), 0.5),
        ];
        sort_ranked(&mut ranked);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_rank_lexical_end_to_end() {
        let corpus = Corpus::new(vec![QaItem::new("검사 기한은 언제인가요", "매월 말일")
            .with_tags(["검사", "기한"])]);

        let ranked = rank_lexical(
            &corpus,
            "기한",
            &SynonymTable::korean_default(),
            QA_WEIGHTS,
            DuplicatePolicy::Distinct,
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, ItemId::new(0));
        assert!(ranked[0].score >= 15.0);
    }

    #[test]
    fn test_rank_lexical_synonym_reaches_alternate_wording() {
        let corpus = Corpus::new(vec![
            QaItem::new("점검 준비물", "신분증"),
            QaItem::new("주차 안내", "지하 2층"),
        ]);

        let ranked = rank_lexical(
            &corpus,
            "검사 준비물",
            &SynonymTable::korean_default(),
            QA_WEIGHTS,
            DuplicatePolicy::Distinct,
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, ItemId::new(0));
    }

    #[test]
    fn test_rank_lexical_no_match_is_empty() {
        let corpus = Corpus::new(vec![ContactItem::new("민원실", "1588-0000")]);

        let ranked = rank_lexical(
            &corpus,
            "zzz",
            &SynonymTable::korean_default(),
            CONTACT_WEIGHTS,
            DuplicatePolicy::Distinct,
        );

        assert!(ranked.is_empty());
    }
}
