//! Integration tests for the lexical ranking pipeline.
//!
//! Tokenizer, synonym expansion, field scoring, best-score aggregation and
//! ranking exercised together through the public API.

mod mocks;

use faq_lookup::domain::ItemId;
use faq_lookup::matching::{
    aggregate, rank, rank_lexical, score, tokenize, DuplicatePolicy, SynonymTable, QA_WEIGHTS,
};
use faq_lookup::models::{Corpus, QaItem};
use mocks::sample_snapshot;

#[test]
fn test_single_entry_end_to_end() {
    let corpus = Corpus::new(vec![
        QaItem::new("검사 기한은 언제인가요", "매월 말일").with_tags(["검사", "기한"])
    ]);

    assert_eq!(tokenize("기한"), vec!["기한"]);

    let ranked = rank_lexical(
        &corpus,
        "기한",
        &SynonymTable::korean_default(),
        QA_WEIGHTS,
        DuplicatePolicy::Distinct,
    );

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, ItemId::new(0));
    assert!(ranked[0].score > 0.0);
}

#[test]
fn test_synonym_symmetry() {
    let table = SynonymTable::new([("전화", vec!["연락"])]);

    let forward = table.expand("전화 문의");
    assert_eq!(forward[0], "전화 문의");
    assert!(forward.contains(&"연락 문의".to_string()));

    let backward = table.expand("연락 문의");
    assert!(backward.contains(&"전화 문의".to_string()));
}

#[test]
fn test_synonym_replacement_is_literal() {
    let table = SynonymTable::new([("전화", vec!["연락"])]);

    // the trigger is the standalone token; replacement also rewrites "전화번호"
    let variants = table.expand("전화 전화번호");
    assert!(variants.contains(&"연락 연락번호".to_string()));

    // a term only present inside a longer token does not trigger
    assert_eq!(table.expand("전화번호"), vec!["전화번호"]);
}

#[test]
fn test_aggregate_keeps_best_variant_score() {
    let snapshot = sample_snapshot();
    let variants = SynonymTable::korean_default().expand("검사 기한");
    assert!(variants.len() > 1);

    let aggregated = aggregate(&snapshot.qa, &variants, DuplicatePolicy::Distinct, |item, v| {
        score(item, v, QA_WEIGHTS)
    });

    for (id, item) in snapshot.qa.iter() {
        let best = variants
            .iter()
            .map(|v| score(item, v, QA_WEIGHTS))
            .max()
            .unwrap_or(0);
        assert_eq!(aggregated.get(&id).copied().unwrap_or(0), best, "item {}", id);
    }
}

#[test]
fn test_repeated_variants_do_not_inflate() {
    let snapshot = sample_snapshot();
    let once = vec!["검사".to_string()];
    let thrice = vec!["검사".to_string(), "검사".to_string(), "검사".to_string()];

    let score_fn = |item: &QaItem, v: &str| score(item, v, QA_WEIGHTS);
    assert_eq!(
        aggregate(&snapshot.qa, &once, DuplicatePolicy::Distinct, score_fn),
        aggregate(&snapshot.qa, &thrice, DuplicatePolicy::Distinct, score_fn)
    );
}

#[test]
fn test_rank_output_is_sorted_and_positive() {
    let snapshot = sample_snapshot();
    let table = SynonymTable::korean_default();

    for query in ["검사", "신청 방법", "담당자 연락처", "주차", "마감", "없는 내용"] {
        let ranked = rank_lexical(&snapshot.qa, query, &table, QA_WEIGHTS, DuplicatePolicy::Distinct);
        assert!(ranked.iter().all(|r| r.score > 0.0), "query {}", query);
        assert!(
            ranked.windows(2).all(|w| w[0].score >= w[1].score),
            "query {}",
            query
        );
    }
}

#[test]
fn test_synonym_reaches_entry_without_shared_words() {
    let snapshot = sample_snapshot();
    // "접수" maps back to 신청
    let ranked = rank_lexical(
        &snapshot.qa,
        "접수",
        &SynonymTable::korean_default(),
        QA_WEIGHTS,
        DuplicatePolicy::Distinct,
    );
    assert_eq!(ranked.first().map(|r| r.id), Some(ItemId::new(2)));
}

#[test]
fn test_duplicate_rows_per_policy() {
    let row = QaItem::new("주차 안내", "지하 2층").with_tags(["주차"]);
    let corpus = Corpus::new(vec![row.clone(), QaItem::new("신청", "온라인"), row]);
    let table = SynonymTable::korean_default();

    let distinct = rank_lexical(&corpus, "주차", &table, QA_WEIGHTS, DuplicatePolicy::Distinct);
    let ids: Vec<usize> = distinct.iter().map(|r| r.id.index()).collect();
    assert_eq!(ids, vec![0, 2]);

    let merged = rank_lexical(&corpus, "주차", &table, QA_WEIGHTS, DuplicatePolicy::MergeIdentical);
    let ids: Vec<usize> = merged.iter().map(|r| r.id.index()).collect();
    assert_eq!(ids, vec![0]);
}

#[test]
fn test_ties_keep_corpus_order() {
    let corpus = Corpus::new(vec![
        QaItem::new("주차", ""),
        QaItem::new("신청", ""),
        QaItem::new("주차", "").with_policy("P-2"),
    ]);
    let aggregated = aggregate(
        &corpus,
        &["주차".to_string()],
        DuplicatePolicy::Distinct,
        |item, v| score(item, v, QA_WEIGHTS),
    );

    let ids: Vec<usize> = rank(&aggregated).iter().map(|r| r.id.index()).collect();
    assert_eq!(ids, vec![0, 2]);
}

#[test]
fn test_scoring_is_idempotent() {
    let snapshot = sample_snapshot();
    for (_, item) in snapshot.qa.iter() {
        assert_eq!(
            score(item, "검사 준비", QA_WEIGHTS),
            score(item, "검사 준비", QA_WEIGHTS)
        );
    }
}
