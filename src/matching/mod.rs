//! Matching and ranking primitives.
//!
//! This module provides the lexical pipeline (tokenizer, synonym expansion,
//! weighted field scoring, best-score aggregation, ranking) and the fuzzy
//! matcher used by the nucleo-backed strategy.

pub mod aggregate;
pub mod field_scorer;
pub mod fuzzy_matcher;
pub mod ranking;
pub mod synonyms;
pub mod tokenizer;

pub use aggregate::{aggregate, DuplicatePolicy};
pub use field_scorer::{score, FieldWeights, CONTACT_WEIGHTS, QA_WEIGHTS};
pub use fuzzy_matcher::{FuzzyMatcher, DEFAULT_FUZZY_THRESHOLD, QA_FUZZY_FIELDS};
pub use ranking::{rank, rank_lexical, sort_ranked, Ranked};
pub use synonyms::SynonymTable;
pub use tokenizer::{normalize, tokenize};
