//! The ranking strategy abstraction and its lexical and fuzzy variants.

use crate::embedding::BackendState;
use crate::error::LookupResult;
use crate::matching::{
    rank_lexical, DuplicatePolicy, FuzzyMatcher, Ranked, SynonymTable, QA_FUZZY_FIELDS,
    QA_WEIGHTS,
};
use crate::models::{Corpus, QaItem};
use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;

/// A pluggable FAQ ranking engine.
///
/// Implementations return items best first, ties in corpus order. Lexical
/// and fuzzy rankings hold only matching items. The embedding ranking keeps
/// items at or above its similarity threshold and otherwise falls back to
/// the single most similar item, whatever its score (possibly zero or
/// negative), so it is empty only for an empty corpus.
#[async_trait]
pub trait RankingStrategy: Send + Sync {
    /// Short identifier reported to clients.
    fn name(&self) -> &'static str;

    /// Rank `corpus` against `query`.
    async fn rank(&self, query: &str, corpus: &Corpus<QaItem>) -> LookupResult<Vec<Ranked>>;

    /// State of the model backend, for strategies that have one.
    fn backend_state(&self) -> Option<BackendState> {
        None
    }
}

/// Strategy selector used by configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StrategyKind {
    #[default]
    Lexical,
    Fuzzy,
    Embedding,
}

impl StrategyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lexical => "lexical",
            Self::Fuzzy => "fuzzy",
            Self::Embedding => "embedding",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexical" => Ok(Self::Lexical),
            "fuzzy" => Ok(Self::Fuzzy),
            "embedding" => Ok(Self::Embedding),
            other => Err(format!(
                "unknown strategy '{}' (expected lexical, fuzzy or embedding)",
                other
            )),
        }
    }
}

/// Keyword scoring with synonym expansion.
#[derive(Debug, Clone)]
pub struct LexicalStrategy {
    synonyms: SynonymTable,
    policy: DuplicatePolicy,
}

impl LexicalStrategy {
    pub fn new(synonyms: SynonymTable, policy: DuplicatePolicy) -> Self {
        Self { synonyms, policy }
    }
}

impl Default for LexicalStrategy {
    fn default() -> Self {
        Self::new(SynonymTable::korean_default(), DuplicatePolicy::default())
    }
}

#[async_trait]
impl RankingStrategy for LexicalStrategy {
    fn name(&self) -> &'static str {
        StrategyKind::Lexical.as_str()
    }

    async fn rank(&self, query: &str, corpus: &Corpus<QaItem>) -> LookupResult<Vec<Ranked>> {
        Ok(rank_lexical(
            corpus,
            query,
            &self.synonyms,
            QA_WEIGHTS,
            self.policy,
        ))
    }
}

/// Fuzzy subsequence matching over the FAQ fields.
pub struct FuzzyStrategy {
    matcher: FuzzyMatcher,
}

impl FuzzyStrategy {
    pub fn new(threshold: f64) -> Self {
        Self {
            matcher: FuzzyMatcher::new(threshold),
        }
    }
}

#[async_trait]
impl RankingStrategy for FuzzyStrategy {
    fn name(&self) -> &'static str {
        StrategyKind::Fuzzy.as_str()
    }

    async fn rank(&self, query: &str, corpus: &Corpus<QaItem>) -> LookupResult<Vec<Ranked>> {
        Ok(self.matcher.rank(query, corpus, &QA_FUZZY_FIELDS))
    }
}
