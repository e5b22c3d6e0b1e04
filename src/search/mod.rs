//! Interchangeable ranking strategies for the FAQ corpus.
//!
//! Every strategy turns `(query, corpus)` into a ranked list of item ids; the
//! lookup session does not care which one produced it.

pub mod embedding;
pub mod strategy;

pub use embedding::{
    cache_key, fingerprint, rank_by_similarity, EmbeddingStrategy, CACHE_KEY_PREFIX,
    DEFAULT_EMBEDDING_THRESHOLD, LATEST_KEY,
};
pub use strategy::{FuzzyStrategy, LexicalStrategy, RankingStrategy, StrategyKind};

use crate::cache::{FileStore, KeyValueStore, MemoryStore};
use crate::config::Config;
use crate::embedding::{HashingEmbedderLoader, LazyEmbedder};
use crate::metrics::Metrics;
use std::sync::Arc;

/// Build the configured FAQ ranking strategy.
///
/// The embedding strategy persists vectors under `cache_dir` when one is set
/// and keeps them in memory otherwise.
pub fn from_config(config: &Config, metrics: &Metrics) -> Arc<dyn RankingStrategy> {
    match config.strategy {
        StrategyKind::Lexical => Arc::new(LexicalStrategy::new(
            crate::matching::SynonymTable::korean_default(),
            config.duplicate_policy,
        )),
        StrategyKind::Fuzzy => Arc::new(FuzzyStrategy::new(config.fuzzy_threshold)),
        StrategyKind::Embedding => {
            let store: Arc<dyn KeyValueStore> = match &config.cache_dir {
                Some(dir) => Arc::new(FileStore::new(dir.clone())),
                None => Arc::new(MemoryStore::new()),
            };
            let loader = Arc::new(HashingEmbedderLoader::new(config.embedding_dimensions));

            Arc::new(EmbeddingStrategy::new(
                LazyEmbedder::new(loader),
                store,
                config.embedding_threshold,
                metrics.clone(),
            ))
        }
    }
}
