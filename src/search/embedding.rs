//! Vector-similarity ranking.
//!
//! Corpus vectors are computed once per corpus fingerprint, persisted in a
//! [`KeyValueStore`] under `qa_embeds_<fingerprint>`, and reused while the
//! fingerprint and length still match. The fingerprint only looks at the
//! corpus length and its first and last entries, so edits confined to the
//! middle of the corpus keep serving the old vectors.
//!
//! Store calls run on the blocking pool. Writing a new list removes the one
//! it supersedes.

use super::strategy::{RankingStrategy, StrategyKind};
use crate::cache::KeyValueStore;
use crate::embedding::{dot, l2_normalize, BackendState, Embedder, LazyEmbedder};
use crate::error::{EmbeddingError, EmbeddingResult, LookupResult, StoreResult};
use crate::matching::{sort_ranked, Ranked};
use crate::domain::ItemId;
use crate::metrics::Metrics;
use crate::models::{Corpus, QaItem};
use async_trait::async_trait;
use std::hash::Hasher;
use std::sync::Arc;
use tokio::sync::Mutex;
use twox_hash::XxHash64;

/// Minimum cosine similarity for a result to count as a match.
pub const DEFAULT_EMBEDDING_THRESHOLD: f32 = 0.35;

/// Prefix of persisted vector-list keys.
pub const CACHE_KEY_PREFIX: &str = "qa_embeds_";

/// Store entry holding the key of the most recently written vector list.
pub const LATEST_KEY: &str = "qa_embeds_latest";

/// Cheap corpus signature: length plus hashes of the first and last entries.
pub fn fingerprint(corpus: &Corpus<QaItem>) -> String {
    match (corpus.first(), corpus.last()) {
        (Some(first), Some(last)) => format!(
            "{}-{:016x}-{:016x}",
            corpus.len(),
            item_hash(first),
            item_hash(last)
        ),
        _ => "0".to_string(),
    }
}

/// Store key for a fingerprint.
pub fn cache_key(fingerprint: &str) -> String {
    format!("{}{}", CACHE_KEY_PREFIX, fingerprint)
}

fn item_hash(item: &QaItem) -> u64 {
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(item.question.as_bytes());
    hasher.write_u8(0);
    hasher.write(item.tags.join(" ").as_bytes());
    hasher.write_u8(0);
    hasher.write(item.answer.as_bytes());
    hasher.finish()
}

/// Rank unit vectors against a unit query vector.
///
/// Keeps everything at or above `threshold`. When nothing qualifies the single
/// most similar item is returned anyway, so the result is empty only for an
/// empty `vectors`.
pub fn rank_by_similarity(query: &[f32], vectors: &[Vec<f32>], threshold: f32) -> Vec<Ranked> {
    let mut scored: Vec<Ranked> = vectors
        .iter()
        .enumerate()
        .map(|(index, vector)| Ranked::new(ItemId::new(index), f64::from(dot(query, vector))))
        .collect();
    sort_ranked(&mut scored);

    let passing = scored
        .iter()
        .take_while(|r| r.score >= f64::from(threshold))
        .count();
    scored.truncate(passing.max(1));
    scored
}

struct CorpusVectors {
    fingerprint: String,
    vectors: Arc<Vec<Vec<f32>>>,
}

/// Embedding-backed strategy.
pub struct EmbeddingStrategy {
    embedder: LazyEmbedder,
    store: Arc<dyn KeyValueStore>,
    threshold: f32,
    metrics: Metrics,
    corpus_vectors: Mutex<Option<CorpusVectors>>,
}

impl EmbeddingStrategy {
    pub fn new(
        embedder: LazyEmbedder,
        store: Arc<dyn KeyValueStore>,
        threshold: f32,
        metrics: Metrics,
    ) -> Self {
        Self {
            embedder,
            store,
            threshold,
            metrics,
            corpus_vectors: Mutex::new(None),
        }
    }

    /// Similarity threshold in use.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Vectors for `corpus`, from memory, the store, or a fresh embedding pass.
    ///
    /// Concurrent callers wait on the same computation. Store failures are
    /// logged and otherwise ignored.
    pub async fn ensure_corpus_vectors(
        &self,
        corpus: &Corpus<QaItem>,
    ) -> EmbeddingResult<Arc<Vec<Vec<f32>>>> {
        let fingerprint = fingerprint(corpus);
        let mut slot = self.corpus_vectors.lock().await;

        if let Some(current) = slot.as_ref() {
            if current.fingerprint == fingerprint && current.vectors.len() == corpus.len() {
                return Ok(Arc::clone(&current.vectors));
            }
        }

        let embedder = self.embedder.get().await?;
        let key = cache_key(&fingerprint);

        let vectors = match self.read_cached(&key, corpus.len(), embedder.dimensions()).await {
            Some(vectors) => {
                tracing::info!("Loaded {} corpus vectors from cache ({})", vectors.len(), key);
                self.metrics.record_cache_hit();
                vectors
            }
            None => {
                self.metrics.record_cache_miss();
                let vectors = embed_corpus(embedder.as_ref(), corpus).await?;
                self.metrics.record_items_embedded(vectors.len());
                tracing::info!("Embedded {} corpus items ({})", vectors.len(), key);
                self.write_cached(&key, &vectors).await;
                vectors
            }
        };

        let vectors = Arc::new(vectors);
        *slot = Some(CorpusVectors {
            fingerprint,
            vectors: Arc::clone(&vectors),
        });
        Ok(vectors)
    }

    /// Embed `query` once and rank the corpus by cosine similarity.
    pub async fn rank_by_embedding(
        &self,
        query: &str,
        corpus: &Corpus<QaItem>,
    ) -> EmbeddingResult<Vec<Ranked>> {
        if corpus.is_empty() {
            return Ok(Vec::new());
        }

        let vectors = self.ensure_corpus_vectors(corpus).await?;
        let embedder = self.embedder.get().await?;
        let query_vector = embed_normalized(embedder.as_ref(), query).await?;

        Ok(rank_by_similarity(&query_vector, &vectors, self.threshold))
    }

    async fn read_cached(
        &self,
        key: &str,
        expected_len: usize,
        dimensions: usize,
    ) -> Option<Vec<Vec<f32>>> {
        let store = Arc::clone(&self.store);
        let lookup = key.to_string();

        let raw = match tokio::task::spawn_blocking(move || store.get(&lookup)).await {
            Ok(Ok(Some(raw))) => raw,
            Ok(Ok(None)) => return None,
            Ok(Err(e)) => {
                tracing::warn!("Embedding cache read failed for {}: {}", key, e);
                return None;
            }
            Err(e) => {
                tracing::warn!("Embedding cache read task failed for {}: {}", key, e);
                return None;
            }
        };

        let vectors: Vec<Vec<f32>> = match serde_json::from_str(&raw) {
            Ok(vectors) => vectors,
            Err(e) => {
                tracing::warn!("Discarding unreadable embedding cache {}: {}", key, e);
                return None;
            }
        };

        if vectors.len() != expected_len || vectors.iter().any(|v| v.len() != dimensions) {
            tracing::debug!(
                "Discarding stale embedding cache {} ({} vectors, corpus has {})",
                key,
                vectors.len(),
                expected_len
            );
            return None;
        }

        Some(vectors)
    }

    async fn write_cached(&self, key: &str, vectors: &[Vec<f32>]) {
        let json = match serde_json::to_string(vectors) {
            Ok(json) => json,
            Err(e) => {
                tracing::warn!("Embedding cache encode failed for {}: {}", key, e);
                return;
            }
        };

        let store = Arc::clone(&self.store);
        let target = key.to_string();

        match tokio::task::spawn_blocking(move || persist(store.as_ref(), &target, &json)).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Embedding cache write failed for {}: {}", key, e),
            Err(e) => tracing::warn!("Embedding cache write task failed for {}: {}", key, e),
        }
    }
}

/// Write a vector list, then drop the list it supersedes.
///
/// [`LATEST_KEY`] names the most recently written list so superseded ones
/// are removed across restarts too.
fn persist(store: &dyn KeyValueStore, key: &str, json: &str) -> StoreResult<()> {
    store.put(key, json)?;

    let previous: Option<String> = match store.get(LATEST_KEY)? {
        Some(raw) => serde_json::from_str(&raw).ok(),
        None => None,
    };
    if let Some(previous) = previous {
        if previous != key && previous != LATEST_KEY && previous.starts_with(CACHE_KEY_PREFIX) {
            store.remove(&previous)?;
            tracing::debug!("Removed superseded embedding cache {}", previous);
        }
    }

    store.put(LATEST_KEY, &serde_json::to_string(key)?)
}

async fn embed_normalized(embedder: &dyn Embedder, text: &str) -> EmbeddingResult<Vec<f32>> {
    let mut vector = embedder.embed(text).await?;
    if vector.len() != embedder.dimensions() {
        return Err(EmbeddingError::DimensionMismatch {
            expected: embedder.dimensions(),
            got: vector.len(),
        });
    }
    if vector.iter().any(|component| !component.is_finite()) {
        return Err(EmbeddingError::EmbeddingFailed(format!(
            "non-finite component in embedding of {} characters",
            text.chars().count()
        )));
    }
    l2_normalize(&mut vector);
    Ok(vector)
}

async fn embed_corpus(
    embedder: &dyn Embedder,
    corpus: &Corpus<QaItem>,
) -> EmbeddingResult<Vec<Vec<f32>>> {
    let mut vectors = Vec::with_capacity(corpus.len());
    for item in corpus.items() {
        vectors.push(embed_normalized(embedder, &item.embedding_text()).await?);
    }
    Ok(vectors)
}

#[async_trait]
impl RankingStrategy for EmbeddingStrategy {
    fn name(&self) -> &'static str {
        StrategyKind::Embedding.as_str()
    }

    async fn rank(&self, query: &str, corpus: &Corpus<QaItem>) -> LookupResult<Vec<Ranked>> {
        Ok(self.rank_by_embedding(query, corpus).await?)
    }

    fn backend_state(&self) -> Option<BackendState> {
        Some(self.embedder.state())
    }
}
