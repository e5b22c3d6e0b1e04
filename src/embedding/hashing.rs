//! Deterministic offline embedder.
//!
//! Tokens and the character bigrams inside each token are hashed into a
//! fixed number of buckets; the per-feature one-hot vectors are mean-pooled
//! and L2-normalized. Bigrams let `기한` land near `제출기한` even though the
//! tokenizer keeps Hangul runs whole.

use super::vector::l2_normalize;
use super::{Embedder, EmbedderLoader};
use crate::error::{EmbeddingError, EmbeddingResult};
use crate::matching::tokenize;
use async_trait::async_trait;
use std::hash::Hasher;
use std::sync::Arc;
use twox_hash::XxHash64;

/// Feature-hashing embedder.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl HashingEmbedder {
    /// Create an embedder producing `dimensions`-wide vectors (at least 1).
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    /// Synchronous embedding; the async trait method delegates here.
    pub fn embed_sync(&self, text: &str) -> Vec<f32> {
        let mut pooled = vec![0f32; self.dimensions];
        let mut features = 0usize;

        for token in tokenize(text) {
            self.add_feature(&mut pooled, token.as_bytes());
            features += 1;

            let chars: Vec<char> = token.chars().collect();
            if chars.len() > 2 {
                for pair in chars.windows(2) {
                    let bigram: String = pair.iter().collect();
                    self.add_feature(&mut pooled, bigram.as_bytes());
                    features += 1;
                }
            }
        }

        if features > 0 {
            let count = features as f32;
            pooled.iter_mut().for_each(|x| *x /= count);
        }
        l2_normalize(&mut pooled);
        pooled
    }

    fn add_feature(&self, pooled: &mut [f32], bytes: &[u8]) {
        let mut hasher = XxHash64::with_seed(0);
        hasher.write(bytes);
        let bucket = (hasher.finish() % self.dimensions as u64) as usize;
        pooled[bucket] += 1.0;
    }
}

#[async_trait]
impl Embedder for HashingEmbedder {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        Ok(self.embed_sync(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

/// Loader for [`HashingEmbedder`].
#[derive(Debug, Clone)]
pub struct HashingEmbedderLoader {
    dimensions: usize,
}

impl HashingEmbedderLoader {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

#[async_trait]
impl EmbedderLoader for HashingEmbedderLoader {
    async fn load(&self) -> EmbeddingResult<Arc<dyn Embedder>> {
        if self.dimensions == 0 {
            return Err(EmbeddingError::InitFailed(
                "embedding dimensions must be positive".to_string(),
            ));
        }
        Ok(Arc::new(HashingEmbedder::new(self.dimensions)))
    }
}
