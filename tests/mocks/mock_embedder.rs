use async_trait::async_trait;
use faq_lookup::embedding::{Embedder, EmbedderLoader, HashingEmbedder};
use faq_lookup::error::{EmbeddingError, EmbeddingResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Hashing embedder that counts calls.
#[derive(Clone)]
pub struct CountingEmbedder {
    inner: HashingEmbedder,
    calls: Arc<AtomicUsize>,
}

impl CountingEmbedder {
    pub fn new(dimensions: usize) -> Self {
        Self {
            inner: HashingEmbedder::new(dimensions),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for CountingEmbedder {
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.inner.embed(text).await
    }

    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }
}

/// Loader that hands out a shared [`CountingEmbedder`] after a short delay.
#[derive(Clone)]
pub struct CountingLoader {
    embedder: CountingEmbedder,
    loads: Arc<AtomicUsize>,
    delay: Duration,
}

impl CountingLoader {
    pub fn new(embedder: CountingEmbedder) -> Self {
        Self {
            embedder,
            loads: Arc::new(AtomicUsize::new(0)),
            delay: Duration::from_millis(20),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbedderLoader for CountingLoader {
    async fn load(&self) -> EmbeddingResult<Arc<dyn Embedder>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        Ok(Arc::new(self.embedder.clone()))
    }
}

/// Loader that always fails, counting attempts.
#[derive(Clone, Default)]
pub struct FailingLoader {
    attempts: Arc<AtomicUsize>,
}

impl FailingLoader {
    pub fn attempt_count(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EmbedderLoader for FailingLoader {
    async fn load(&self) -> EmbeddingResult<Arc<dyn Embedder>> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(EmbeddingError::InitFailed("model weights unavailable".to_string()))
    }
}
