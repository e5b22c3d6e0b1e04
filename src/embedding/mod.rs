//! Embedding backend abstraction.
//!
//! The backend is an opaque `text -> vector` function behind [`Embedder`].
//! [`LazyEmbedder`] creates it on first use through an [`EmbedderLoader`]
//! and shares one in-flight load between concurrent callers.

pub mod hashing;
pub mod vector;

pub use hashing::{HashingEmbedder, HashingEmbedderLoader};
pub use vector::{dot, l2_normalize};

use crate::error::EmbeddingResult;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::OnceCell;

/// A text embedding backend.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed one text.
    async fn embed(&self, text: &str) -> EmbeddingResult<Vec<f32>>;

    /// Width of the vectors this backend produces.
    fn dimensions(&self) -> usize;
}

/// Creates an embedding backend (downloads weights, opens sessions, ...).
#[async_trait]
pub trait EmbedderLoader: Send + Sync {
    /// Build a ready-to-use backend.
    async fn load(&self) -> EmbeddingResult<Arc<dyn Embedder>>;
}

/// Lifecycle of a lazily created backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendState {
    /// No load attempted yet, or the last attempt failed
    Uninitialized,
    /// A load is in flight
    Loading,
    /// Backend available; terminal
    Ready,
}

/// Memoized, single-flight backend handle.
pub struct LazyEmbedder {
    loader: Arc<dyn EmbedderLoader>,
    cell: OnceCell<Arc<dyn Embedder>>,
    loading: AtomicBool,
}

impl LazyEmbedder {
    /// Wrap a loader; nothing is loaded until [`LazyEmbedder::get`].
    pub fn new(loader: Arc<dyn EmbedderLoader>) -> Self {
        Self {
            loader,
            cell: OnceCell::new(),
            loading: AtomicBool::new(false),
        }
    }

    /// Wrap an already constructed backend; starts in [`BackendState::Ready`].
    pub fn ready(embedder: Arc<dyn Embedder>) -> Self {
        struct Preloaded(Arc<dyn Embedder>);

        #[async_trait]
        impl EmbedderLoader for Preloaded {
            async fn load(&self) -> EmbeddingResult<Arc<dyn Embedder>> {
                Ok(Arc::clone(&self.0))
            }
        }

        Self {
            loader: Arc::new(Preloaded(Arc::clone(&embedder))),
            cell: OnceCell::new_with(Some(embedder)),
            loading: AtomicBool::new(false),
        }
    }

    /// Get the backend, loading it on first call.
    ///
    /// Concurrent first callers await the same load. A failed load leaves
    /// the handle uninitialized; the next waiter or caller tries again.
    pub async fn get(&self) -> EmbeddingResult<Arc<dyn Embedder>> {
        let embedder = self
            .cell
            .get_or_try_init(|| async {
                self.loading.store(true, Ordering::SeqCst);
                tracing::info!("Loading embedding backend");
                let result = self.loader.load().await;
                self.loading.store(false, Ordering::SeqCst);
                match &result {
                    Ok(embedder) => {
                        tracing::info!("Embedding backend ready ({} dimensions)", embedder.dimensions())
                    }
                    Err(e) => tracing::error!("Embedding backend failed to load: {}", e),
                }
                result
            })
            .await?;

        Ok(Arc::clone(embedder))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> BackendState {
        if self.cell.initialized() {
            BackendState::Ready
        } else if self.loading.load(Ordering::SeqCst) {
            BackendState::Loading
        } else {
            BackendState::Uninitialized
        }
    }
}
