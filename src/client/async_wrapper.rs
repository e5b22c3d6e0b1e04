//! Async wrapper around the synchronous CorpusClient.
//!
//! Runs the blocking HTTP call on tokio's blocking thread pool so it never
//! stalls the async runtime.

use crate::client::CorpusClient;
use crate::error::{CorpusError, CorpusResult};
use crate::models::CorpusSnapshot;
use std::sync::Arc;

/// Async facade over [`CorpusClient`].
#[derive(Clone)]
pub struct AsyncCorpusClient {
    client: Arc<CorpusClient>,
}

impl AsyncCorpusClient {
    pub fn new(client: CorpusClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Snapshot location.
    pub fn url(&self) -> &str {
        self.client.url()
    }

    /// Fetch and parse the snapshot without blocking the runtime.
    pub async fn fetch_snapshot(&self) -> CorpusResult<CorpusSnapshot> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.fetch_snapshot())
            .await
            .map_err(|e| CorpusError::Http(format!("Task join error: {}", e)))?
    }
}
