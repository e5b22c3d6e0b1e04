//! HTTP client for fetching the FAQ corpus snapshot.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. Every request asks intermediaries not to serve a
//! cached copy, so each load sees the latest published snapshot.

mod async_wrapper;
pub use async_wrapper::AsyncCorpusClient;

use crate::error::{CorpusError, CorpusResult};
use crate::models::CorpusSnapshot;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// HTTP client for a static corpus document.
#[derive(Clone)]
pub struct CorpusClient {
    /// Location of the snapshot document
    url: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl CorpusClient {
    /// Create a client for `url` with a request timeout in seconds.
    pub fn new(url: impl Into<String>, timeout_secs: u64) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(timeout_secs))
            .build();

        Self {
            url: url.into(),
            agent: Arc::new(agent),
        }
    }

    /// Snapshot location.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and parse the snapshot.
    pub fn fetch_snapshot(&self) -> CorpusResult<CorpusSnapshot> {
        let start = Instant::now();
        tracing::debug!("GET {}", self.url);

        let response = self
            .agent
            .get(&self.url)
            .set("Cache-Control", "no-cache")
            .set("Pragma", "no-cache")
            .set("Accept", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        let response = match response {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("GET {} - Error: {:?}", self.url, e);
                return Err(e);
            }
        };

        let body = response.into_string()?;
        let snapshot = CorpusSnapshot::from_json(&body)?;

        tracing::debug!(
            "GET {} - {} qa / {} contacts in {:?}",
            self.url,
            snapshot.qa.len(),
            snapshot.contacts.len(),
            start.elapsed()
        );

        Ok(snapshot)
    }

    /// Map ureq errors to CorpusError.
    fn map_error(&self, error: ureq::Error) -> CorpusError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                CorpusError::Status {
                    status: code,
                    message,
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    CorpusError::Http("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    CorpusError::Timeout
                } else {
                    CorpusError::Http(transport.to_string())
                }
            }
        }
    }
}
