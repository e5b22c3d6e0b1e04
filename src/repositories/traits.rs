use crate::error::CorpusResult;
use crate::models::CorpusSnapshot;
use async_trait::async_trait;

/// Source of the static corpus snapshot.
///
/// Provides abstraction over where the snapshot lives,
/// enabling different implementations (HTTP, local file, in-memory).
#[async_trait]
pub trait CorpusRepository: Send + Sync {
    /// Load the full snapshot. Called once at startup; failures are fatal.
    async fn load(&self) -> CorpusResult<CorpusSnapshot>;

    /// Human-readable location, for logs.
    fn describe(&self) -> String;
}
