//! Error types for the FAQ lookup service.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Scoring and ranking never fail; these errors cover the I/O edges around them.

use thiserror::Error;

/// Errors that can occur while loading the corpus snapshot.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Server answered with a non-success status
    #[error("corpus load failed (status {status}): {message}")]
    Status { status: u16, message: String },

    /// Failed to parse the corpus document
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read a local corpus file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised by the embedding backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmbeddingError {
    /// Backend could not be initialized
    #[error("Embedding backend initialization failed: {0}")]
    InitFailed(String),

    /// Inference call failed or produced an unusable vector
    #[error("Embedding generation failed: {0}")]
    EmbeddingFailed(String),

    /// Vector width differs from what the strategy expects
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

/// Errors from the key/value store backing the embedding cache.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Underlying storage I/O failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored value could not be encoded or decoded
    #[error("Store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors surfaced by a lookup session.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Query rejected before scoring
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// Embedding strategy failed
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),
}

/// Convenience type alias for Results with CorpusError
pub type CorpusResult<T> = Result<T, CorpusError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with EmbeddingError
pub type EmbeddingResult<T> = Result<T, EmbeddingError>;

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;
