//! FAQ Lookup - an offline FAQ and contact-directory lookup served over MCP.
//!
//! A fixed corpus of question/answer entries and a parallel contact directory
//! are loaded once; every query is ranked against them by an interchangeable
//! strategy (keyword scoring with synonym expansion, fuzzy matching, or
//! embedding similarity).
//!
//! # Architecture
//!
//! - **models**: FAQ entries, contacts, corpora and the snapshot document
//! - **domain**: Value objects (item ids, phone numbers)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **matching**: Tokenizer, synonym expansion, field scoring, aggregation, ranking
//! - **embedding**: Embedding backend trait, lazy single-flight loader, hashing embedder
//! - **cache**: Key/value stores for the embedding cache
//! - **search**: Ranking strategies
//! - **client** / **repositories**: Corpus snapshot loading
//! - **services**: Lookup session (best answer, related questions, contact gating)
//! - **server**: MCP protocol server

pub mod cache;
pub mod client;
pub mod config;
pub mod domain;
pub mod embedding;
pub mod error;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod search;
pub mod server;
pub mod services;

// Re-export commonly used types
pub use cache::{FileStore, KeyValueStore, MemoryStore};
pub use client::CorpusClient;
pub use config::{Config, DataSource};
pub use embedding::{BackendState, Embedder, EmbedderLoader, HashingEmbedder, LazyEmbedder};
pub use error::{ConfigError, CorpusError, EmbeddingError, LookupError, StoreError};
pub use matching::{DuplicatePolicy, Ranked, SynonymTable};
pub use metrics::{Metrics, MetricsSummary, QueryTimer};
pub use models::{ContactItem, Corpus, CorpusSnapshot, QaItem};
pub use search::{EmbeddingStrategy, FuzzyStrategy, LexicalStrategy, RankingStrategy, StrategyKind};
pub use server::FaqMcpServer;
pub use services::{LookupLimits, LookupOutcome, LookupService, LookupSession};
