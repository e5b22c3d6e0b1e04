//! Corpus snapshot repositories.

mod file_corpus_repository;
mod http_corpus_repository;
mod traits;

pub use file_corpus_repository::FileCorpusRepository;
pub use http_corpus_repository::HttpCorpusRepository;
pub use traits::CorpusRepository;

use crate::client::{AsyncCorpusClient, CorpusClient};
use crate::config::DataSource;
use std::sync::Arc;

/// Build the repository for a configured data source.
pub fn for_source(source: &DataSource, timeout_secs: u64) -> Arc<dyn CorpusRepository> {
    match source {
        DataSource::Url(url) => Arc::new(HttpCorpusRepository::new(AsyncCorpusClient::new(
            CorpusClient::new(url.clone(), timeout_secs),
        ))),
        DataSource::Path(path) => Arc::new(FileCorpusRepository::new(path.clone())),
    }
}
