use crate::error::{CorpusError, CorpusResult};
use crate::models::CorpusSnapshot;
use crate::repositories::traits::CorpusRepository;
use async_trait::async_trait;
use std::path::PathBuf;

/// Corpus repository reading a local JSON file.
pub struct FileCorpusRepository {
    path: PathBuf,
}

impl FileCorpusRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CorpusRepository for FileCorpusRepository {
    async fn load(&self) -> CorpusResult<CorpusSnapshot> {
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || {
            let body = std::fs::read_to_string(&path)?;
            CorpusSnapshot::from_json(&body)
        })
        .await
        .map_err(|e| CorpusError::Http(format!("Task join error: {}", e)))?
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
