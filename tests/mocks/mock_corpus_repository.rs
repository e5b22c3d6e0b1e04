use async_trait::async_trait;
use faq_lookup::error::{CorpusError, CorpusResult};
use faq_lookup::models::CorpusSnapshot;
use faq_lookup::repositories::CorpusRepository;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory corpus repository that counts loads.
#[derive(Clone)]
pub struct MockCorpusRepository {
    snapshot: Option<CorpusSnapshot>,
    loads: Arc<AtomicUsize>,
}

impl MockCorpusRepository {
    pub fn new(snapshot: CorpusSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A repository whose every load fails with a 404.
    pub fn unavailable() -> Self {
        Self {
            snapshot: None,
            loads: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CorpusRepository for MockCorpusRepository {
    async fn load(&self) -> CorpusResult<CorpusSnapshot> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.snapshot.clone().ok_or(CorpusError::Status {
            status: 404,
            message: "data.json not found".to_string(),
        })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
