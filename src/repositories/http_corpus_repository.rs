use crate::client::AsyncCorpusClient;
use crate::error::CorpusResult;
use crate::models::CorpusSnapshot;
use crate::repositories::traits::CorpusRepository;
use async_trait::async_trait;

/// Corpus repository backed by an HTTP(S) URL.
///
/// Delegates to the AsyncCorpusClient, which bypasses caches on every load.
pub struct HttpCorpusRepository {
    client: AsyncCorpusClient,
}

impl HttpCorpusRepository {
    pub fn new(client: AsyncCorpusClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CorpusRepository for HttpCorpusRepository {
    async fn load(&self) -> CorpusResult<CorpusSnapshot> {
        self.client.fetch_snapshot().await
    }

    fn describe(&self) -> String {
        self.client.url().to_string()
    }
}
