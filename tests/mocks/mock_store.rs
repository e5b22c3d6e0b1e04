use faq_lookup::cache::KeyValueStore;
use faq_lookup::error::{StoreError, StoreResult};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Store whose reads and writes always fail (quota exceeded, read-only disk).
#[derive(Clone, Default)]
pub struct FailingStore {
    writes: Arc<AtomicUsize>,
}

impl FailingStore {
    pub fn write_attempts(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "read denied")))
    }

    fn put(&self, _key: &str, _value: &str) -> StoreResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Io(io::Error::new(io::ErrorKind::Other, "quota exceeded")))
    }

    fn remove(&self, _key: &str) -> StoreResult<()> {
        Err(StoreError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "remove denied")))
    }
}
