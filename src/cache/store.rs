//! String-keyed value stores.

use crate::error::StoreResult;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// A simple persistent string store.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key was never written.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write (or replace) a value.
    fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Delete a value; removing an absent key is not an error.
    fn remove(&self, key: &str) -> StoreResult<()>;
}

/// One JSON file per key inside a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// reader never observes a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory of the store.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_name))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        fs::create_dir_all(&self.dir)?;

        let target = self.path_for(key);
        let temp = target.with_extension("json.tmp");
        fs::write(&temp, value)?;
        fs::rename(&temp, &target)?;

        tracing::debug!("Stored {} bytes at {}", value.len(), target.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.values.read().map(|values| values.len()).unwrap_or(0)
    }

    /// Whether nothing has been stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self
            .values
            .read()
            .ok()
            .and_then(|values| values.get(key).cloned()))
    }

    fn put(&self, key: &str, value: &str) -> StoreResult<()> {
        if let Ok(mut values) = self.values.write() {
            values.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        if let Ok(mut values) = self.values.write() {
            values.remove(key);
        }
        Ok(())
    }
}
