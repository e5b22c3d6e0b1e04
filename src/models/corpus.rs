//! Corpus containers and the snapshot document they are loaded from.
//!
//! The snapshot has the shape `{ "qa": [...], "contacts": [...] }`. Either
//! key may be missing or null. Rows that are not JSON objects are skipped
//! with a warning; every remaining row gets a stable [`ItemId`].

use crate::domain::ItemId;
use crate::error::CorpusResult;
use crate::models::{ContactItem, QaItem};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An immutable, ordered list of items addressed by [`ItemId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Corpus<T> {
    items: Vec<T>,
}

impl<T> Corpus<T> {
    /// Build a corpus; ids follow the order of `items`.
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the corpus holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by id.
    pub fn get(&self, id: ItemId) -> Option<&T> {
        self.items.get(id.index())
    }

    /// Iterate over `(id, item)` pairs in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &T)> + '_ {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId::new(index), item))
    }

    /// All items as a slice.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// First item, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// Last item, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T> Default for Corpus<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> FromIterator<T> for Corpus<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'de, T> Deserialize<'de> for Corpus<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows = match Value::deserialize(deserializer)? {
            Value::Array(rows) => rows,
            Value::Null => Vec::new(),
            other => {
                tracing::warn!("corpus section is not a list ({}), treating as empty", other);
                Vec::new()
            }
        };

        let mut items = Vec::with_capacity(rows.len());
        for (position, row) in rows.into_iter().enumerate() {
            if !row.is_object() {
                tracing::warn!("skipping corpus row {}: not an object", position);
                continue;
            }
            match serde_json::from_value(row) {
                Ok(item) => items.push(item),
                Err(e) => tracing::warn!("skipping corpus row {}: {}", position, e),
            }
        }

        Ok(Self::new(items))
    }
}

/// The full static dataset: FAQ entries plus the contact directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusSnapshot {
    /// Question/answer entries
    pub qa: Corpus<QaItem>,

    /// Contact-directory entries
    pub contacts: Corpus<ContactItem>,
}

impl CorpusSnapshot {
    /// Create a snapshot from already-built corpora.
    pub fn new(qa: Corpus<QaItem>, contacts: Corpus<ContactItem>) -> Self {
        Self { qa, contacts }
    }

    /// Parse a snapshot document.
    pub fn from_json(body: &str) -> CorpusResult<Self> {
        Ok(serde_json::from_str(body)?)
    }
}
