//! ItemId value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a corpus row.
///
/// Assigned once when the corpus is loaded (the row's position in the
/// snapshot) and used as the key wherever scores are aggregated, so two
/// rows with identical content remain two results.
///
/// # Example
///
/// ```
/// use faq_lookup::domain::ItemId;
///
/// let id = ItemId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(usize);

impl ItemId {
    /// Create an identifier for the row at `index`.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the row inside its corpus.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
