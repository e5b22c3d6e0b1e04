//! Data models for the FAQ and contact-directory corpora.
//!
//! Items resolve their fields through [`Searchable`], which hands out a tagged
//! [`FieldValue`] so scorers never inspect raw JSON.

pub mod contact;
pub mod corpus;
pub mod field;
pub mod qa;

pub use contact::ContactItem;
pub use corpus::{Corpus, CorpusSnapshot};
pub use field::{FieldValue, Searchable};
pub use qa::QaItem;
