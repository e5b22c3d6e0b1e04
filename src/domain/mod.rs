//! Domain value objects and types.
//!
//! Type-safe wrappers for the identifiers and contact data the lookup
//! pipeline passes around. Value objects validate at construction time.

pub mod errors;
pub mod item_id;
pub mod phone;

pub use errors::ValidationError;
pub use item_id::ItemId;
pub use phone::PhoneNumber;
