//! Application service layer.
//!
//! Services contain business logic and orchestrate the ranking strategy,
//! the contact directory and the metrics collector. They provide a clean
//! boundary between the MCP handlers and the matching core.

mod contact_gate;
mod lookup_service;
mod outcome;

pub use contact_gate::{wants_contacts, CONTACT_HINTS};
pub use lookup_service::{LookupLimits, LookupService, LookupSession};
pub use outcome::{
    BestMatch, ContactCard, ContactsOutcome, CorpusInfo, LookupOutcome, Provenance,
    RelatedSuggestion, EXAMPLE_QUERIES, NOT_FOUND_MESSAGE,
};
