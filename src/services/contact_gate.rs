//! Contact-panel gating.

use crate::matching::normalize;

/// Terms whose presence in a query asks for the contact panel.
pub const CONTACT_HINTS: [&str; 7] = ["연락", "전화", "번호", "담당", "상담", "contact", "phone"];

/// Whether `query` mentions any contact hint (substring match after normalization).
pub fn wants_contacts(query: &str) -> bool {
    let query = normalize(query);
    !query.is_empty()
        && CONTACT_HINTS
            .iter()
            .any(|hint| query.contains(normalize(hint).as_str()))
}
