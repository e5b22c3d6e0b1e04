//! Response shapes produced by the lookup session.

use crate::domain::ItemId;
use crate::embedding::BackendState;
use crate::metrics::MetricsSummary;
use crate::models::{ContactItem, QaItem};
use serde::Serialize;

/// Shown when no entry matches.
pub const NOT_FOUND_MESSAGE: &str = "해당 내용을 찾지 못했어요. 다른 표현으로 질문해 보세요.";

/// Suggested queries accompanying [`NOT_FOUND_MESSAGE`].
pub const EXAMPLE_QUERIES: [&str; 3] = ["검사 준비사항", "검사기한", "담당자 연락처"];

/// Where an answer comes from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Provenance {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Provenance {
    fn of(item: &QaItem) -> Option<Self> {
        item.has_provenance().then(|| Self {
            policy_id: item.policy_id.clone(),
            version: item.version.clone(),
            source_url: item.source_url.clone(),
        })
    }
}

/// The top-ranked FAQ entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestMatch {
    pub id: ItemId,
    pub score: f64,
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl BestMatch {
    pub fn new(id: ItemId, score: f64, item: &QaItem) -> Self {
        Self {
            id,
            score,
            question: item.question.clone(),
            answer: item.answer.clone(),
            tags: item.tags.clone(),
            provenance: Provenance::of(item),
        }
    }
}

/// A runner-up entry offered as a follow-up question.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedSuggestion {
    pub id: ItemId,
    pub score: f64,
    pub question: String,
    /// Query to submit to search for this entry
    pub follow_up_query: String,
}

impl RelatedSuggestion {
    pub fn new(id: ItemId, score: f64, item: &QaItem) -> Self {
        Self {
            id,
            score,
            question: item.question.clone(),
            follow_up_query: item.question.clone(),
        }
    }
}

/// A contact-panel row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactCard {
    pub id: ItemId,
    pub score: f64,
    pub dept: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    pub phone: String,
    /// `tel:` target; absent only when the phone field holds no digits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dial: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ContactCard {
    pub fn new(id: ItemId, score: f64, item: &ContactItem) -> Self {
        Self {
            id,
            score,
            dept: item.dept.clone(),
            person: item.person.clone(),
            phone: item.phone.clone(),
            dial: item.phone_number().map(|phone| phone.dial()),
            tags: item.tags.clone(),
            note: item.note.clone(),
        }
    }
}

/// Result of a `lookup`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupOutcome {
    pub query: String,
    pub strategy: &'static str,
    pub best: Option<BestMatch>,
    pub related: Vec<RelatedSuggestion>,
    pub contacts: Vec<ContactCard>,
    /// The query carried a contact hint
    pub contacts_requested: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub example_queries: Vec<String>,
}

impl LookupOutcome {
    /// Terminal "nothing matched" state.
    pub fn not_found(query: &str, strategy: &'static str, contacts_requested: bool) -> Self {
        Self {
            query: query.to_string(),
            strategy,
            best: None,
            related: Vec::new(),
            contacts: Vec::new(),
            contacts_requested,
            message: Some(NOT_FOUND_MESSAGE.to_string()),
            example_queries: EXAMPLE_QUERIES.iter().map(|q| q.to_string()).collect(),
        }
    }

    /// Whether an answer was found.
    pub fn is_found(&self) -> bool {
        self.best.is_some()
    }
}

/// Result of a direct contact search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactsOutcome {
    pub query: String,
    pub contacts: Vec<ContactCard>,
    /// Matches before the cap was applied
    pub total_matches: usize,
}

/// Corpus and session status.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusInfo {
    pub qa_count: usize,
    pub contact_count: usize,
    pub fingerprint: String,
    pub strategy: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backend_state: Option<BackendState>,
    pub metrics: MetricsSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_outcome() {
        let outcome = LookupOutcome::not_found("없는 질문", "lexical", false);
        assert!(!outcome.is_found());
        assert_eq!(outcome.message.as_deref(), Some(NOT_FOUND_MESSAGE));
        assert_eq!(
            outcome.example_queries,
            vec!["검사 준비사항", "검사기한", "담당자 연락처"]
        );

        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json["best"].is_null());
    }

    #[test]
    fn test_best_match_provenance() {
        let plain = QaItem::new("주차 안내", "지하 2층");
        assert_eq!(BestMatch::new(ItemId::new(0), 1.0, &plain).provenance, None);

        let mut sourced = QaItem::new("검사 기한", "매월 말일").with_policy("POL-7");
        sourced.version = Some("2024-01".to_string());
        let best = BestMatch::new(ItemId::new(1), 2.0, &sourced);

        let json = serde_json::to_value(&best).unwrap();
        assert_eq!(json["provenance"]["policy_id"], "POL-7");
        assert_eq!(json["provenance"]["version"], "2024-01");
        assert!(json["provenance"].get("source_url").is_none());
    }

    #[test]
    fn test_contact_card_dial() {
        let contact = ContactItem::new("검사지원팀", "051-440-1005");
        let card = ContactCard::new(ItemId::new(0), 9.0, &contact);
        assert_eq!(card.dial.as_deref(), Some("0514401005"));

        let unlisted = ContactItem::new("안내데스크", "내선 없음");
        assert_eq!(ContactCard::new(ItemId::new(1), 1.0, &unlisted).dial, None);
    }

    #[test]
    fn test_contact_card_dial_for_annotated_numbers() {
        for raw in ["051-440-1005(내선 3)", "051-440-1005~6", "051-440-1005 / 1006"] {
            let card = ContactCard::new(ItemId::new(0), 1.0, &ContactItem::new("검사지원팀", raw));
            assert_eq!(card.phone, raw);
            assert_eq!(card.dial.as_deref(), Some("0514401005"), "{}", raw);
        }
    }

    #[test]
    fn test_related_follow_up_query() {
        let item = QaItem::new("신청 방법", "온라인 접수");
        let related = RelatedSuggestion::new(ItemId::new(3), 4.0, &item);
        assert_eq!(related.follow_up_query, "신청 방법");
    }
}
