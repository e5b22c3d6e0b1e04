//! Question/answer entry of the FAQ corpus.

use super::field::{lenient_opt_string, lenient_string, lenient_tags, FieldValue, Searchable};
use serde::{Deserialize, Serialize};

/// One FAQ entry.
///
/// Every field is optional in the source document; missing or malformed
/// values deserialize to empty so they contribute nothing to a score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct QaItem {
    /// Question text shown as the card title
    #[serde(deserialize_with = "lenient_string")]
    pub question: String,

    /// Answer body; may contain newlines
    #[serde(deserialize_with = "lenient_string")]
    pub answer: String,

    /// Free-form tags
    #[serde(deserialize_with = "lenient_tags", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Identifier of the governing policy document
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,

    /// Link to the original policy text
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    /// Revision label of the policy
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl QaItem {
    /// Create an entry with a question and answer.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            ..Default::default()
        }
    }

    /// Builder-style tag assignment.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style policy assignment.
    pub fn with_policy(mut self, policy_id: impl Into<String>) -> Self {
        self.policy_id = Some(policy_id.into());
        self
    }

    /// Text fed to the embedding backend: question, tags and answer joined by `" \n "`.
    pub fn embedding_text(&self) -> String {
        [self.question.as_str(), &self.tags.join(" "), self.answer.as_str()].join(" \n ")
    }

    /// Whether the entry carries any provenance (policy, revision or source link).
    pub fn has_provenance(&self) -> bool {
        self.policy_id.is_some() || self.version.is_some() || self.source_url.is_some()
    }
}

impl Searchable for QaItem {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "question" => Some(FieldValue::Text(&self.question)),
            "answer" => Some(FieldValue::Text(&self.answer)),
            "tags" => Some(FieldValue::TagList(&self.tags)),
            "policy_id" => self.policy_id.as_deref().map(FieldValue::Text),
            "source_url" => self.source_url.as_deref().map(FieldValue::Text),
            "version" => self.version.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}
