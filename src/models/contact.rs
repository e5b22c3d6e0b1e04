//! Contact-directory entry.

use super::field::{lenient_opt_string, lenient_string, lenient_tags, FieldValue, Searchable};
use crate::domain::PhoneNumber;
use serde::{Deserialize, Serialize};

/// One row of the contact directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactItem {
    /// Department name
    #[serde(deserialize_with = "lenient_string")]
    pub dept: String,

    /// Person in charge
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,

    /// Phone number as written in the directory
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,

    /// Responsibilities and keywords
    #[serde(deserialize_with = "lenient_tags", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Free-form remark (office hours, extension, ...)
    #[serde(deserialize_with = "lenient_opt_string", skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ContactItem {
    /// Create a contact with department and phone.
    pub fn new(dept: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            dept: dept.into(),
            phone: phone.into(),
            ..Default::default()
        }
    }

    /// Builder-style person assignment.
    pub fn with_person(mut self, person: impl Into<String>) -> Self {
        self.person = Some(person.into());
        self
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

    /// Builder-style note assignment.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// First number in the phone field, annotations dropped.
    pub fn phone_number(&self) -> Option<PhoneNumber> {
        PhoneNumber::primary(&self.phone)
    }
}

impl Searchable for ContactItem {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "dept" => Some(FieldValue::Text(&self.dept)),
            "person" => self.person.as_deref().map(FieldValue::Text),
            "phone" => Some(FieldValue::Text(&self.phone)),
            "tags" => Some(FieldValue::TagList(&self.tags)),
            "note" => self.note.as_deref().map(FieldValue::Text),
            _ => None,
        }
    }
}
