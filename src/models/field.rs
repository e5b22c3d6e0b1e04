//! Tagged field values and lenient deserializers shared by the item models.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::borrow::Cow;

/// The value of one named item field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A single text value
    Text(&'a str),

    /// An ordered list of tags
    TagList(&'a [String]),
}

impl<'a> FieldValue<'a> {
    /// Flatten the value into one string; tag lists are joined with a space.
    pub fn joined(&self) -> Cow<'a, str> {
        match self {
            Self::Text(text) => Cow::Borrowed(text),
            Self::TagList(tags) => Cow::Owned(tags.join(" ")),
        }
    }
}

/// Named-field access used by every scorer.
pub trait Searchable {
    /// Resolve a field by name. Unknown and absent fields return `None`.
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}

/// Render a scalar JSON value as text; anything else becomes `None`.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Accept a string, number or bool; null and other shapes become empty.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value).unwrap_or_default())
}

/// Like [`lenient_string`] but keeps absence and blank strings as `None`.
pub(crate) fn lenient_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(scalar_to_string(value).filter(|s| !s.trim().is_empty()))
}

/// Accept a list of tags, a single tag string, or null.
pub(crate) fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(values) => values.into_iter().filter_map(scalar_to_string).collect(),
        other => scalar_to_string(other).into_iter().collect(),
    })
}
