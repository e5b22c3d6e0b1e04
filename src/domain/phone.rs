//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for directory phone numbers.
///
/// Numbers are kept exactly as written in the corpus (for display and
/// copying) and expose a dial string for `tel:` links.
///
/// # Example
///
/// ```
/// use faq_lookup::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("051-440-1005").unwrap();
/// assert_eq!(phone.dial(), "0514401005");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Must contain at least one digit
    /// - Can contain: digits, spaces, hyphens, parentheses, plus sign, periods
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into().trim().to_string();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        if !phone.chars().any(|c| c.is_ascii_digit()) {
            return false;
        }

        phone
            .chars()
            .all(|c| c.is_ascii_digit() || Self::is_separator(c))
    }

    /// The first number in a free-form directory entry.
    ///
    /// Leading labels and trailing annotations are dropped, so
    /// `"대표 051-440-1005(내선 3)"`, `"051-440-1005~6"` and
    /// `"051-440-1005 / 1006"` all yield `051-440-1005`. `None` when the entry
    /// holds no digits.
    pub fn primary(raw: &str) -> Option<Self> {
        let start = raw.find(|c: char| c.is_ascii_digit() || c == '+')?;
        let rest = &raw[start..];
        let end = rest
            .find(|c: char| !(c.is_ascii_digit() || Self::is_separator(c)))
            .unwrap_or(rest.len());
        let number = rest[..end].trim_end_matches(|c: char| !c.is_ascii_digit());

        Self::new(number).ok()
    }

    fn is_separator(c: char) -> bool {
        matches!(c, ' ' | '-' | '(' | ')' | '+' | '.')
    }

    /// Get the phone number as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dial string for a `tel:` link: a leading `+` when present, then digits.
    pub fn dial(&self) -> String {
        let prefix = if self.0.starts_with('+') { "+" } else { "" };
        let digits: String = self.0.chars().filter(char::is_ascii_digit).collect();
        format!("{}{}", prefix, digits)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
