//! User identifiers and search input validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Public user identifiers are exactly eight decimal digits.
static UNIQUE_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8}$").expect("unique id pattern is valid"));

/// The public identifier the server assigns to every user.
///
/// The server stores these as strings, so this is a thin newtype rather than
/// an integer. Values coming back from the API are accepted as-is; values
/// typed by the user go through [`SearchInput::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UniqueId(String);

impl UniqueId {
    /// Wrap an identifier received from the server.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this identifier has the 8-digit shape users can search for.
    pub fn is_well_formed(&self) -> bool {
        UNIQUE_ID_PATTERN.is_match(&self.0)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UniqueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Outcome of validating what the user typed into the search prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Nothing was entered (or the prompt was dismissed).
    Empty,
    /// Something was entered but it is not an 8-digit id.
    Invalid(String),
    /// A well-formed id.
    Valid(UniqueId),
}

impl SearchInput {
    /// Classify raw prompt input. Surrounding whitespace is ignored.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            SearchInput::Empty
        } else if UNIQUE_ID_PATTERN.is_match(trimmed) {
            SearchInput::Valid(UniqueId::new(trimmed))
        } else {
            SearchInput::Invalid(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_digits_is_valid() {
        assert_eq!(
            SearchInput::parse("12345678"),
            SearchInput::Valid(UniqueId::new("12345678"))
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(
            SearchInput::parse("  87654321\n"),
            SearchInput::Valid(UniqueId::new("87654321"))
        );
    }

    #[test]
    fn test_wrong_lengths_are_invalid() {
        for raw in ["1234", "1234567", "123456789"] {
            assert_eq!(SearchInput::parse(raw), SearchInput::Invalid(raw.to_string()));
        }
    }

    #[test]
    fn test_non_digits_are_invalid() {
        assert!(matches!(SearchInput::parse("1234abcd"), SearchInput::Invalid(_)));
        assert!(matches!(SearchInput::parse("1234 5678"), SearchInput::Invalid(_)));
        // Non-ASCII digits do not count
        assert!(matches!(SearchInput::parse("١٢٣٤٥٦٧٨"), SearchInput::Invalid(_)));
    }

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(SearchInput::parse(""), SearchInput::Empty);
        assert_eq!(SearchInput::parse("   "), SearchInput::Empty);
    }

    #[test]
    fn test_unique_id_serializes_as_plain_string() {
        let id = UniqueId::new("12345678");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"12345678\"");
        let back: UniqueId = serde_json::from_str("\"12345678\"").unwrap();
        assert_eq!(back, id);
        assert!(back.is_well_formed());
    }
}
