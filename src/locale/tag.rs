//! Language tag identifiers.
//!
//! A [`LanguageTag`] is the opaque key used for progress tracking and
//! installed-state queries. Tags are stable across sessions and compare
//! byte-wise. Construction rejects the empty string, so downstream code can
//! rely on every tag being non-empty instead of re-validating at each call
//! site.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when constructing a [`LanguageTag`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// The tag string was empty.
    #[error("language tag must not be empty")]
    Empty,
}

/// Opaque identifier for a language/locale module.
///
/// Used as the sole key for the in-flight download registry and for
/// installed-state queries against the module installer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Create a tag from a non-empty string.
    pub fn new(tag: impl Into<String>) -> Result<Self, TagError> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(TagError::Empty);
        }
        Ok(Self(tag))
    }

    /// The tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageTag {
    type Error = TagError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LanguageTag> for String {
    fn from(tag: LanguageTag) -> Self {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag_rejected() {
        assert_eq!(LanguageTag::new(""), Err(TagError::Empty));
    }

    #[test]
    fn test_tag_round_trips_display_and_from_str() {
        let tag = LanguageTag::new("pt-BR").unwrap();
        assert_eq!(tag.to_string(), "pt-BR");
        assert_eq!("pt-BR".parse::<LanguageTag>().unwrap(), tag);
    }

    #[test]
    fn test_tag_serde_round_trip() {
        let tag = LanguageTag::new("de").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"de\"");
        let back: LanguageTag = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tag);
    }

    #[test]
    fn test_tag_serde_rejects_empty() {
        let result: Result<LanguageTag, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
