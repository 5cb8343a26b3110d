//! Shared record abstraction
//!
//! Contacts and notes are both flat records kept in an ordered collection
//! and addressed by a natural key. The [`Record`] trait captures what the
//! storage and service layers need to know about them.

use std::fmt;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};

use super::validation::ValidationError;
use crate::audit::EntityType;

/// A record stored in a flat JSON collection
pub trait Record: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Entity type used in audit entries and error messages
    const ENTITY_TYPE: EntityType;

    /// The natural key (contact name, note text)
    fn key(&self) -> &str;

    /// Check whether this record's key equals `key`, ignoring case and
    /// surrounding whitespace
    fn matches_key(&self, key: &str) -> bool {
        normalize_key(self.key()) == normalize_key(key)
    }

    /// Validate every field of the record
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Normalize a key for matching
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Identifies the record(s) an edit or delete applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    /// Natural key, matched case-insensitively
    Key(String),
    /// 1-based position in the collection
    Index(usize),
}

impl RecordSelector {
    /// Build a key selector
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }
}

impl From<&str> for RecordSelector {
    /// `#3` selects the third record; `\#3` is the literal key `#3`;
    /// anything else is a key
    fn from(s: &str) -> Self {
        let s = s.trim();
        if let Some(escaped) = s.strip_prefix("\\#") {
            return Self::Key(format!("#{}", escaped));
        }
        if let Some(index) = s.strip_prefix('#').and_then(|n| n.parse::<usize>().ok()) {
            return Self::Index(index);
        }
        Self::Key(s.to_string())
    }
}

impl FromStr for RecordSelector {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{}", key),
            Self::Index(index) => write!(f, "#{}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_parsing() {
        assert_eq!("#2".parse::<RecordSelector>().unwrap(), RecordSelector::Index(2));
        assert_eq!(
            " Ann ".parse::<RecordSelector>().unwrap(),
            RecordSelector::key("Ann")
        );
        // Not a number after '#', so it is a key
        assert_eq!(
            "#work".parse::<RecordSelector>().unwrap(),
            RecordSelector::key("#work")
        );
    }

    #[test]
    fn test_escaped_hash_is_a_key() {
        assert_eq!(RecordSelector::from(r"\#12"), RecordSelector::key("#12"));
        assert_eq!(RecordSelector::from(" \\#1 "), RecordSelector::key("#1"));
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(RecordSelector::Index(5).to_string(), "#5");
        assert_eq!(RecordSelector::key("Bob").to_string(), "Bob");
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("  Ann Lee "), "ann lee");
    }
}
