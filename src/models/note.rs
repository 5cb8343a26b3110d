//! Note model
//!
//! A free-text note with an ordered list of tags. Tags keep the spelling
//! they were entered with but are compared case-insensitively.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::Record;
use super::validation::ValidationError;
use crate::audit::EntityType;

/// A note entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "NoteRepr")]
pub struct Note {
    /// Note body, also the natural key
    pub text: String,

    /// Tags in insertion order, deduplicated case-insensitively
    pub tags: Vec<String>,
}

impl Note {
    /// Create a note, normalizing the tag list
    pub fn new<I, S>(text: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            text: text.into(),
            tags: normalize_tags(tags),
        }
    }

    /// Parse a comma-separated tag list
    pub fn parse_tags(input: &str) -> Vec<String> {
        normalize_tags(input.split(','))
    }

    /// Tags joined for display
    pub fn tags_display(&self) -> String {
        self.tags.join(", ")
    }
}

/// Trim tags, drop empty ones and collapse case-insensitive duplicates
fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .map(|t| t.into().trim().to_string())
        .filter(|t| !t.is_empty())
        .filter(|t| seen.insert(t.to_lowercase()))
        .collect()
}

impl Record for Note {
    const ENTITY_TYPE: EntityType = EntityType::Note;

    fn key(&self) -> &str {
        &self.text
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(())
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// On-disk shape accepted when reading notes
///
/// Older files stored `{title, content, tags: "a, b"}`.
#[derive(Deserialize)]
struct NoteRepr {
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tags: Option<TagsRepr>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TagsRepr {
    List(Vec<String>),
    Joined(String),
}

impl From<NoteRepr> for Note {
    fn from(repr: NoteRepr) -> Self {
        let text = match repr.text {
            Some(text) => text,
            None => {
                let title = repr.title.unwrap_or_default();
                let content = repr.content.unwrap_or_default();
                match (title.trim().is_empty(), content.trim().is_empty()) {
                    (false, false) => format!("{}: {}", title.trim(), content.trim()),
                    (false, true) => title,
                    _ => content,
                }
            }
        };

        let tags = match repr.tags {
            Some(TagsRepr::List(list)) => normalize_tags(list),
            Some(TagsRepr::Joined(joined)) => Note::parse_tags(&joined),
            None => Vec::new(),
        };

        Self { text, tags }
    }
}
