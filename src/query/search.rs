//! Substring search over contacts and notes
//!
//! Matching is case-insensitive containment of the trimmed query. Results
//! keep collection order.

use serde::{Deserialize, Serialize};

use crate::error::{AssistantError, AssistantResult};
use crate::models::{Contact, Note};

/// Which contact fields a search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    /// Name only
    Name,
    /// Name, address, phone and email
    #[default]
    AllFields,
}

/// Trim and lowercase a query, rejecting blank input
pub fn normalize_query(query: &str) -> AssistantResult<String> {
    let query = query.trim();
    if query.is_empty() {
        return Err(AssistantError::Validation(
            "Search query cannot be empty".into(),
        ));
    }
    Ok(query.to_lowercase())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Check a contact against an already-normalized needle
pub fn contact_matches(contact: &Contact, needle: &str, scope: SearchScope) -> bool {
    match scope {
        SearchScope::Name => contains_ci(&contact.name, needle),
        SearchScope::AllFields => [
            contact.name.as_str(),
            contact.address.as_str(),
            contact.phone.as_str(),
            contact.email.as_str(),
        ]
        .iter()
        .any(|field| contains_ci(field, needle)),
    }
}

/// Check a note's text and tags against an already-normalized needle
pub fn note_matches(note: &Note, needle: &str) -> bool {
    contains_ci(&note.text, needle) || note.tags.iter().any(|t| contains_ci(t, needle))
}

/// Search contacts
pub fn search_contacts(
    contacts: &[Contact],
    query: &str,
    scope: SearchScope,
) -> AssistantResult<Vec<Contact>> {
    let needle = normalize_query(query)?;
    Ok(contacts
        .iter()
        .filter(|c| contact_matches(c, &needle, scope))
        .cloned()
        .collect())
}

/// Search notes by text and tags
pub fn search_notes(notes: &[Note], query: &str) -> AssistantResult<Vec<Note>> {
    let needle = normalize_query(query)?;
    Ok(notes
        .iter()
        .filter(|n| note_matches(n, &needle))
        .cloned()
        .collect())
}

/// Search notes by tag only
pub fn search_notes_by_tag(notes: &[Note], tag: &str) -> AssistantResult<Vec<Note>> {
    let needle = normalize_query(tag)?;
    Ok(notes
        .iter()
        .filter(|n| n.tags.iter().any(|t| contains_ci(t, &needle)))
        .cloned()
        .collect())
}
