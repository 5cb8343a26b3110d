//! JSON Export functionality
//!
//! Exports contacts and notes to JSON with schema versioning and a small
//! metadata block.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ExportCollection;
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Contact, Note};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<Note>>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub contact_count: usize,
    pub note_count: usize,
    /// Contacts with a known birthday
    pub birthday_count: usize,
    /// Distinct tags across all exported notes (case-insensitive)
    pub tag_count: usize,
}

impl FullExport {
    /// Build an export of the selected collections
    pub fn from_storage(storage: &Storage, collection: ExportCollection) -> AssistantResult<Self> {
        let contacts = if collection.includes_contacts() {
            Some(storage.contacts.get_all()?)
        } else {
            None
        };
        let notes = if collection.includes_notes() {
            Some(storage.notes.get_all()?)
        } else {
            None
        };

        let mut metadata = ExportMetadata::default();
        if let Some(contacts) = &contacts {
            metadata.contact_count = contacts.len();
            metadata.birthday_count = contacts.iter().filter(|c| c.birthday.is_some()).count();
        }
        if let Some(notes) = &notes {
            metadata.note_count = notes.len();
            let mut tags: Vec<String> = notes
                .iter()
                .flat_map(|n| n.tags.iter().map(|t| t.to_lowercase()))
                .collect();
            tags.sort();
            tags.dedup();
            metadata.tag_count = tags.len();
        }

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            contacts,
            notes,
            metadata,
        })
    }
}

/// Export the selected collections as pretty-printed JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    collection: ExportCollection,
    writer: &mut W,
) -> AssistantResult<()> {
    let export = FullExport::from_storage(storage, collection)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| AssistantError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AssistantError::Export(e.to_string()))?;

    Ok(())
}
