//! Storage layer for the personal assistant
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation, plus the audit trail that accompanies every mutation.

pub mod file_io;
pub mod records;

pub use file_io::write_json_atomic;
pub use records::{RecordLocation, RecordRepository};

use crate::audit::{generate_diff, AuditEntry, AuditLogger, EntityType};
use crate::config::paths::AssistantPaths;
use crate::config::settings::StorageLayout;
use crate::error::AssistantError;
use crate::models::{Contact, Note, Record};

/// Main storage coordinator that provides access to both collections
pub struct Storage {
    paths: AssistantPaths,
    pub contacts: RecordRepository<Contact>,
    pub notes: RecordRepository<Note>,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance for the given layout
    pub fn new(paths: AssistantPaths, layout: StorageLayout) -> Result<Self, AssistantError> {
        paths.ensure_directories()?;

        let (contacts, notes) = match layout {
            StorageLayout::Split => (
                RecordLocation::file(paths.contacts_file()),
                RecordLocation::file(paths.notes_file()),
            ),
            StorageLayout::Unified => (
                RecordLocation::section(paths.unified_file(), "contacts"),
                RecordLocation::section(paths.unified_file(), "notes"),
            ),
        };

        Ok(Self {
            contacts: RecordRepository::new(contacts),
            notes: RecordRepository::new(notes),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AssistantPaths {
        &self.paths
    }

    /// Get the audit logger
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), AssistantError> {
        self.contacts.load()?;
        self.notes.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), AssistantError> {
        self.contacts.save()?;
        self.notes.save()?;
        Ok(())
    }

    /// Record a create in the audit log
    pub fn log_create<T: Record>(&self, record: &T) -> Result<(), AssistantError> {
        self.audit
            .log(&AuditEntry::create(T::ENTITY_TYPE, record.key(), record))
    }

    /// Record an update in the audit log, with a field diff
    pub fn log_update<T: Record>(&self, before: &T, after: &T) -> Result<(), AssistantError> {
        let diff = match (serde_json::to_value(before), serde_json::to_value(after)) {
            (Ok(b), Ok(a)) => generate_diff(&b, &a),
            _ => None,
        };
        self.audit.log(&AuditEntry::update(
            T::ENTITY_TYPE,
            after.key(),
            before,
            after,
            diff,
        ))
    }

    /// Record one delete entry per removed record
    pub fn log_delete<T: Record>(&self, removed: &[T]) -> Result<(), AssistantError> {
        let entries: Vec<AuditEntry> = removed
            .iter()
            .map(|record| AuditEntry::delete(T::ENTITY_TYPE, record.key(), record))
            .collect();
        self.audit.log_batch(&entries)
    }

    /// Record that a collection was replaced from `source`
    pub fn log_restore(
        &self,
        entity_type: EntityType,
        source: &str,
        count: usize,
    ) -> Result<(), AssistantError> {
        self.audit
            .log(&AuditEntry::restore(entity_type, source, count))
    }
}
