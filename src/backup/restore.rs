//! Backup restoration
//!
//! Restores both collections from a backup archive. The archive must parse
//! in full before anything is written; records are accepted on the same
//! terms as a data file load. The data goes back through the repositories
//! so the active storage layout is respected.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::audit::EntityType;
use crate::error::{AssistantError, AssistantResult};
use crate::storage::Storage;

use super::manager::{BackupArchive, BACKUP_SCHEMA_VERSION};

/// Handles restoring from backups
pub struct RestoreManager<'a> {
    storage: &'a Storage,
}

impl<'a> RestoreManager<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Read and check a backup archive
    pub fn read_archive(&self, backup_path: &Path) -> AssistantResult<BackupArchive> {
        let contents = fs::read_to_string(backup_path)
            .map_err(|e| AssistantError::Io(format!("Failed to read backup file: {}", e)))?;

        let archive: BackupArchive = serde_json::from_str(&contents)
            .map_err(|e| AssistantError::Backup(format!("Failed to parse backup file: {}", e)))?;

        if archive.schema_version > BACKUP_SCHEMA_VERSION {
            return Err(AssistantError::Backup(format!(
                "Backup schema version {} is newer than supported version {}",
                archive.schema_version, BACKUP_SCHEMA_VERSION
            )));
        }

        Ok(archive)
    }

    /// Validate a backup file without restoring it
    pub fn validate_backup(&self, backup_path: &Path) -> AssistantResult<ValidationResult> {
        let archive = self.read_archive(backup_path)?;
        Ok(ValidationResult {
            schema_version: archive.schema_version,
            backup_date: archive.created_at,
            contact_count: archive.contacts.len(),
            note_count: archive.notes.len(),
        })
    }

    /// Replace all current data with the backup contents
    pub fn restore_from_file(&self, backup_path: &Path) -> AssistantResult<RestoreResult> {
        let archive = self.read_archive(backup_path)?;
        let source = backup_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| backup_path.display().to_string());

        let result = RestoreResult {
            schema_version: archive.schema_version,
            backup_date: archive.created_at,
            contacts_restored: archive.contacts.len(),
            notes_restored: archive.notes.len(),
        };

        // Notes go first so a failed contacts write can put them back
        let previous_notes = self.storage.notes.get_all()?;
        self.storage.notes.replace_all(archive.notes)?;
        if let Err(e) = self.storage.contacts.replace_all(archive.contacts) {
            if let Err(rollback) = self.storage.notes.replace_all(previous_notes) {
                warn!("failed to roll back notes after aborted restore: {}", rollback);
            }
            return Err(e);
        }

        self.storage
            .log_restore(EntityType::Contact, &source, result.contacts_restored)?;
        self.storage
            .log_restore(EntityType::Note, &source, result.notes_restored)?;

        info!("restored {}: {}", source, result.summary());
        Ok(result)
    }
}

/// Result of a restore operation
#[derive(Debug)]
pub struct RestoreResult {
    pub schema_version: u32,
    pub backup_date: DateTime<Utc>,
    pub contacts_restored: usize,
    pub notes_restored: usize,
}

impl RestoreResult {
    /// Get a summary of what was restored
    pub fn summary(&self) -> String {
        format!(
            "Restored {} contact(s) and {} note(s)",
            self.contacts_restored, self.notes_restored
        )
    }
}

/// Result of validating a backup
#[derive(Debug)]
pub struct ValidationResult {
    pub schema_version: u32,
    pub backup_date: DateTime<Utc>,
    pub contact_count: usize,
    pub note_count: usize,
}

impl ValidationResult {
    /// Get a summary of what data is present
    pub fn summary(&self) -> String {
        format!(
            "{} contact(s), {} note(s)",
            self.contact_count, self.note_count
        )
    }
}
