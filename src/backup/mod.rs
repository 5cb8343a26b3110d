//! Backup system for the personal assistant
//!
//! Provides rolling backups with configurable retention policies and
//! restore functionality.
//!
//! # Backup Format
//!
//! Backups are stored as `backup-YYYYMMDD-HHMMSS-mmm.json` with:
//! - `schema_version`: Version for migration support
//! - `created_at`: Timestamp when backup was created
//! - `contacts`: All contacts
//! - `notes`: All notes
//!
//! # Retention Policy
//!
//! By default, the system keeps:
//! - 30 daily backups
//! - 12 monthly backups (backups taken on the first of a month)

mod manager;
mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager, BACKUP_SCHEMA_VERSION};
pub use restore::{RestoreManager, RestoreResult, ValidationResult};
