//! Backup manager for the personal assistant
//!
//! Handles rolling backups with configurable retention policies. Backups are
//! stored as dated JSON archives holding both collections.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::paths::AssistantPaths;
use crate::config::settings::BackupRetention;
use crate::error::{AssistantError, AssistantResult};
use crate::models::{Contact, Note};
use crate::storage::{write_json_atomic, Storage};

/// Archive format version written by this build
pub const BACKUP_SCHEMA_VERSION: u32 = 1;

/// Metadata about a backup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to backup
    pub path: PathBuf,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Size in bytes
    pub size_bytes: u64,
    /// Whether this is a monthly backup (kept longer)
    pub is_monthly: bool,
}

/// Backup archive format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for migration support
    pub schema_version: u32,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    pub contacts: Vec<Contact>,
    pub notes: Vec<Note>,
}

/// Manages backup creation and retention
pub struct BackupManager {
    backup_dir: PathBuf,
    retention: BackupRetention,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &AssistantPaths, retention: BackupRetention) -> Self {
        Self {
            backup_dir: paths.backup_dir(),
            retention,
        }
    }

    /// Create a backup of both collections as currently loaded
    ///
    /// Returns the path to the created backup file.
    pub fn create_backup(&self, storage: &Storage) -> AssistantResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(|e| {
            AssistantError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        let now = Utc::now();
        let filename = format!(
            "backup-{}-{:03}.json",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let backup_path = self.backup_dir.join(&filename);

        let archive = BackupArchive {
            schema_version: BACKUP_SCHEMA_VERSION,
            created_at: now,
            contacts: storage.contacts.get_all()?,
            notes: storage.notes.get_all()?,
        };

        write_json_atomic(&backup_path, &archive)?;
        info!(
            "created backup {} ({} contact(s), {} note(s))",
            filename,
            archive.contacts.len(),
            archive.notes.len()
        );

        Ok(backup_path)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> AssistantResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir).map_err(|e| {
            AssistantError::Io(format!("Failed to read backup directory: {}", e))
        })? {
            let entry = entry.map_err(|e| {
                AssistantError::Io(format!("Failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(backups)
    }

    /// Enforce retention policy by deleting old backups
    pub fn enforce_retention(&self) -> AssistantResult<Vec<PathBuf>> {
        let backups = self.list_backups()?;
        let mut deleted = Vec::new();

        let (monthly, daily): (Vec<_>, Vec<_>) = backups.into_iter().partition(|b| b.is_monthly);

        let expired = daily
            .into_iter()
            .skip(self.retention.daily_count as usize)
            .chain(monthly.into_iter().skip(self.retention.monthly_count as usize));

        for backup in expired {
            fs::remove_file(&backup.path)
                .map_err(|e| AssistantError::Io(format!("Failed to delete old backup: {}", e)))?;
            deleted.push(backup.path);
        }

        if !deleted.is_empty() {
            info!("pruned {} old backup(s)", deleted.len());
        }

        Ok(deleted)
    }

    /// Create a backup and then enforce retention policy
    pub fn create_backup_with_retention(
        &self,
        storage: &Storage,
    ) -> AssistantResult<(PathBuf, Vec<PathBuf>)> {
        let backup_path = self.create_backup(storage)?;
        let deleted = self.enforce_retention()?;
        Ok((backup_path, deleted))
    }

    /// Get backup directory path
    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> AssistantResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }

    /// Resolve `latest`, a file name in the backup directory, or a path
    pub fn resolve(&self, backup: &str) -> AssistantResult<PathBuf> {
        if backup == "latest" {
            return self
                .get_latest_backup()?
                .map(|info| info.path)
                .ok_or_else(|| AssistantError::Backup("No backups found".into()));
        }

        let in_dir = self.backup_dir.join(backup);
        if in_dir.exists() {
            return Ok(in_dir);
        }

        let path = PathBuf::from(backup);
        if path.exists() {
            return Ok(path);
        }

        Err(AssistantError::Backup(format!("Backup not found: {}", backup)))
    }
}

/// Parse backup info from a backup file name and metadata
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();
    let date_part = filename.strip_prefix("backup-")?.strip_suffix(".json")?;
    let created_at = parse_backup_timestamp(date_part)?;
    let size_bytes = fs::metadata(path).ok()?.len();

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        is_monthly: created_at.day() == 1,
        created_at,
        size_bytes,
    })
}

/// Parse `YYYYMMDD-HHMMSS` or `YYYYMMDD-HHMMSS-mmm`
fn parse_backup_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    let parts: Vec<&str> = date_str.split('-').collect();
    let (date_part, time_part, millis) = match parts.as_slice() {
        [date, time] => (*date, *time, 0),
        [date, time, millis] => (*date, *time, millis.parse().ok()?),
        _ => return None,
    };

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part.get(0..4)?.parse().ok()?;
    let month: u32 = date_part.get(4..6)?.parse().ok()?;
    let day: u32 = date_part.get(6..8)?.parse().ok()?;
    let hour: u32 = time_part.get(0..2)?.parse().ok()?;
    let minute: u32 = time_part.get(2..4)?.parse().ok()?;
    let second: u32 = time_part.get(4..6)?.parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = chrono::NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;

    Some(DateTime::from_naive_utc_and_offset(
        chrono::NaiveDateTime::new(date, time),
        Utc,
    ))
}
