//! User settings for the personal assistant
//!
//! Manages user preferences including storage layout, birthday window
//! policy, search defaults, and backup retention.

use serde::{Deserialize, Serialize};

use super::paths::AssistantPaths;
use crate::error::AssistantError;
use crate::query::{LeapDayPolicy, SearchScope, WindowBound};

/// How contacts and notes are laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageLayout {
    /// `contacts.json` and `notes.json` (default)
    #[default]
    Split,
    /// A single `personal_assistant_data.json` with `contacts` and `notes` sections
    Unified,
}

/// Backup retention settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupRetention {
    /// Number of daily backups to keep
    pub daily_count: u32,
    /// Number of monthly backups to keep
    pub monthly_count: u32,
}

impl Default for BackupRetention {
    fn default() -> Self {
        Self {
            daily_count: 30,
            monthly_count: 12,
        }
    }
}

/// User settings for the personal assistant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// On-disk layout of the record files
    #[serde(default)]
    pub storage_layout: StorageLayout,

    /// Default look-ahead for the birthday query
    #[serde(default = "default_birthday_window_days")]
    pub birthday_window_days: u32,

    /// Whether the last day of the window is included
    #[serde(default)]
    pub window_bound: WindowBound,

    /// Where Feb 29 birthdays land in non-leap years
    #[serde(default)]
    pub leap_day_policy: LeapDayPolicy,

    /// Fields consulted by contact search
    #[serde(default)]
    pub contact_search_scope: SearchScope,

    /// Backup retention policy
    #[serde(default)]
    pub backup_retention: BackupRetention,

    /// Date format used for display (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_birthday_window_days() -> u32 {
    7
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            storage_layout: StorageLayout::default(),
            birthday_window_days: default_birthday_window_days(),
            window_bound: WindowBound::default(),
            leap_day_policy: LeapDayPolicy::default(),
            contact_search_scope: SearchScope::default(),
            backup_retention: BackupRetention::default(),
            date_format: default_date_format(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AssistantPaths) -> Result<Self, AssistantError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                AssistantError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                AssistantError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AssistantPaths) -> Result<(), AssistantError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            AssistantError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| AssistantError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.storage_layout, StorageLayout::Split);
        assert_eq!(settings.birthday_window_days, 7);
        assert_eq!(settings.window_bound, WindowBound::Inclusive);
        assert_eq!(settings.leap_day_policy, LeapDayPolicy::March1);
        assert_eq!(settings.backup_retention.daily_count, 30);
        assert_eq!(settings.backup_retention.monthly_count, 12);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.storage_layout = StorageLayout::Unified;
        settings.window_bound = WindowBound::Exclusive;

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.storage_layout, StorageLayout::Unified);
        assert_eq!(loaded.window_bound, WindowBound::Exclusive);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"birthday_window_days": 30}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.birthday_window_days, 30);
        assert_eq!(loaded.leap_day_policy, LeapDayPolicy::March1);
        assert_eq!(loaded.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_malformed_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, AssistantError::Config(_)));
    }
}
