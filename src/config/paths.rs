//! Path management for the personal assistant
//!
//! Provides XDG-compliant path resolution for configuration, data, and backups.
//!
//! ## Path Resolution Order
//!
//! 1. Explicit `--data-dir` flag (passed in by `main`)
//! 2. `ASSISTANT_DATA_DIR` environment variable (if set)
//! 3. Unix (Linux/macOS): `$XDG_CONFIG_HOME/personal-assistant` or `~/.config/personal-assistant`
//! 4. Windows: `%APPDATA%\personal-assistant`

use std::path::PathBuf;

use crate::error::AssistantError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ASSISTANT_DATA_DIR";

const APP_DIR_NAME: &str = "personal-assistant";

/// Manages all paths used by the assistant
#[derive(Debug, Clone)]
pub struct AssistantPaths {
    /// Base directory for all assistant data
    base_dir: PathBuf,
}

impl AssistantPaths {
    /// Create a new AssistantPaths instance from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AssistantError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AssistantPaths with a custom base directory
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Resolve paths, preferring an explicit override when given
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Self, AssistantError> {
        match override_dir {
            Some(dir) => Ok(Self::with_base_dir(dir)),
            None => Self::new(),
        }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (<base>/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to contacts.json (split layout)
    pub fn contacts_file(&self) -> PathBuf {
        self.data_dir().join("contacts.json")
    }

    /// Get the path to notes.json (split layout)
    pub fn notes_file(&self) -> PathBuf {
        self.data_dir().join("notes.json")
    }

    /// Get the path to personal_assistant_data.json (unified layout)
    pub fn unified_file(&self) -> PathBuf {
        self.data_dir().join("personal_assistant_data.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), AssistantError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AssistantError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| AssistantError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir()).map_err(|e| {
            AssistantError::Io(format!("Failed to create backup directory: {}", e))
        })?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AssistantError> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join(APP_DIR_NAME));
    }
    let home = std::env::var("HOME")
        .map_err(|_| AssistantError::Config("HOME environment variable not set".into()))?;
    Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AssistantError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AssistantError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.backup_dir(), temp_dir.path().join("backups"));
    }

    #[test]
    fn test_resolve_prefers_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::resolve(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.backup_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.contacts_file(),
            temp_dir.path().join("data").join("contacts.json")
        );
        assert_eq!(
            paths.unified_file(),
            temp_dir.path().join("data").join("personal_assistant_data.json")
        );
    }
}
