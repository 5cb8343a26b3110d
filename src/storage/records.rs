//! Generic record repository
//!
//! Keeps one ordered collection of records in memory and mirrors it to a
//! JSON file, either as the whole file (a bare array) or as one named
//! section of a shared file.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{debug, warn};
use serde::de::Error as _;
use serde_json::{Map, Value};

use crate::error::{AssistantError, AssistantResult};
use crate::models::Record;

use super::file_io::{preserve_corrupt, read_text, write_json_atomic};

/// Where a collection lives on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordLocation {
    path: PathBuf,
    section: Option<&'static str>,
}

impl RecordLocation {
    /// The whole file is a JSON array of records
    pub fn file(path: PathBuf) -> Self {
        Self {
            path,
            section: None,
        }
    }

    /// The records are the array under `section` in a shared JSON object
    pub fn section(path: PathBuf, section: &'static str) -> Self {
        Self {
            path,
            section: Some(section),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Repository for one collection of records
pub struct RecordRepository<T: Record> {
    location: RecordLocation,
    data: RwLock<Vec<T>>,
}

impl<T: Record> RecordRepository<T> {
    /// Create an empty repository; call [`load`](Self::load) to read the file
    pub fn new(location: RecordLocation) -> Self {
        Self {
            location,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn location(&self) -> &RecordLocation {
        &self.location
    }

    /// Load records from disk
    ///
    /// A missing file is an empty collection. A file that cannot be parsed is
    /// also treated as empty; it is copied to `<file>.corrupt` first so the
    /// next save does not destroy it.
    pub fn load(&self) -> AssistantResult<()> {
        let records = match read_text(&self.location.path)? {
            None => Vec::new(),
            Some(text) => match self.parse(&text) {
                Ok(records) => records,
                Err(e) => {
                    let preserved = preserve_corrupt(&self.location.path)?;
                    warn!(
                        "{} is unreadable ({}); starting with an empty {} list, original kept at {}",
                        self.location.path.display(),
                        e,
                        T::ENTITY_TYPE.label().to_lowercase(),
                        preserved.display()
                    );
                    Vec::new()
                }
            },
        };

        debug!(
            "loaded {} {} record(s) from {}",
            records.len(),
            T::ENTITY_TYPE,
            self.location.path.display()
        );

        *self.write_lock()? = records;
        Ok(())
    }

    fn parse(&self, text: &str) -> Result<Vec<T>, serde_json::Error> {
        match self.location.section {
            None => serde_json::from_str(text),
            Some(section) => match serde_json::from_str::<Value>(text)? {
                Value::Object(mut root) => match root.remove(section) {
                    None | Some(Value::Null) => Ok(Vec::new()),
                    Some(value) => serde_json::from_value(value),
                },
                _ => Err(serde_json::Error::custom(format!(
                    "expected an object with a '{}' section",
                    section
                ))),
            },
        }
    }

    /// Save the in-memory collection to disk
    pub fn save(&self) -> AssistantResult<()> {
        let data = self.read_lock()?;
        self.persist(&data)
    }

    fn persist(&self, records: &[T]) -> AssistantResult<()> {
        match self.location.section {
            None => write_json_atomic(&self.location.path, &records)?,
            Some(section) => {
                // Keep the other sections of the shared file intact
                let mut root = match read_text(&self.location.path)? {
                    Some(text) => match serde_json::from_str::<Value>(&text) {
                        Ok(Value::Object(map)) => map,
                        _ => Map::new(),
                    },
                    None => Map::new(),
                };
                root.insert(section.to_string(), serde_json::to_value(records)?);
                write_json_atomic(&self.location.path, &Value::Object(root))?;
            }
        }

        debug!(
            "saved {} {} record(s) to {}",
            records.len(),
            T::ENTITY_TYPE,
            self.location.path.display()
        );
        Ok(())
    }

    /// Get all records in collection order
    pub fn get_all(&self) -> AssistantResult<Vec<T>> {
        Ok(self.read_lock()?.clone())
    }

    /// Count records
    pub fn count(&self) -> AssistantResult<usize> {
        Ok(self.read_lock()?.len())
    }

    /// Run a mutation against a working copy of the collection
    ///
    /// On `Ok` the working copy is written to disk and becomes the new
    /// collection. On `Err`, or if the write fails, nothing changes.
    pub fn transaction<R, F>(&self, mutate: F) -> AssistantResult<R>
    where
        F: FnOnce(&mut Vec<T>) -> AssistantResult<R>,
    {
        let mut data = self.write_lock()?;
        let mut working = data.clone();

        let result = mutate(&mut working)?;

        self.persist(&working)?;
        *data = working;
        Ok(result)
    }

    /// Replace the whole collection and persist it
    pub fn replace_all(&self, records: Vec<T>) -> AssistantResult<()> {
        self.transaction(|data| {
            *data = records;
            Ok(())
        })
    }

    fn read_lock(&self) -> AssistantResult<std::sync::RwLockReadGuard<'_, Vec<T>>> {
        self.data
            .read()
            .map_err(|e| AssistantError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> AssistantResult<std::sync::RwLockWriteGuard<'_, Vec<T>>> {
        self.data
            .write()
            .map_err(|e| AssistantError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Contact, Note};
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn ann() -> Contact {
        Contact::new("Ann")
            .with_address("1 Main St")
            .with_phone("+12025550123")
            .with_email("a@b.com")
            .with_birthday(NaiveDate::from_ymd_opt(1990, 5, 1))
    }

    fn contacts_repo(dir: &TempDir) -> RecordRepository<Contact> {
        RecordRepository::new(RecordLocation::file(dir.path().join("contacts.json")))
    }

    #[test]
    fn test_empty_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = contacts_repo(&temp_dir);
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = contacts_repo(&temp_dir);
        repo.load().unwrap();

        let bob = Contact::new("Bob").with_phone("123456789").with_email("b@c.org");
        repo.transaction(|data| {
            data.push(ann());
            data.push(bob.clone());
            Ok(())
        })
        .unwrap();

        let repo2 = contacts_repo(&temp_dir);
        repo2.load().unwrap();
        assert_eq!(repo2.get_all().unwrap(), vec![ann(), bob]);
    }

    #[test]
    fn test_file_is_bare_array() {
        let temp_dir = TempDir::new().unwrap();
        let repo = contacts_repo(&temp_dir);
        repo.replace_all(vec![ann()]).unwrap();

        let value: Value =
            serde_json::from_str(&fs::read_to_string(temp_dir.path().join("contacts.json")).unwrap())
                .unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["birthday"], "1990-05-01");
    }

    #[test]
    fn test_failed_transaction_changes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = contacts_repo(&temp_dir);
        repo.load().unwrap();

        let result: AssistantResult<()> = repo.transaction(|data| {
            data.push(ann());
            Err(AssistantError::Validation("nope".into()))
        });

        assert!(result.is_err());
        assert_eq!(repo.count().unwrap(), 0);
        assert!(!temp_dir.path().join("contacts.json").exists());
    }

    #[test]
    fn test_empty_collection_persists_and_reloads() {
        let temp_dir = TempDir::new().unwrap();
        let repo = contacts_repo(&temp_dir);
        repo.replace_all(vec![ann()]).unwrap();
        repo.replace_all(Vec::new()).unwrap();

        let text = fs::read_to_string(temp_dir.path().join("contacts.json")).unwrap();
        assert_eq!(text.trim(), "[]");

        let repo2 = contacts_repo(&temp_dir);
        repo2.load().unwrap();
        assert_eq!(repo2.count().unwrap(), 0);
    }

    #[test]
    fn test_corrupt_file_recovers_empty_and_is_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("contacts.json");
        fs::write(&path, "[{\"name\": ").unwrap();

        let repo = contacts_repo(&temp_dir);
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);

        let preserved = temp_dir.path().join("contacts.json.corrupt");
        assert_eq!(fs::read_to_string(preserved).unwrap(), "[{\"name\": ");
    }

    #[test]
    fn test_sections_share_one_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("personal_assistant_data.json");

        let contacts: RecordRepository<Contact> =
            RecordRepository::new(RecordLocation::section(path.clone(), "contacts"));
        let notes: RecordRepository<Note> =
            RecordRepository::new(RecordLocation::section(path.clone(), "notes"));
        contacts.load().unwrap();
        notes.load().unwrap();

        contacts.replace_all(vec![ann()]).unwrap();
        notes
            .replace_all(vec![Note::new("Buy milk", ["shopping"])])
            .unwrap();

        let root: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(root["contacts"][0]["name"], "Ann");
        assert_eq!(root["notes"][0]["text"], "Buy milk");

        let reloaded: RecordRepository<Contact> =
            RecordRepository::new(RecordLocation::section(path, "contacts"));
        reloaded.load().unwrap();
        assert_eq!(reloaded.get_all().unwrap(), vec![ann()]);
    }

    #[test]
    fn test_non_object_shared_file_is_preserved() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("personal_assistant_data.json");
        let original = r#"[{"name": "Ann", "phone": "+12025550123", "email": "a@b.com"}]"#;
        fs::write(&path, original).unwrap();

        let contacts: RecordRepository<Contact> =
            RecordRepository::new(RecordLocation::section(path.clone(), "contacts"));
        contacts.load().unwrap();
        assert_eq!(contacts.count().unwrap(), 0);

        let preserved = temp_dir.path().join("personal_assistant_data.json.corrupt");
        assert_eq!(fs::read_to_string(&preserved).unwrap(), original);

        contacts
            .replace_all(vec![Contact::new("Bob")
                .with_phone("+12025550199")
                .with_email("bob@b.com")])
            .unwrap();
        assert_eq!(fs::read_to_string(preserved).unwrap(), original);
    }

    #[test]
    fn test_missing_section_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("personal_assistant_data.json");
        fs::write(&path, r#"{"contacts": []}"#).unwrap();

        let notes: RecordRepository<Note> =
            RecordRepository::new(RecordLocation::section(path, "notes"));
        notes.load().unwrap();
        assert_eq!(notes.count().unwrap(), 0);
    }
}
