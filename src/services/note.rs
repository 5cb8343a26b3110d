//! Note service

use log::info;

use super::{provided, selection};
use crate::error::AssistantResult;
use crate::models::{Note, Record, RecordSelector};
use crate::query;
use crate::storage::Storage;

/// Replacement values for an edit; `None` or blank keeps the old value
#[derive(Debug, Clone, Default)]
pub struct NotePatch {
    pub text: Option<String>,
    /// Comma-separated tag list replacing the current tags
    pub tags: Option<String>,
}

impl NotePatch {
    fn apply(&self, note: &Note) -> Note {
        let mut updated = note.clone();
        if let Some(text) = provided(&self.text) {
            updated.text = text.to_string();
        }
        if let Some(tags) = provided(&self.tags) {
            updated.tags = Note::parse_tags(tags);
        }
        updated
    }
}

/// Service for note management
pub struct NoteService<'a> {
    storage: &'a Storage,
}

impl<'a> NoteService<'a> {
    /// Create a new note service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new note; `tags` is a comma-separated list
    pub fn add(&self, text: &str, tags: &str) -> AssistantResult<Note> {
        let note = Note::new(text.trim(), Note::parse_tags(tags));
        note.validate()?;

        self.storage.notes.transaction(|notes| {
            notes.push(note.clone());
            Ok(())
        })?;

        self.storage.log_create(&note)?;
        info!("added note {:?}", note.text);

        Ok(note)
    }

    /// Get the note a selector names
    pub fn get(&self, selector: &RecordSelector) -> AssistantResult<Note> {
        let mut notes = self.storage.notes.get_all()?;
        let pos = selection::position(&notes, selector)?;
        Ok(notes.swap_remove(pos))
    }

    /// Apply a patch to the first note the selector names
    pub fn edit(&self, selector: &RecordSelector, patch: &NotePatch) -> AssistantResult<Note> {
        let (before, after) = self.storage.notes.transaction(|notes| {
            let pos = selection::position(notes.as_slice(), selector)?;
            let before = notes[pos].clone();
            let after = patch.apply(&before);
            after.validate()?;
            notes[pos] = after.clone();
            Ok((before, after))
        })?;

        self.storage.log_update(&before, &after)?;
        info!("updated note {:?}", after.text);

        Ok(after)
    }

    /// Delete every note the selector names
    pub fn delete(&self, selector: &RecordSelector) -> AssistantResult<Vec<Note>> {
        let removed = self
            .storage
            .notes
            .transaction(|notes| selection::remove(notes, selector))?;

        self.storage.log_delete(&removed)?;
        info!("deleted {} note(s) matching {}", removed.len(), selector);

        Ok(removed)
    }

    /// List all notes in collection order
    pub fn list(&self) -> AssistantResult<Vec<Note>> {
        self.storage.notes.get_all()
    }

    /// Search note text and tags
    pub fn search(&self, query: &str) -> AssistantResult<Vec<Note>> {
        let notes = self.storage.notes.get_all()?;
        query::search_notes(&notes, query)
    }

    /// Search tags only
    pub fn search_by_tag(&self, tag: &str) -> AssistantResult<Vec<Note>> {
        let notes = self.storage.notes.get_all()?;
        query::search_notes_by_tag(&notes, tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{EntityType, Operation};
    use crate::config::{paths::AssistantPaths, StorageLayout};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_storage(layout: StorageLayout) -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AssistantPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, layout).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_note() {
        let (_temp_dir, storage) = create_test_storage(StorageLayout::Split);
        let service = NoteService::new(&storage);

        let note = service.add("  Buy milk ", "shopping, errands, Shopping").unwrap();
        assert_eq!(note.text, "Buy milk");
        assert_eq!(note.tags, vec!["shopping", "errands"]);

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Note);
    }

    #[test]
    fn test_empty_text_rejected() {
        let (temp_dir, storage) = create_test_storage(StorageLayout::Split);
        let service = NoteService::new(&storage);

        assert!(service.add("   ", "tag").unwrap_err().is_validation());
        assert!(!temp_dir.path().join("data").join("notes.json").exists());
    }

    #[test]
    fn test_edit_note() {
        let (_temp_dir, storage) = create_test_storage(StorageLayout::Split);
        let service = NoteService::new(&storage);
        service.add("Buy milk", "shopping").unwrap();

        let retagged = service
            .edit(
                &RecordSelector::key("buy MILK"),
                &NotePatch {
                    text: None,
                    tags: Some("home, urgent".into()),
                },
            )
            .unwrap();
        assert_eq!(retagged.text, "Buy milk");
        assert_eq!(retagged.tags, vec!["home", "urgent"]);

        let rewritten = service
            .edit(
                &RecordSelector::Index(1),
                &NotePatch {
                    text: Some("Buy oat milk".into()),
                    tags: Some("".into()),
                },
            )
            .unwrap();
        assert_eq!(rewritten.text, "Buy oat milk");
        assert_eq!(rewritten.tags, vec!["home", "urgent"]);
    }

    #[test]
    fn test_delete_and_search() {
        let (_temp_dir, storage) = create_test_storage(StorageLayout::Split);
        let service = NoteService::new(&storage);
        service.add("Buy milk", "shopping").unwrap();
        service.add("Call mom", "family").unwrap();
        service.add("buy milk", "").unwrap();

        assert_eq!(service.search("MILK").unwrap().len(), 2);
        assert_eq!(service.search_by_tag("fam").unwrap()[0].text, "Call mom");
        assert!(service.search("  ").unwrap_err().is_validation());

        let removed = service.delete(&RecordSelector::key("Buy Milk")).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(service.list().unwrap().len(), 1);
        assert!(service
            .delete(&RecordSelector::key("Buy Milk"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete_note_named_like_an_index() {
        let (_temp_dir, storage) = create_test_storage(StorageLayout::Split);
        let service = NoteService::new(&storage);
        service.add("Buy milk", "").unwrap();
        service.add("#12", "").unwrap();

        let removed = service.delete(&RecordSelector::from(r"\#12")).unwrap();
        assert_eq!(removed[0].text, "#12");
        assert_eq!(service.list().unwrap()[0].text, "Buy milk");
    }

    #[test]
    fn test_unified_layout_writes_notes_section() {
        let (temp_dir, storage) = create_test_storage(StorageLayout::Unified);
        let service = NoteService::new(&storage);
        service.add("Buy milk", "shopping").unwrap();

        let text = fs::read_to_string(
            temp_dir.path().join("data").join("personal_assistant_data.json"),
        )
        .unwrap();
        let root: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(root["notes"][0]["tags"][0], "shopping");
    }
}
