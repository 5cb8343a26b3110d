//! CSV Export functionality
//!
//! One flat table per collection. Tags are joined with `", "` into a single
//! column, matching how they are entered.

use std::io::Write;

use crate::error::{AssistantError, AssistantResult};
use crate::storage::Storage;

fn export_error(e: impl std::fmt::Display) -> AssistantError {
    AssistantError::Export(e.to_string())
}

/// Export all contacts to CSV, returning the number of rows written
pub fn export_contacts_csv<W: Write>(storage: &Storage, writer: W) -> AssistantResult<usize> {
    let contacts = storage.contacts.get_all()?;
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Name", "Address", "Phone", "Email", "Birthday"])
        .map_err(export_error)?;
    for contact in &contacts {
        csv.write_record([
            contact.name.as_str(),
            contact.address.as_str(),
            contact.phone.as_str(),
            contact.email.as_str(),
            contact.birthday_display().as_str(),
        ])
        .map_err(export_error)?;
    }
    csv.flush().map_err(export_error)?;

    Ok(contacts.len())
}

/// Export all notes to CSV, returning the number of rows written
pub fn export_notes_csv<W: Write>(storage: &Storage, writer: W) -> AssistantResult<usize> {
    let notes = storage.notes.get_all()?;
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(["Text", "Tags"]).map_err(export_error)?;
    for note in &notes {
        csv.write_record([note.text.as_str(), note.tags_display().as_str()])
            .map_err(export_error)?;
    }
    csv.flush().map_err(export_error)?;

    Ok(notes.len())
}
