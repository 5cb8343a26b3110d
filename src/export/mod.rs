//! Export module for the personal assistant
//!
//! - CSV: one spreadsheet-compatible table per collection
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with the same content as JSON

pub mod csv;
pub mod json;
pub mod yaml;

use std::path::{Path, PathBuf};

use clap::ValueEnum;

pub use self::csv::{export_contacts_csv, export_notes_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;

/// Which collections an export covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportCollection {
    #[default]
    All,
    Contacts,
    Notes,
}

impl ExportCollection {
    pub fn includes_contacts(self) -> bool {
        matches!(self, Self::All | Self::Contacts)
    }

    pub fn includes_notes(self) -> bool {
        matches!(self, Self::All | Self::Notes)
    }
}

/// Output files for a CSV export
///
/// A single collection goes to `output` as given. Both collections go to
/// `<stem>-contacts.<ext>` and `<stem>-notes.<ext>` next to it.
pub fn csv_targets(output: &Path, collection: ExportCollection) -> Vec<(ExportCollection, PathBuf)> {
    match collection {
        ExportCollection::All => {
            let stem = output
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| "export".to_string());
            let ext = output
                .extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_else(|| "csv".to_string());
            vec![
                (
                    ExportCollection::Contacts,
                    output.with_file_name(format!("{}-contacts.{}", stem, ext)),
                ),
                (
                    ExportCollection::Notes,
                    output.with_file_name(format!("{}-notes.{}", stem, ext)),
                ),
            ]
        }
        single => vec![(single, output.to_path_buf())],
    }
}
