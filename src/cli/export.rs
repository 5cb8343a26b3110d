//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::error::{AssistantError, AssistantResult};
use crate::export::{self, ExportCollection};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one file per collection
    Csv,
    /// JSON with metadata
    Json,
    /// YAML, human-readable
    Yaml,
}

fn create_output(path: &Path) -> AssistantResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        AssistantError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> AssistantResult<()> {
    writer
        .flush()
        .map_err(|e| AssistantError::Export(e.to_string()))
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    output: PathBuf,
    format: ExportFormat,
    collection: ExportCollection,
) -> AssistantResult<()> {
    match format {
        ExportFormat::Csv => {
            for (target, path) in export::csv_targets(&output, collection) {
                let mut writer = create_output(&path)?;
                let rows = match target {
                    ExportCollection::Notes => export::export_notes_csv(storage, &mut writer)?,
                    _ => export::export_contacts_csv(storage, &mut writer)?,
                };
                finish(writer)?;
                println!("Exported {} row(s) to: {}", rows, path.display());
            }
        }
        ExportFormat::Json => {
            let mut writer = create_output(&output)?;
            export::export_full_json(storage, collection, &mut writer)?;
            finish(writer)?;
            println!("Exported to: {}", output.display());
        }
        ExportFormat::Yaml => {
            let mut writer = create_output(&output)?;
            export::export_full_yaml(storage, collection, &mut writer)?;
            finish(writer)?;
            println!("Exported to: {}", output.display());
        }
    }

    Ok(())
}
