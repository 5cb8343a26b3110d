//! YAML Export functionality
//!
//! Same content as the JSON export, for reading by humans.

use std::io::Write;

use super::json::FullExport;
use super::ExportCollection;
use crate::error::{AssistantError, AssistantResult};
use crate::storage::Storage;

/// Export the selected collections to YAML
pub fn export_full_yaml<W: Write>(
    storage: &Storage,
    collection: ExportCollection,
    writer: &mut W,
) -> AssistantResult<()> {
    let export = FullExport::from_storage(storage, collection)?;

    let header = format!(
        "# Personal assistant export\n# Generated: {}\n# App Version: {}\n\n",
        export.exported_at, export.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| AssistantError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AssistantError::Export(e.to_string()))?;

    Ok(())
}
