//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.
//! JSON is written pretty-printed with a 4-space indent.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::AssistantError;

const INDENT: &[u8] = b"    ";

/// Read a file's text, or `None` if it doesn't exist
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<Option<String>, AssistantError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    fs::read_to_string(path).map(Some).map_err(|e| {
        AssistantError::Storage(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Copy an unreadable data file to `<file>.corrupt` so it survives the next write
///
/// Returns the path of the preserved copy.
pub fn preserve_corrupt<P: AsRef<Path>>(path: P) -> Result<PathBuf, AssistantError> {
    let path = path.as_ref();
    let mut preserved = path.as_os_str().to_owned();
    preserved.push(".corrupt");
    let preserved = PathBuf::from(preserved);

    fs::copy(path, &preserved).map_err(|e| {
        AssistantError::Storage(format!(
            "Failed to preserve corrupt file {}: {}",
            path.display(),
            e
        ))
    })?;

    Ok(preserved)
}

/// Serialize to pretty JSON with a 4-space indent
pub fn to_pretty_json<T: Serialize>(data: &T) -> Result<Vec<u8>, AssistantError> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut ser)
        .map_err(|e| AssistantError::Storage(format!("Failed to serialize data: {}", e)))?;
    Ok(buf)
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// The file is either completely written or not modified at all.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), AssistantError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AssistantError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let bytes = to_pretty_json(data)?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| AssistantError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .and_then(|_| writer.write_all(b"\n"))
        .map_err(|e| AssistantError::Storage(format!("Failed to write data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| AssistantError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| AssistantError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        AssistantError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
