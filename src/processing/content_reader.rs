// src/processing/content_reader.rs

use super::counter::count_lines;
use crate::core_types::FileRecord;
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::{extension_of, file_name_of};
use std::{fs, path::Path};

/// Reads a file as UTF-8 text and builds its [`FileRecord`].
///
/// # Errors
/// Returns `Error::Io` if the file cannot be read (missing, permission denied,
/// vanished since discovery) and `Error::Decode` if it is not valid UTF-8.
/// Callers record these in the report rather than aborting.
pub fn read_file_record(path: &Path) -> Result<FileRecord> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    let content = String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.display().to_string(),
        source,
    })?;

    Ok(FileRecord {
        absolute_path: path.to_path_buf(),
        file_name: file_name_of(path),
        extension: extension_of(path),
        line_count: count_lines(&content),
        content,
    })
}
