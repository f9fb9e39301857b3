//! Defines the data structures passed between discovery, reading and output.

use std::path::PathBuf;

/// A file that has been read and is ready to be written as a report block.
///
/// Records live only for the duration of writing one block.
///
/// # Examples
///
/// ```
/// use treecat::core_types::FileRecord;
/// use std::path::PathBuf;
///
/// let record = FileRecord {
///     absolute_path: PathBuf::from("/project/src/main.rs"),
///     file_name: "main.rs".to_string(),
///     extension: ".rs".to_string(),
///     content: "fn main() {}\n".to_string(),
///     line_count: 1,
/// };
///
/// assert_eq!(record.line_count, 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileRecord {
    /// The absolute path the file was read from.
    pub absolute_path: PathBuf,
    /// The file's base name.
    pub file_name: String,
    /// The extension including its leading dot, or an empty string.
    pub extension: String,
    /// The file's full text, exactly as on disk.
    pub content: String,
    /// Number of line segments in `content`. A trailing newline does not start a new line.
    pub line_count: usize,
}

/// Counts describing a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Roots that resolved to a file or directory.
    pub roots_processed: usize,
    /// Roots that did not exist or were neither a file nor a directory.
    pub roots_skipped: usize,
    /// File blocks written to the report.
    pub files_written: usize,
    /// `Error reading ...` lines written to the report.
    pub read_errors: usize,
}
