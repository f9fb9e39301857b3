use crate::constants::{SEPARATOR_CHAR, SEPARATOR_WIDTH};
use crate::core_types::FileRecord;
use crate::errors::Error;
use std::io::{self, Write};
use std::path::Path;

/// Writes a single file's header and content block to the writer.
///
/// The block starts with a blank line and a dashed rule, lists the file's
/// metadata, closes with a second rule and then reproduces the content
/// byte for byte. No newline is added after content that lacks one.
pub fn write_file_block(writer: &mut dyn Write, record: &FileRecord) -> io::Result<()> {
    let rule = separator();
    write!(writer, "\n{}\n", rule)?;
    writeln!(writer, "NEW FILE: {}", record.absolute_path.display())?;
    writeln!(writer, "TOTAL LINES: {}", record.line_count)?;
    writeln!(writer, "FILE NAME: {}", record.file_name)?;
    writeln!(writer, "FILE EXTENSION: {}", record.extension)?;
    writeln!(writer, "{}", rule)?;
    writer.write_all(record.content.as_bytes())?;
    Ok(())
}

/// Writes the single diagnostic line that stands in for an unreadable file.
pub fn write_read_error(writer: &mut dyn Write, path: &Path, error: &Error) -> io::Result<()> {
    writeln!(
        writer,
        "Error reading {}: {}",
        path.display(),
        error.file_message()
    )
}

fn separator() -> String {
    SEPARATOR_CHAR.to_string().repeat(SEPARATOR_WIDTH)
}
