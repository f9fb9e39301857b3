//! Writes file blocks and error lines into the report.

pub mod file_block;
pub mod writer;

pub use file_block::{write_file_block, write_read_error};

use crate::errors::{io_error_with_path, Result};
use crate::processing::read_file_record;
use std::io::Write;
use std::path::Path;

/// What happened to a single file handed to [`emit_file`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitOutcome {
    /// A full header-and-content block was written.
    Written,
    /// The file could not be read; an `Error reading ...` line was written instead.
    ReadError,
}

/// Reads one file and writes its block to the report.
///
/// Read failures are contained here: they turn into a diagnostic line and
/// `EmitOutcome::ReadError`. Only failures writing to the report itself are
/// returned as `Err`.
///
/// `report_path` names the report in write-error messages.
pub fn emit_file(writer: &mut dyn Write, path: &Path, report_path: &Path) -> Result<EmitOutcome> {
    match read_file_record(path) {
        Ok(record) => {
            log::trace!("Writing block for {} ({} lines)", path.display(), record.line_count);
            write_file_block(writer, &record).map_err(|e| io_error_with_path(e, report_path))?;
            Ok(EmitOutcome::Written)
        }
        Err(e) => {
            log::warn!("Could not read '{}': {}", path.display(), e);
            write_read_error(writer, path, &e).map_err(|e| io_error_with_path(e, report_path))?;
            Ok(EmitOutcome::ReadError)
        }
    }
}
