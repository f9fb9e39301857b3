//! Reads discovered files into [`FileRecord`](crate::core_types::FileRecord)s.
//!
//! Files are read one at a time, in discovery order. A failed read is returned
//! to the caller as an `Err` for that file alone.

mod content_reader;
mod counter;

pub use content_reader::read_file_record;
pub use counter::count_lines;
