//! Exclusion matching for files and directories.

mod exclusion;

pub use exclusion::{extension_of, file_name_of, written_name_of, ExclusionSet};
