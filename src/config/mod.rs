//! Defines the `Config` struct used to drive a collection run.
//!
//! All inputs a run needs (roots, exclusions, output location and the directory
//! roots are relative to) are held here, so callers and tests can inject them
//! without touching process-wide state.

use crate::filtering::ExclusionSet;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;

pub use path_resolve::{resolve_root, ResolvedRoot};

/// Configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Root paths as given, relative to `working_dir` unless already absolute.
    pub roots: Vec<String>,
    /// Tokens that exclude files and directories.
    pub exclusions: ExclusionSet,
    /// Where the report is written. A relative path is resolved against `working_dir`.
    pub output_path: PathBuf,
    /// The directory roots and the output path are resolved against.
    pub working_dir: PathBuf,
}

impl Config {
    /// Creates a `Config` for tests: no roots, no exclusions, the current
    /// directory as the working directory.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            roots: Vec::new(),
            exclusions: ExclusionSet::default(),
            output_path: PathBuf::from(crate::constants::DEFAULT_OUTPUT_FILE),
            working_dir: PathBuf::from("."),
        }
    }
}
