//! Defines application-specific error types.
//!
//! Errors fall in two tiers. Per-file read failures ([`Error::Io`] and
//! [`Error::Decode`] coming out of `read_file_record`) are recorded inline in
//! the report and never abort a run. Everything else returned from `run` is
//! fatal.

use std::path::Path;
use thiserror::Error;

/// Application-specific errors used throughout `treecat`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (read, write, create).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// A file's bytes are not valid UTF-8.
    #[error("{source}")]
    Decode {
        /// The file that failed to decode.
        path: String,
        /// The decoding failure, including the offending byte offset.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A `Result` alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The message recorded in the report when a single file cannot be read.
    ///
    /// For I/O failures this is the bare OS message, without the path prefix
    /// that the `Display` impl adds, since the report line already names the file.
    pub fn file_message(&self) -> String {
        match self {
            Error::Io { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
