// src/progress.rs

//! Reports which root a run is working on.
use std::io::{self, Write};
use std::path::Path;

/// A trait for reporting progress through the list of roots.
///
/// # Examples
///
/// ```
/// use treecat::progress::ProgressReporter;
/// use std::path::{Path, PathBuf};
/// use std::sync::Mutex;
///
/// // A mock reporter that records every root it is told about.
/// struct Recorder {
///     seen: Mutex<Vec<PathBuf>>,
/// }
/// impl ProgressReporter for Recorder {
///     fn root_started(&self, path: &Path) {
///         self.seen.lock().unwrap().push(path.to_path_buf());
///     }
/// }
///
/// let recorder = Recorder { seen: Mutex::new(Vec::new()) };
/// recorder.root_started(Path::new("/project/src"));
/// assert_eq!(recorder.seen.lock().unwrap().len(), 1);
/// ```
pub trait ProgressReporter {
    /// Called with a root's absolute path before it is processed, whether or not it exists.
    fn root_started(&self, path: &Path);
}

/// A `ProgressReporter` that does nothing.
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn root_started(&self, _path: &Path) {}
}

/// Prints each root's absolute path on its own line to standard output.
pub struct StdoutProgress;

impl ProgressReporter for StdoutProgress {
    fn root_started(&self, path: &Path) {
        let mut stdout = io::stdout().lock();
        // A closed stdout must not stop the report from being written.
        if let Err(e) = writeln!(stdout, "{}", path.display()) {
            log::debug!("Could not print progress line: {}", e);
        }
    }
}
