//! `treecat` is a library and command-line tool for concatenating the files of
//! a project tree into a single annotated text report.
//!
//! Every non-excluded file under the given roots is written as a block that
//! names its absolute path, line count, file name and extension, followed by
//! the file's content exactly as on disk. The report is meant to be pasted
//! into review tools or LLM prompts.
//!
//! A run has three stages, each usable on its own:
//! 1.  **Resolve**: join each root onto the working directory and classify it
//!     ([`config::resolve_root`]).
//! 2.  **Discover**: walk directory roots depth-first, pruning excluded
//!     directories before descent ([`discover_root`]).
//! 3.  **Emit**: read each file and write its block, or a single
//!     `Error reading ...` line if it cannot be read ([`output::emit_file`]).
//!
//! # Example: Library Usage
//!
//! ```
//! use treecat::{collect, ConfigBuilder};
//! use treecat::progress::NoOpProgress;
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! fs::create_dir(temp_dir.path().join("src")).unwrap();
//! fs::write(temp_dir.path().join("src/lib.rs"), "pub fn a() {}\n").unwrap();
//! fs::write(temp_dir.path().join("src/lib.rs.bak"), "old").unwrap();
//!
//! let config = ConfigBuilder::new()
//!     .working_dir(temp_dir.path())
//!     .root("src")
//!     .exclude(".bak")
//!     .build()
//!     .unwrap();
//!
//! let mut report = Vec::new();
//! let summary = collect(&config, &mut report, &NoOpProgress).unwrap();
//!
//! assert_eq!(summary.files_written, 1);
//! let text = String::from_utf8(report).unwrap();
//! assert!(text.contains("FILE NAME: lib.rs\n"));
//! assert!(text.contains("TOTAL LINES: 1\n"));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod filtering;
pub mod output;
pub mod processing;
pub mod progress;

pub use config::{Config, ConfigBuilder};
pub use core_types::{FileRecord, RunSummary};
pub use discovery::discover_root;
pub use errors::{Error, Result};

use crate::config::ResolvedRoot;
use crate::output::EmitOutcome;
use crate::progress::ProgressReporter;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Writes the report for every root in `config` to `writer`, in root order.
///
/// Each root's absolute path is passed to `progress` before the root is
/// processed. Missing roots are skipped without any output. Files that cannot
/// be read become one diagnostic line each and do not stop the run. The
/// report file is never included in itself.
///
/// # Errors
/// Returns an error only if writing to `writer` fails.
pub fn collect(
    config: &Config,
    writer: &mut dyn Write,
    progress: &dyn ProgressReporter,
) -> Result<RunSummary> {
    let report = ReportIdentity::new(output::writer::report_path(config));
    let mut summary = RunSummary::default();

    for root in &config.roots {
        let resolved = config::resolve_root(root, &config.working_dir);
        progress.root_started(resolved.path());
        collect_root(&resolved, config, writer, &report, &mut summary)?;
    }

    Ok(summary)
}

#[instrument(level = "debug", skip_all, fields(root = %resolved.path().display()))]
fn collect_root(
    resolved: &ResolvedRoot,
    config: &Config,
    writer: &mut dyn Write,
    report: &ReportIdentity,
    summary: &mut RunSummary,
) -> Result<()> {
    if let ResolvedRoot::Missing(_) = resolved {
        summary.roots_skipped += 1;
        return Ok(());
    }
    summary.roots_processed += 1;

    if let ResolvedRoot::File(path) = resolved {
        if report.is(path) {
            info!("Skipping root {}: it is the report being written", path.display());
            return Ok(());
        }
    }

    for file in discover_root(resolved, &config.exclusions) {
        if report.is(&file) {
            debug!("Skipping the report file itself: {}", file.display());
            continue;
        }
        match output::emit_file(writer, &file, &report.path)? {
            EmitOutcome::Written => summary.files_written += 1,
            EmitOutcome::ReadError => summary.read_errors += 1,
        }
    }
    Ok(())
}

/// The report's location, used to keep the report out of its own output.
struct ReportIdentity {
    path: PathBuf,
    canonical: Option<PathBuf>,
}

impl ReportIdentity {
    fn new(path: PathBuf) -> Self {
        let canonical = fs::canonicalize(&path).ok();
        Self { path, canonical }
    }

    fn is(&self, file: &Path) -> bool {
        if file == self.path {
            return true;
        }
        if file.file_name() != self.path.file_name() {
            return false;
        }
        match &self.canonical {
            Some(canonical) => fs::canonicalize(file).ok().as_ref() == Some(canonical),
            None => false,
        }
    }
}

/// Executes a complete run: opens (truncating) the report file, collects every
/// root into it and flushes it.
///
/// This mirrors the command-line behavior. Use [`collect`] to write the report
/// somewhere other than a file.
///
/// # Errors
/// Returns an error if the report cannot be created or written. Per-file read
/// failures are not errors.
pub fn run(config: &Config, progress: &dyn ProgressReporter) -> Result<RunSummary> {
    let mut report = output::writer::setup_output_writer(config)?;
    let summary = collect(config, &mut report.writer, progress)?;
    let report_path = report.path.clone();
    output::writer::finalize_output(report)?;

    debug!("Run summary: {:?}", summary);
    info!(
        "Wrote {} file(s) to {} ({} unreadable, {} root(s) skipped)",
        summary.files_written,
        report_path.display(),
        summary.read_errors,
        summary.roots_skipped
    );
    Ok(summary)
}
