// src/output/writer.rs

//! Opens and closes the report file.

use crate::config::Config;
use crate::errors::{io_error_with_path, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// The open report: a buffered writer over the truncated output file.
pub struct ReportWriter {
    /// Where the report is being written.
    pub path: PathBuf,
    /// The buffered file handle.
    pub writer: BufWriter<File>,
}

/// The report location for `config`: the output path, resolved against the
/// working directory when relative.
pub fn report_path(config: &Config) -> PathBuf {
    config.working_dir.join(&config.output_path)
}

/// Creates (or truncates) the report file and wraps it in a `BufWriter`.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be created. This aborts the run.
pub fn setup_output_writer(config: &Config) -> Result<ReportWriter> {
    let path = report_path(config);
    let file = File::create(&path).map_err(|e| io_error_with_path(e, &path))?;
    log::debug!("Report opened for writing: {}", path.display());
    Ok(ReportWriter {
        path,
        writer: BufWriter::new(file),
    })
}

/// Flushes buffered output; the file is closed when the writer drops.
///
/// # Errors
/// Returns `Error::Io` if buffered data cannot be written out.
pub fn finalize_output(report: ReportWriter) -> Result<()> {
    let ReportWriter { path, mut writer } = report;
    writer.flush().map_err(|e| io_error_with_path(e, &path))?;
    Ok(())
}
