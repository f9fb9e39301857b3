// src/cli.rs

use clap::Parser;

/// Concatenates a project's files into a single annotated text report.
///
/// treecat walks each root (a file or a directory, relative to the current
/// directory), skips anything whose extension, file name or directory name is
/// excluded, and writes every remaining file to the report with a header giving
/// its absolute path, line count, name and extension. Run without arguments to
/// use the built-in roots, exclusions and output file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to collect. Defaults to the built-in root list.
    #[arg(value_name = "ROOT")]
    pub roots: Vec<String>,

    /// Exclude an extension (".lock"), file name or directory name (repeatable).
    /// Replaces the built-in exclusion list.
    #[arg(short = 'x', long = "exclude", value_name = "TOKEN", num_args = 1..)]
    pub exclude: Option<Vec<String>>,

    /// Write the report to this file (overwritten on every run).
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,
}
