// src/config/builder.rs

use super::Config;
use crate::cli::Cli;
use crate::constants::{DEFAULT_EXCLUSIONS, DEFAULT_OUTPUT_FILE, DEFAULT_ROOTS};
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::ExclusionSet;
use std::path::PathBuf;

/// A builder for creating a `Config` programmatically.
///
/// Anything left unset falls back to the built-in defaults in
/// [`crate::constants`]; the working directory defaults to the process's
/// current directory.
///
/// # Examples
///
/// ```
/// use treecat::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .working_dir("/tmp")
///     .root("src/")
///     .root("README.md")
///     .exclude("target")
///     .output_file("snapshot.txt")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.roots, vec!["src/", "README.md"]);
/// assert!(config.exclusions.contains("target"));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    roots: Option<Vec<String>>,
    exclusions: Option<Vec<String>>,
    output_file: Option<String>,
    working_dir: Option<PathBuf>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with every setting unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a `ConfigBuilder` from parsed command-line arguments.
    ///
    /// Empty argument lists leave the matching setting unset so the defaults apply.
    pub fn from_cli(cli: Cli) -> Self {
        Self {
            roots: (!cli.roots.is_empty()).then_some(cli.roots),
            exclusions: cli.exclude,
            output_file: cli.output_file,
            working_dir: None,
        }
    }

    /// Adds a root path (file or directory).
    pub fn root(mut self, root: impl Into<String>) -> Self {
        self.roots.get_or_insert_with(Vec::new).push(root.into());
        self
    }

    /// Replaces the root list.
    pub fn roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots = Some(roots.into_iter().map(Into::into).collect());
        self
    }

    /// Adds an exclusion token.
    pub fn exclude(mut self, token: impl Into<String>) -> Self {
        self.exclusions
            .get_or_insert_with(Vec::new)
            .push(token.into());
        self
    }

    /// Replaces the exclusion token list.
    pub fn exclusions<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclusions = Some(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the report path.
    pub fn output_file(mut self, path: impl Into<String>) -> Self {
        self.output_file = Some(path.into());
        self
    }

    /// Sets the directory that relative roots and the output path are resolved against.
    pub fn working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Builds the final `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` if the output path is empty, or `Error::Io` if no
    /// working directory was set and the current directory cannot be determined.
    pub fn build(self) -> Result<Config> {
        let output_file = self
            .output_file
            .unwrap_or_else(|| DEFAULT_OUTPUT_FILE.to_string());
        if output_file.trim().is_empty() {
            return Err(Error::Config("output file path must not be empty".to_string()));
        }

        let working_dir = match self.working_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| io_error_with_path(e, "."))?,
        };

        let roots = self
            .roots
            .unwrap_or_else(|| DEFAULT_ROOTS.iter().map(|s| s.to_string()).collect());
        let exclusions = match self.exclusions {
            Some(tokens) => ExclusionSet::new(tokens),
            None => ExclusionSet::new(DEFAULT_EXCLUSIONS.iter().copied()),
        };

        log::debug!(
            "Config built: {} roots, {} exclusion tokens, output '{}', working dir '{}'",
            roots.len(),
            exclusions.len(),
            output_file,
            working_dir.display()
        );

        Ok(Config {
            roots,
            exclusions,
            output_path: PathBuf::from(output_file),
            working_dir,
        })
    }
}
