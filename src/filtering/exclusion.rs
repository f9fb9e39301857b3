// src/filtering/exclusion.rs

use std::collections::HashSet;
use std::path::Path;

/// A flat set of exclusion tokens.
///
/// A single token can suppress an extension (written with its leading dot,
/// e.g. `.db`), a file name or a directory name. The set does not record which
/// role a token was meant for; every check consults the same collection, so a
/// token such as `db` excludes both a directory named `db` and a file named `db`.
/// Matching is exact and case-sensitive.
///
/// # Examples
///
/// ```
/// use treecat::filtering::ExclusionSet;
/// use std::path::Path;
///
/// let set = ExclusionSet::new(["node_modules", ".lock", "secrets.env"]);
///
/// assert!(set.is_excluded_dir(Path::new("/repo/node_modules")));
/// assert!(set.is_excluded_file(Path::new("/repo/Cargo.lock")));
/// assert!(set.is_excluded_file(Path::new("/repo/config/secrets.env")));
/// assert!(!set.is_excluded_file(Path::new("/repo/src/main.rs")));
///
/// // A file whose parent directory is excluded.
/// assert!(set.is_excluded_in_dir(Path::new("/repo/node_modules/index.js")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet {
    tokens: HashSet<String>,
}

impl ExclusionSet {
    /// Creates a set from any collection of tokens. Duplicates collapse.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` if `token` is one of the exclusion tokens.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    /// The number of distinct tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if nothing is excluded.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Checks a directory's base name. Used to prune directories before descent.
    pub fn is_excluded_dir(&self, dir: &Path) -> bool {
        self.contains(&file_name_of(dir))
    }

    /// Checks a file's extension and base name.
    ///
    /// This is the whole check for a file named directly as a root; the
    /// containing directory plays no part.
    pub fn is_excluded_file(&self, file: &Path) -> bool {
        self.contains(&extension_of(file)) || self.contains(&file_name_of(file))
    }

    /// Checks a file found during a directory walk: its extension, its base
    /// name, and the base name of the directory immediately containing it.
    pub fn is_excluded_in_dir(&self, file: &Path) -> bool {
        let dir_name = file.parent().map(file_name_of).unwrap_or_default();
        self.is_excluded_under(file, &dir_name)
    }

    /// Like [`is_excluded_in_dir`](Self::is_excluded_in_dir), with the
    /// containing directory's name supplied by the caller.
    pub fn is_excluded_under(&self, file: &Path, dir_name: &str) -> bool {
        self.is_excluded_file(file) || self.contains(dir_name)
    }
}

impl<S: Into<String>> FromIterator<S> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// The base name of `path`, or an empty string when it has none (e.g. `/` or `..`).
pub fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// The last component of `path` exactly as written.
///
/// Unlike [`file_name_of`], nothing is normalized: `src/` gives an empty
/// string and `src/.` gives `.`.
pub fn written_name_of(path: &Path) -> String {
    let text = path.as_os_str().to_string_lossy();
    text.rsplit(std::path::is_separator)
        .next()
        .unwrap_or_default()
        .to_string()
}

/// The extension of `path` including its leading dot, or an empty string.
///
/// Leading dots belong to the name, so dot-files such as `.gitignore` and
/// `..foo` have no extension; `archive.tar.gz` has `.gz`.
pub fn extension_of(path: &Path) -> String {
    let name = file_name_of(path);
    let leading_dots = name.len() - name.trim_start_matches('.').len();
    match name[leading_dots..].rfind('.') {
        Some(dot) => name[leading_dots + dot..].to_string(),
        None => String::new(),
    }
}
