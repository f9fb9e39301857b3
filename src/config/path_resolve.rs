// src/config/path_resolve.rs

use std::fs;
use std::path::{Path, PathBuf};

/// A root path joined onto the working directory and classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRoot {
    /// The root names a file (or a link to one).
    File(PathBuf),
    /// The root names a directory (or a link to one).
    Directory(PathBuf),
    /// The root does not exist, cannot be inspected, or is neither a file nor a directory.
    Missing(PathBuf),
}

impl ResolvedRoot {
    /// The absolute path, whatever the classification.
    pub fn path(&self) -> &Path {
        match self {
            ResolvedRoot::File(p) | ResolvedRoot::Directory(p) | ResolvedRoot::Missing(p) => p,
        }
    }
}

/// Joins `root` onto `working_dir` without canonicalizing.
///
/// An absolute `root` replaces `working_dir` entirely. Trailing separators and
/// `..` components are kept as written.
pub fn absolute_root(root: &str, working_dir: &Path) -> PathBuf {
    working_dir.join(root)
}

/// Resolves and classifies a root path.
///
/// Symbolic links are followed for classification. Metadata errors of any kind
/// classify the root as [`ResolvedRoot::Missing`]; they are never reported.
///
/// # Examples
///
/// ```
/// use treecat::config::{resolve_root, ResolvedRoot};
/// use std::path::Path;
///
/// let resolved = resolve_root("does/not/exist", Path::new("/nowhere"));
/// assert_eq!(resolved, ResolvedRoot::Missing("/nowhere/does/not/exist".into()));
/// ```
pub fn resolve_root(root: &str, working_dir: &Path) -> ResolvedRoot {
    let path = absolute_root(root, working_dir);
    match fs::metadata(&path) {
        Ok(md) if md.is_file() => ResolvedRoot::File(path),
        Ok(md) if md.is_dir() => ResolvedRoot::Directory(path),
        _ => ResolvedRoot::Missing(path),
    }
}
