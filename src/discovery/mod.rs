//! Turns resolved roots into the sequence of files that belong in the report.
use crate::config::ResolvedRoot;
use crate::filtering::ExclusionSet;
use log::debug;
use std::iter;
use std::path::PathBuf;

mod walker;

pub(crate) use walker::walk_directory;

/// Lists the files a resolved root contributes, lazily and in walk order.
///
/// - A file root is yielded unless its own extension or name is excluded. Its
///   ancestors are not consulted.
/// - A directory root is walked depth-first with excluded directories pruned
///   before descent, and each file checked against its extension, name and
///   immediate parent directory.
/// - A missing root yields nothing.
///
/// # Examples
///
/// ```
/// use treecat::config::resolve_root;
/// use treecat::discover_root;
/// use treecat::filtering::ExclusionSet;
/// use std::fs;
/// use tempfile::tempdir;
///
/// let temp = tempdir().unwrap();
/// fs::create_dir(temp.path().join("target")).unwrap();
/// fs::write(temp.path().join("target/out.bin"), "x").unwrap();
/// fs::write(temp.path().join("lib.rs"), "x").unwrap();
///
/// let exclusions = ExclusionSet::new(["target"]);
/// let root = resolve_root(".", temp.path());
/// let files: Vec<_> = discover_root(&root, &exclusions).collect();
///
/// assert_eq!(files.len(), 1);
/// assert!(files[0].ends_with("lib.rs"));
/// ```
pub fn discover_root<'a>(
    root: &ResolvedRoot,
    exclusions: &'a ExclusionSet,
) -> Box<dyn Iterator<Item = PathBuf> + 'a> {
    match root {
        ResolvedRoot::File(path) => {
            if exclusions.is_excluded_file(path) {
                debug!("Skipping excluded file root: {}", path.display());
                Box::new(iter::empty())
            } else {
                Box::new(iter::once(path.clone()))
            }
        }
        ResolvedRoot::Directory(path) => Box::new(walk_directory(path, exclusions)),
        ResolvedRoot::Missing(_) => Box::new(iter::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_root_ignores_ancestor_exclusions() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::create_dir(temp.path().join("db"))?;
        let file = temp.path().join("db/schema.sql");
        fs::write(&file, "create table t;")?;

        let set = ExclusionSet::new(["db"]);
        let found: Vec<_> = discover_root(&ResolvedRoot::File(file.clone()), &set).collect();
        assert_eq!(found, vec![file]);
        Ok(())
    }

    #[test]
    fn test_file_root_respects_name_and_extension() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let by_name = temp.path().join("notes.txt");
        let by_ext = temp.path().join("dump.sql");
        fs::write(&by_name, "x")?;
        fs::write(&by_ext, "x")?;

        let set = ExclusionSet::new(["notes.txt", ".sql"]);
        assert_eq!(discover_root(&ResolvedRoot::File(by_name), &set).count(), 0);
        assert_eq!(discover_root(&ResolvedRoot::File(by_ext), &set).count(), 0);
        Ok(())
    }

    #[test]
    fn test_missing_root_yields_nothing() {
        let set = ExclusionSet::default();
        let root = ResolvedRoot::Missing(PathBuf::from("/definitely/not/here"));
        assert_eq!(discover_root(&root, &set).count(), 0);
    }
}
