use crate::filtering::{written_name_of, ExclusionSet};
use log::{trace, warn};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Lazily walks `dir` depth-first, yielding every file that survives the exclusions.
///
/// Excluded directories are pruned with `filter_entry` before the walker reads
/// them, so nothing beneath them is ever visited. The root itself is never
/// pruned. Links are not followed below the root; a link to a directory is
/// skipped, any other non-directory entry is yielded. Unreadable entries are
/// logged and skipped.
///
/// Within a directory, its files come before anything inside its
/// subdirectories. Files and subdirectories each keep the order the
/// filesystem lists them in.
///
/// Files directly inside `dir` are checked against the root's last component
/// as written, so a root spelled with a trailing separator (`db/`) has an empty
/// containing-directory name and never excludes its own files.
pub(crate) fn walk_directory<'a>(
    dir: &Path,
    exclusions: &'a ExclusionSet,
) -> impl Iterator<Item = PathBuf> + 'a {
    let root_name = written_name_of(dir);
    WalkDir::new(dir)
        .follow_links(false)
        .sort_by(|a, b| a.file_type().is_dir().cmp(&b.file_type().is_dir()))
        .into_iter()
        .filter_entry(move |entry| !is_pruned_dir(entry, exclusions))
        .filter_map(|entry_result| match entry_result {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Walker error: {}", e);
                None
            }
        })
        .filter(|entry| is_file_entry(entry))
        .filter(move |entry| {
            let excluded = if entry.depth() == 1 {
                exclusions.is_excluded_under(entry.path(), &root_name)
            } else {
                exclusions.is_excluded_in_dir(entry.path())
            };
            if excluded {
                trace!("Skipping excluded file: {}", entry.path().display());
            }
            !excluded
        })
        .map(DirEntry::into_path)
}

fn is_pruned_dir(entry: &DirEntry, exclusions: &ExclusionSet) -> bool {
    let pruned =
        entry.depth() > 0 && entry.file_type().is_dir() && exclusions.is_excluded_dir(entry.path());
    if pruned {
        trace!("Pruning excluded directory: {}", entry.path().display());
    }
    pruned
}

fn is_file_entry(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return false;
    }
    // A link is yielded unless it resolves to a directory; dangling links are
    // yielded and fail when read.
    !(entry.path_is_symlink() && entry.path().is_dir())
}
