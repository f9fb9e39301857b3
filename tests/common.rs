// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn treecat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("treecat"))
}

/// Writes `content` to `dir/relative_path`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(dir: &Path, relative_path: &str, content: &str) -> std::io::Result<()> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)
}

/// Counts the file blocks in a report.
#[allow(dead_code)]
pub fn block_count(report: &str) -> usize {
    report.matches("\nNEW FILE: ").count()
}
