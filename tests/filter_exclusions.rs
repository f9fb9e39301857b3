// tests/filter_exclusions.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, treecat_cmd};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_excluded_directory_is_pruned_at_every_depth() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let cwd = temp.path().canonicalize()?;
    create_file(&cwd, "project/keep.rs", "keep")?;
    create_file(&cwd, "project/node_modules/pkg/index.js", "no")?;
    create_file(&cwd, "project/a/b/c/node_modules/deep/x.js", "no")?;
    create_file(&cwd, "project/a/b/c/ok.rs", "ok")?;

    treecat_cmd()
        .args(["project", "-x", "node_modules", "-o", "out.txt"])
        .current_dir(&cwd)
        .assert()
        .success();

    let report = fs::read_to_string(cwd.join("out.txt"))?;
    assert!(!report.contains("node_modules"));
    assert!(report.contains("FILE NAME: keep.rs\n"));
    assert!(report.contains("FILE NAME: ok.rs\n"));
    assert_eq!(common::block_count(&report), 2);

    temp.close()?;
    Ok(())
}

#[test]
fn test_extension_and_name_exclusions_apply_everywhere() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let cwd = temp.path().canonicalize()?;
    create_file(&cwd, "src/main.rs", "fn main() {}")?;
    create_file(&cwd, "src/Cargo.lock", "lock")?;
    create_file(&cwd, "src/nested/debug.log", "log")?;
    create_file(&cwd, "src/nested/.env", "SECRET=1")?;

    treecat_cmd()
        .args(["src", "-x", ".log", ".lock", ".env", "-o", "out.txt"])
        .current_dir(&cwd)
        .assert()
        .success();

    let report = fs::read_to_string(cwd.join("out.txt"))?;
    assert!(report.contains("FILE NAME: main.rs\n"));
    assert!(!report.contains("Cargo.lock"));
    assert!(!report.contains("debug.log"));
    // ".env" has no extension; it is excluded by its name.
    assert!(!report.contains("SECRET"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_single_file_root_bypasses_directory_exclusion() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let cwd = temp.path().canonicalize()?;
    create_file(&cwd, "db/schema.sql", "create table t;")?;
    create_file(&cwd, "db/other.sql", "other")?;

    treecat_cmd()
        .args(["db/schema.sql", "db", "-x", "db", "-o", "out.txt"])
        .current_dir(&cwd)
        .assert()
        .success();

    let report = fs::read_to_string(cwd.join("out.txt"))?;
    assert!(report.contains("create table t;"));
    // Walking "db" itself: its direct files sit in an excluded directory.
    assert!(!report.contains("other"));
    assert_eq!(common::block_count(&report), 1);

    temp.close()?;
    Ok(())
}

#[test]
fn test_single_file_root_respects_own_name_and_extension() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let cwd = temp.path().canonicalize()?;
    create_file(&cwd, "build.sh", "make")?;
    create_file(&cwd, "secrets.txt", "hunter2")?;

    treecat_cmd()
        .args(["build.sh", "secrets.txt", "-x", ".sh", "secrets.txt", "-o", "out.txt"])
        .current_dir(&cwd)
        .assert()
        .success();

    let report = fs::read_to_string(cwd.join("out.txt"))?;
    assert_eq!(report, "");

    temp.close()?;
    Ok(())
}

#[test]
fn test_token_matching_is_exact() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let cwd = temp.path().canonicalize()?;
    create_file(&cwd, "src/store.db", "binaryish text")?;
    create_file(&cwd, "src/dbtools/run.py", "print()")?;

    treecat_cmd()
        .args(["src", "-x", "db", "-o", "out.txt"])
        .current_dir(&cwd)
        .assert()
        .success();

    let report = fs::read_to_string(cwd.join("out.txt"))?;
    // "db" excludes neither the ".db" extension nor a directory named "dbtools".
    assert!(report.contains("FILE NAME: store.db\n"));
    assert!(report.contains("FILE NAME: run.py\n"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_root_with_trailing_slash_keeps_its_direct_files() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let cwd = temp.path().canonicalize()?;
    create_file(&cwd, "db/a.txt", "alpha")?;
    create_file(&cwd, "db/db/b.txt", "beta")?;

    treecat_cmd()
        .args(["db/", "-x", "db", "-o", "out.txt"])
        .current_dir(&cwd)
        .assert()
        .success();

    let report = fs::read_to_string(cwd.join("out.txt"))?;
    // Spelled "db/", the root's own name is empty; the nested "db" is still pruned.
    assert!(report.contains("FILE NAME: a.txt\n"));
    assert!(!report.contains("beta"));
    assert_eq!(common::block_count(&report), 1);

    temp.close()?;
    Ok(())
}

#[test]
fn test_leading_dots_are_not_an_extension() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let cwd = temp.path().canonicalize()?;
    create_file(&cwd, "..foo", "dots")?;

    treecat_cmd()
        .args(["..foo", "-x", ".foo", "-o", "out.txt"])
        .current_dir(&cwd)
        .assert()
        .success();

    let report = fs::read_to_string(cwd.join("out.txt"))?;
    assert!(report.contains("FILE NAME: ..foo\nFILE EXTENSION: \n"));

    temp.close()?;
    Ok(())
}
