// src/constants.rs

/// Roots collected when none are given on the command line, relative to the working directory.
pub const DEFAULT_ROOTS: &[&str] = &[
    "src/",
    "workflows/staffbotics.json",
    "data/",
    "docker-compose.yml",
    "import-overwrite.sh",
    "README.md",
    "scripts/",
    "entrypoint.sh",
];

/// Exclusion tokens used when none are given on the command line.
///
/// Each token is matched against extensions (with the leading dot), file names
/// and directory names alike.
pub const DEFAULT_EXCLUSIONS: &[&str] = &[
    "print_folder_files.py",
    "print_folder_files_output.txt",
    "db",
];

/// Report file written when no output path is given, relative to the working directory.
pub const DEFAULT_OUTPUT_FILE: &str = "print_folder_files_output.txt";

/// Width of the dashed rule framing each file header.
pub const SEPARATOR_WIDTH: usize = 80;

/// Character used to draw the header rule.
pub const SEPARATOR_CHAR: char = '-';
