// src/filtering/ignore_file.rs

use crate::errors::{io_error_with_path, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parses ignore-file text: one pattern per line, surrounding whitespace
/// trimmed, blank lines and `#` comment lines skipped.
///
/// # Examples
/// ```
/// use aidigest::filtering::parse_ignore_lines;
///
/// let patterns = parse_ignore_lines("# logs\n*.log\n\n  secrets/*  \n");
/// assert_eq!(patterns, vec!["*.log", "secrets/*"]);
/// ```
pub fn parse_ignore_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.starts_with('#'))
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads the repository-local ignore file `file_name` at `root`.
///
/// A missing file yields an empty list. Other read failures are returned,
/// since they indicate a damaged checkout rather than an absent file.
pub fn read_ignore_file(root: &Path, file_name: &str) -> Result<Vec<String>> {
    let path = root.join(file_name);
    match fs::read(&path) {
        Ok(bytes) => {
            let patterns = parse_ignore_lines(&String::from_utf8_lossy(&bytes));
            log::debug!(
                "Read {} pattern(s) from ignore file {}",
                patterns.len(),
                path.display()
            );
            Ok(patterns)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No ignore file at {}", path.display());
            Ok(Vec::new())
        }
        Err(e) => Err(io_error_with_path(e, &path)),
    }
}
