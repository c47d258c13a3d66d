// src/discovery/walker.rs

use crate::errors::{Error, Result};
use log::{debug, warn};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// A regular file found by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiscoveredFile {
    pub absolute_path: PathBuf,
    /// `/`-separated path relative to the traversal root.
    pub relative_path: String,
}

/// Files of a directory come before its subdirectories, each group by name.
fn files_first(a: &DirEntry, b: &DirEntry) -> Ordering {
    let a_is_dir = a.file_type().is_dir();
    let b_is_dir = b.file_type().is_dir();
    a_is_dir
        .cmp(&b_is_dir)
        .then_with(|| a.file_name().cmp(b.file_name()))
}

/// Configures the ordered, single-threaded walk over `root`.
pub(super) fn build_walker(root: &Path) -> walkdir::IntoIter {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by(files_first)
        .into_iter()
}

/// Converts `path` into a `/`-separated path relative to `root`.
pub(crate) fn relative_path(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => {
            warn!(
                "Failed to strip prefix '{}' from '{}'. Using the full path.",
                root.display(),
                path.display()
            );
            path.to_string_lossy().replace('\\', "/")
        }
    }
}

/// Walks `root` once and returns every regular file in traversal order.
///
/// An error on the root itself aborts the walk. Errors on entries below it
/// are logged and the entry is skipped. Symlinks are reported only when they
/// point at a regular file; symlinked directories are never entered.
pub(crate) fn collect_files(root: &Path) -> Result<Vec<DiscoveredFile>> {
    let mut files = Vec::new();

    for entry_result in build_walker(root) {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(err) if err.depth() == 0 => {
                return Err(Error::Walk(format!(
                    "cannot read traversal root '{}': {}",
                    root.display(),
                    err
                )));
            }
            Err(err) => {
                warn!("Skipping unreadable entry: {}", err);
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }
        if file_type.is_symlink() {
            if !entry.path().is_file() {
                debug!("Skipping symlink that is not a file: {}", entry.path().display());
                continue;
            }
        } else if !file_type.is_file() {
            debug!("Skipping special file: {}", entry.path().display());
            continue;
        }

        files.push(DiscoveredFile {
            relative_path: relative_path(root, entry.path()),
            absolute_path: entry.into_path(),
        });
    }

    debug!("Walk of '{}' found {} files", root.display(), files.len());
    Ok(files)
}
