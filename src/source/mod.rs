// src/source/mod.rs
//! Supplies the local directory an aggregation walks.
//!
//! A source is either a local directory, used in place, or a remote git
//! repository cloned into a temporary directory that lives as long as the
//! returned [`FetchedSource`]. Clone failures are classified into
//! [`SourceError`](crate::errors::SourceError) kinds for the user.

#[cfg(feature = "git")]
mod git;
mod local;

#[cfg(feature = "git")]
pub use git::{classify_clone_error, GitSource};
pub use local::LocalSource;

use crate::errors::Result;
use crate::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// A populated local directory ready to be aggregated.
///
/// Temporary clones are deleted when this value is dropped.
#[derive(Debug)]
pub struct FetchedSource {
    path: PathBuf,
    _temp_dir: Option<TempDir>,
}

impl FetchedSource {
    pub(crate) fn local(path: PathBuf) -> Self {
        Self {
            path,
            _temp_dir: None,
        }
    }

    #[cfg_attr(not(feature = "git"), allow(dead_code))]
    pub(crate) fn temporary(temp_dir: TempDir) -> Self {
        Self {
            path: temp_dir.path().to_path_buf(),
            _temp_dir: Some(temp_dir),
        }
    }

    /// The directory to walk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the directory is removed when this value is dropped.
    pub fn is_temporary(&self) -> bool {
        self._temp_dir.is_some()
    }
}

/// Produces a local directory for a location string.
pub trait SourceProvider {
    /// Makes `location` available locally.
    fn fetch(&self, location: &str) -> Result<FetchedSource>;
}

/// Checks if a given string is a likely git repository URL.
///
/// This is a simple prefix heuristic and does not validate the URL.
///
/// # Examples
/// ```
/// use aidigest::source::is_git_url;
///
/// assert!(is_git_url("https://github.com/user/repo.git"));
/// assert!(is_git_url("git@github.com:user/repo.git"));
/// assert!(is_git_url("ssh://git@example.com/repo"));
/// assert!(!is_git_url("/local/path/to/repo"));
/// assert!(!is_git_url("."));
/// ```
pub fn is_git_url(location: &str) -> bool {
    ["https://", "http://", "git@", "ssh://", "git://", "file://"]
        .iter()
        .any(|prefix| location.starts_with(prefix))
}

/// Fetches `location` with the provider its shape calls for.
///
/// # Errors
/// Returns `Error::Config` when a URL is given but git support was compiled
/// out, or when a local path is not a directory. Clone failures surface as
/// `Error::Source`.
pub fn fetch_source(
    location: &str,
    depth: Option<u32>,
    progress: Option<Arc<dyn ProgressReporter>>,
) -> Result<FetchedSource> {
    if is_git_url(location) {
        #[cfg(feature = "git")]
        {
            return GitSource::new()
                .with_depth(depth)
                .with_progress(progress)
                .fetch(location);
        }
        #[cfg(not(feature = "git"))]
        {
            let _ = (depth, progress);
            return Err(crate::errors::Error::Config(format!(
                "'{}' looks like a git URL, but git support is not enabled in this build.",
                location
            )));
        }
    }
    let _ = (depth, progress);
    LocalSource.fetch(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::tempdir;

    #[test]
    fn test_fetch_source_local_directory() -> anyhow::Result<()> {
        let dir = tempdir()?;
        let fetched = fetch_source(dir.path().to_str().unwrap(), None, None)?;
        assert!(!fetched.is_temporary());
        assert!(fetched.path().is_absolute());
        Ok(())
    }

    #[test]
    fn test_fetch_source_missing_directory() {
        let result = fetch_source("./definitely-not-a-real-dir-1234", None, None);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_temporary_source_is_removed_on_drop() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let path = temp.path().to_path_buf();
        let fetched = FetchedSource::temporary(temp);
        assert!(fetched.is_temporary());
        assert_eq!(fetched.path(), path);
        drop(fetched);
        assert!(!path.exists());
        Ok(())
    }
}
