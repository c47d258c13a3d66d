// src/source/git.rs
//! Clones remote repositories with `git2`.

use super::{FetchedSource, SourceProvider};
use crate::errors::{Error, Result, SourceError};
use crate::progress::ProgressReporter;
use git2::{build::RepoBuilder, Cred, ErrorClass, ErrorCode, FetchOptions, RemoteCallbacks};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::sync::Arc;

/// Clones a repository into a fresh temporary directory.
#[derive(Default, Clone)]
pub struct GitSource {
    depth: Option<u32>,
    progress: Option<Arc<dyn ProgressReporter>>,
}

impl GitSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Performs a shallow clone with the given history depth.
    pub fn with_depth(mut self, depth: Option<u32>) -> Self {
        self.depth = depth;
        self
    }

    /// Reports transfer progress to `progress`.
    pub fn with_progress(mut self, progress: Option<Arc<dyn ProgressReporter>>) -> Self {
        self.progress = progress;
        self
    }

    fn fetch_options(&self) -> FetchOptions<'static> {
        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(create_remote_callbacks(self.progress.clone()));
        if let Some(depth) = self.depth {
            fetch_options.depth(depth as i32);
            debug!("Set shallow clone depth to: {}", depth);
        }
        fetch_options
    }
}

impl SourceProvider for GitSource {
    fn fetch(&self, location: &str) -> Result<FetchedSource> {
        let temp_dir = tempfile::Builder::new()
            .prefix("aidigest-clone-")
            .tempdir()
            .map_err(|e| Error::Source(SourceError::Transfer(e.to_string())))?;

        info!("Cloning '{}' into '{}'", location, temp_dir.path().display());
        RepoBuilder::new()
            .fetch_options(self.fetch_options())
            .clone(location, temp_dir.path())
            .map_err(|e| {
                warn!("Clone of '{}' failed: {}", location, e);
                Error::Source(classify_clone_error(&e))
            })?;

        if let Some(progress) = &self.progress {
            progress.finish();
        }
        Ok(FetchedSource::temporary(temp_dir))
    }
}

/// Maps a `git2` failure onto the three user-facing categories.
///
/// # Examples
/// ```
/// use aidigest::errors::SourceError;
/// use aidigest::source::classify_clone_error;
/// use git2::{ErrorClass, ErrorCode};
///
/// let err = git2::Error::new(ErrorCode::Auth, ErrorClass::Http, "authentication required");
/// assert!(matches!(classify_clone_error(&err), SourceError::Authentication));
/// ```
pub fn classify_clone_error(err: &git2::Error) -> SourceError {
    let message = err.message().to_lowercase();
    if err.code() == ErrorCode::Auth
        || message.contains("authentication")
        || message.contains("401")
        || message.contains("403")
    {
        SourceError::Authentication
    } else if err.code() == ErrorCode::NotFound
        || message.contains("not found")
        || message.contains("404")
        || (err.class() == ErrorClass::Os && message.contains("does not exist"))
    {
        SourceError::NotFound
    } else {
        SourceError::Transfer(err.message().to_string())
    }
}

fn default_ssh_key() -> PathBuf {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".ssh")
        .join("id_rsa")
}

/// Sets up SSH authentication and transfer progress callbacks.
fn create_remote_callbacks(progress: Option<Arc<dyn ProgressReporter>>) -> RemoteCallbacks<'static> {
    let mut callbacks = RemoteCallbacks::new();

    callbacks.credentials(|_url, username_from_url, _allowed_types| {
        let username = username_from_url.unwrap_or("git");
        debug!("Attempting SSH authentication for user: {}", username);
        if let Ok(cred) = Cred::ssh_key_from_agent(username) {
            return Ok(cred);
        }
        if let Ok(cred) = Cred::ssh_key(username, None, &default_ssh_key(), None) {
            return Ok(cred);
        }
        Err(git2::Error::new(
            ErrorCode::Auth,
            ErrorClass::Ssh,
            "Authentication failed: no SSH agent or default key available",
        ))
    });

    if let Some(p) = progress {
        callbacks.transfer_progress(move |stats| {
            if stats.received_objects() == stats.total_objects() {
                p.set_length(stats.total_deltas() as u64);
                p.set_position(stats.indexed_deltas() as u64);
                p.set_message("Resolving deltas".to_string());
            } else if stats.total_objects() > 0 {
                p.set_length(stats.total_objects() as u64);
                p.set_position(stats.received_objects() as u64);
                p.set_message("Receiving objects".to_string());
            }
            true
        });
    }

    callbacks
}
