//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which categorizes the failures that
//! can abort an aggregation or an inference call, offering more context than
//! generic I/O or `anyhow` errors. Per-file problems during classification and
//! decoding are not errors: they are absorbed where they happen.

use thiserror::Error as ThisError;

/// A crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Application-specific errors used throughout `aidigest`.
#[derive(ThisError, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error occurring during file or directory access (read, write, metadata).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// The directory walk failed in a way that invalidates the whole run,
    /// e.g. the traversal root vanished or is not a directory.
    #[error("Directory walk failed: {0}")]
    Walk(String),

    // --- Configuration Errors ---
    /// Invalid configuration settings or combinations.
    #[error("Invalid configuration: {0}")]
    Config(String),

    // --- Output Errors ---
    /// A JSON Lines record or structural record could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- External Collaborators ---
    /// Repository acquisition failed.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The inference provider failed; the message is passed through opaquely.
    #[error("Inference provider error: {0}")]
    Inference(String),

    // --- Signal Handling ---
    /// Error indicating that the operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Classified failures from the source provider.
///
/// The display strings are the user-facing messages shown by the CLI.
#[derive(ThisError, Debug)]
pub enum SourceError {
    /// The remote rejected our credentials or the repository is private.
    #[error("Authentication error. The repository might be private or you may not have access.")]
    Authentication,

    /// The remote repository does not exist.
    #[error("Repository not found. Please check the URL and try again.")]
    NotFound,

    /// Any other transfer or checkout failure.
    #[error("An error occurred while cloning the repository: {0}")]
    Transfer(String),
}

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error, convertible to `AsRef<std::path::Path>`.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
