// src/output/writer.rs

//! Persists the artifact to its destination (a file or stdout).

use crate::config::OutputDestination;
use crate::errors::io_error_with_path;
use anyhow::Result;
use log::debug;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};

/// Creates the writer for `destination`, creating a file's parent directory.
///
/// # Errors
/// Returns an error if the directory or file cannot be created.
pub fn setup_output_writer(destination: &OutputDestination) -> Result<Box<dyn Write>> {
    let writer: Box<dyn Write> = match destination {
        OutputDestination::Stdout => Box::new(io::stdout().lock()),
        OutputDestination::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| io_error_with_path(e, parent))?;
            }
            let file = File::create(path).map_err(|e| io_error_with_path(e, path))?;
            Box::new(BufWriter::new(file))
        }
    };
    Ok(writer)
}

/// Writes `artifact` to `destination` and flushes it.
///
/// # Examples
/// ```
/// use aidigest::config::OutputDestination;
/// use aidigest::output::writer::write_artifact;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("data").join("codebase.md");
/// write_artifact("# a.txt\n\n```txt\nhi\n```\n\n", &OutputDestination::File(path.clone())).unwrap();
/// assert!(std::fs::read_to_string(path).unwrap().starts_with("# a.txt"));
/// ```
pub fn write_artifact(artifact: &str, destination: &OutputDestination) -> Result<()> {
    let mut writer = setup_output_writer(destination)?;
    writer.write_all(artifact.as_bytes())?;
    writer.flush()?;
    debug!("Wrote {} bytes to {:?}", artifact.len(), destination);
    Ok(())
}
