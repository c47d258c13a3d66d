// src/source/local.rs

use super::{FetchedSource, SourceProvider};
use crate::errors::{io_error_with_path, Error, Result};
use std::path::Path;

/// Uses an existing local directory in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSource;

impl SourceProvider for LocalSource {
    fn fetch(&self, location: &str) -> Result<FetchedSource> {
        let path = Path::new(location);
        if !path.exists() {
            return Err(Error::Config(format!(
                "Input path '{}' does not exist.",
                location
            )));
        }
        if !path.is_dir() {
            return Err(Error::Config(format!(
                "Input path '{}' is not a directory.",
                location
            )));
        }
        let absolute = path
            .canonicalize()
            .map_err(|e| io_error_with_path(e, path))?;
        log::debug!("Using local directory '{}'", absolute.display());
        Ok(FetchedSource::local(absolute))
    }
}
