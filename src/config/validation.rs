// src/config/validation.rs

use super::ConfigBuilder;
use crate::errors::{Error, Result};

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if let Some(name) = &builder.ignore_file_name {
        validate_ignore_file_name(name)?;
    }
    if builder.root_dir.is_none() {
        return Err(Error::Config(
            "A root directory is required to build a configuration.".to_string(),
        ));
    }
    Ok(())
}

/// The ignore file is looked up directly under the root, so its name must be
/// a single path component.
fn validate_ignore_file_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Config("The ignore file name cannot be empty.".to_string()));
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(Error::Config(format!(
            "The ignore file name '{}' must be a plain file name, not a path.",
            name
        )));
    }
    Ok(())
}
