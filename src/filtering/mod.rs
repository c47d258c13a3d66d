// src/filtering/mod.rs

//! Decides which discovered paths are excluded from an aggregation.
//!
//! The ignore set is the union of a built-in deny-list, the patterns in a
//! repository-local ignore file, and caller-supplied patterns. Matching uses
//! shell-glob semantics against the path relative to the traversal root.

mod defaults;
mod ignore_file;
mod matcher;

pub use defaults::DEFAULT_IGNORES;
pub use ignore_file::{parse_ignore_lines, read_ignore_file};
pub use matcher::{matches, IgnoreSet};

use crate::config::Config;
use crate::errors::Result;

/// Builds the ignore set for one aggregation described by `config`.
///
/// Reads `config.ignore_file_name` from the traversal root; a missing file
/// contributes nothing.
pub fn build_ignore_set(config: &Config) -> Result<IgnoreSet> {
    let repo_patterns = read_ignore_file(&config.root_dir, &config.ignore_file_name)?;
    Ok(IgnoreSet::build(
        DEFAULT_IGNORES,
        repo_patterns.as_slice(),
        config.custom_patterns.as_slice(),
        config.use_default_ignores,
    ))
}
