// src/config/parsing.rs

use super::{MetricsBasis, OutputFormat};
use crate::errors::{io_error_with_path, Error, Result};
use crate::filtering::parse_ignore_lines;
use std::path::Path;
use std::str::FromStr;

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "jsonl" | "jsonlines" | "json-lines" => Ok(OutputFormat::JsonLines),
            other => Err(Error::Config(format!(
                "Unknown output format '{}'. Expected 'markdown' or 'jsonl'.",
                other
            ))),
        }
    }
}

impl FromStr for MetricsBasis {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normalized" => Ok(MetricsBasis::Normalized),
            "source" => Ok(MetricsBasis::Source),
            other => Err(Error::Config(format!(
                "Unknown metrics basis '{}'. Expected 'normalized' or 'source'.",
                other
            ))),
        }
    }
}

/// Reads a pattern list file (one glob per line, `#` comments allowed).
///
/// Unlike the repository ignore file, a missing list is an error: the caller
/// named it explicitly.
pub fn read_pattern_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(parse_ignore_lines(&text))
}

/// Trims patterns and drops empty ones.
pub(super) fn normalize_patterns(patterns: Vec<String>) -> Vec<String> {
    patterns
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}
