// src/output/summary.rs

use crate::constants::CHARS_PER_TOKEN;
use crate::core_types::{AggregationResult, Metrics};
use crate::tree::TreeNode;
use anyhow::Result;
use log::debug;
use std::collections::BTreeMap;
use std::io::Write;

/// Estimates the token count of `text` as one token per four characters.
///
/// # Examples
/// ```
/// use aidigest::output::summary::estimate_token_count;
///
/// assert_eq!(estimate_token_count(""), 0);
/// assert_eq!(estimate_token_count("abc"), 0);
/// assert_eq!(estimate_token_count("héllo wörld"), 2);
/// ```
pub fn estimate_token_count(text: &str) -> usize {
    text.chars().count() / CHARS_PER_TOKEN
}

/// Writes the repository statistics block.
pub fn write_stats(writer: &mut dyn Write, result: &AggregationResult) -> Result<()> {
    debug!("Writing statistics for {} files...", result.total_files);
    writeln!(writer, "Repository statistics:")?;
    writeln!(writer, "  Total files:          {}", result.total_files)?;
    writeln!(writer, "  Files included:       {}", result.included_count)?;
    writeln!(writer, "  Files ignored:        {}", result.ignored_count)?;
    writeln!(writer, "  Binary and SVG files: {}", result.binary_and_svg_count())?;
    writeln!(writer, "  Estimated tokens:     {}", result.estimated_tokens())?;
    Ok(())
}

/// Writes the structural record as pretty-printed JSON.
pub fn write_tree(writer: &mut dyn Write, tree: &TreeNode) -> Result<()> {
    writeln!(writer, "Repository structure:")?;
    serde_json::to_writer_pretty(&mut *writer, tree)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes the per-file analysis table, one row per text file sorted by path.
pub fn write_metrics_table(writer: &mut dyn Write, metrics: &BTreeMap<String, Metrics>) -> Result<()> {
    writeln!(writer, "Code analysis:")?;
    if metrics.is_empty() {
        writeln!(writer, "  (no text files)")?;
        return Ok(());
    }

    let path_width = metrics
        .keys()
        .map(|p| p.chars().count())
        .max()
        .unwrap_or(0)
        .max("path".len());
    let language_width = metrics
        .values()
        .map(|m| m.language.label().len())
        .max()
        .unwrap_or(0)
        .max("language".len());

    writeln!(
        writer,
        "  {:<pw$}  {:<lw$}  {:>11}  {:>13}  {:>13}",
        "path",
        "language",
        "total_lines",
        "comment_lines",
        "comment_ratio",
        pw = path_width,
        lw = language_width
    )?;
    for (path, m) in metrics {
        writeln!(
            writer,
            "  {:<pw$}  {:<lw$}  {:>11}  {:>13}  {:>13.3}",
            path,
            m.language.label(),
            m.total_lines,
            m.comment_lines,
            m.comment_ratio,
            pw = path_width,
            lw = language_width
        )?;
    }
    Ok(())
}
