//! Defines core data structures used throughout the aggregation pipeline.
//!
//! A `FileRecord` is produced for every non-ignored file during the walk,
//! `Metrics` for every text record, and `AggregationResult` bundles the
//! artifact with the counters, the included paths, the tree and the metrics.

use crate::classify::{FileCategory, Language};
use crate::tree::TreeNode;
use serde::Serialize;
use std::collections::BTreeMap;

/// The classification result for one included file.
///
/// Records are immutable once created and owned by the aggregator's buffer
/// until serialization.
///
/// # Examples
///
/// ```
/// use aidigest::classify::Language;
/// use aidigest::core_types::{FileKind, FileRecord};
///
/// let record = FileRecord {
///     relative_path: "src/main.go".to_string(),
///     kind: FileKind::Text {
///         language: Language::Go,
///         content: "package main".to_string(),
///     },
/// };
///
/// assert!(!record.is_binary());
/// assert_eq!(record.extension(), "go");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// The path relative to the traversal root, always `/`-separated.
    pub relative_path: String,
    /// Text content or binary category.
    pub kind: FileKind,
}

/// Whether a record carries content or only a category.
#[derive(Debug, Clone, PartialEq)]
pub enum FileKind {
    /// A text file with its normalized content.
    Text {
        /// Informational language label derived from the extension.
        language: Language,
        /// Decoded, fence-escaped and optionally whitespace-collapsed content.
        content: String,
    },
    /// A binary (or forced-binary) file; no content is captured.
    Binary {
        /// Human-readable category derived from the extension.
        category: FileCategory,
    },
}

impl FileRecord {
    /// Returns `true` for records routed through the binary branch.
    pub fn is_binary(&self) -> bool {
        matches!(self.kind, FileKind::Binary { .. })
    }

    /// The file extension as written in the path, without the leading dot.
    ///
    /// Used as the Markdown fence language tag; empty when the file has none.
    pub fn extension(&self) -> &str {
        let file_name = self
            .relative_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.relative_path);
        match file_name.rfind('.') {
            // A leading dot marks a hidden file, not an extension.
            Some(idx) if idx > 0 => &file_name[idx + 1..],
            _ => "",
        }
    }
}

/// Line and comment statistics for one text file.
///
/// `comment_ratio` is `comment_lines / total_lines`, or `0.0` when the file
/// has no lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metrics {
    /// The path relative to the traversal root.
    pub relative_path: String,
    /// Number of newline-delimited segments.
    pub total_lines: usize,
    /// Number of lines matching the language's leading-comment pattern.
    pub comment_lines: usize,
    /// Share of comment lines, in `[0, 1]`.
    pub comment_ratio: f64,
    /// Language label used to pick the comment pattern.
    pub language: Language,
}

/// Everything one aggregation call produces.
///
/// Ownership passes to the caller; nothing is retained by the library.
#[derive(Debug, Clone, Serialize)]
pub struct AggregationResult {
    /// The consolidated Markdown or JSON Lines text.
    pub artifact: String,
    /// Files that were not ignored (text and binary).
    pub included_count: usize,
    /// Files excluded by the ignore set.
    pub ignored_count: usize,
    /// Included files routed through the binary branch, SVG included.
    pub binary_count: usize,
    /// Every file the walk discovered.
    pub total_files: usize,
    /// Included relative paths in traversal order.
    pub included_paths: Vec<String>,
    /// Nested directory/file structure of the included files.
    pub tree: TreeNode,
    /// Metrics for every included text file, keyed by relative path.
    pub metrics: BTreeMap<String, Metrics>,
}

impl AggregationResult {
    /// Number of included files that were classified as binary or SVG.
    pub fn binary_and_svg_count(&self) -> usize {
        self.binary_count
    }

    /// A rough token estimate for the artifact: one token per four characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use aidigest::core_types::AggregationResult;
    /// use aidigest::tree::TreeNode;
    ///
    /// let result = AggregationResult {
    ///     artifact: "abcdefgh".to_string(),
    ///     included_count: 0,
    ///     ignored_count: 0,
    ///     binary_count: 0,
    ///     total_files: 0,
    ///     included_paths: Vec::new(),
    ///     tree: TreeNode::root(),
    ///     metrics: Default::default(),
    /// };
    /// assert_eq!(result.estimated_tokens(), 2);
    /// ```
    pub fn estimated_tokens(&self) -> usize {
        crate::output::summary::estimate_token_count(&self.artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_record(path: &str) -> FileRecord {
        FileRecord {
            relative_path: path.to_string(),
            kind: FileKind::Text {
                language: Language::Unknown,
                content: String::new(),
            },
        }
    }

    #[test]
    fn test_extension_simple_and_nested() {
        assert_eq!(text_record("main.rs").extension(), "rs");
        assert_eq!(text_record("src/lib/util.PY").extension(), "PY");
        assert_eq!(text_record("archive.tar.gz").extension(), "gz");
    }

    #[test]
    fn test_extension_missing_or_hidden() {
        assert_eq!(text_record("Makefile").extension(), "");
        assert_eq!(text_record(".gitignore").extension(), "");
        assert_eq!(text_record("dir.d/README").extension(), "");
    }

    #[test]
    fn test_is_binary() {
        let binary = FileRecord {
            relative_path: "logo.png".to_string(),
            kind: FileKind::Binary {
                category: FileCategory::Image,
            },
        };
        assert!(binary.is_binary());
        assert!(!text_record("a.txt").is_binary());
    }
}
