//! Provides a trait and implementations for transforming decoded file content.

use std::fmt;

mod fences;
mod whitespace;

// Re-export the standalone functions
pub use fences::{escape_fences, unescape_fences};
pub use whitespace::{collapse_whitespace, is_whitespace_significant, WHITESPACE_SIGNIFICANT_EXTENSIONS};

/// A trait for content transformation filters.
///
/// Filters are applied sequentially to the content of each text file.
pub trait ContentFilter: Send + Sync {
    /// Applies the filter to the given content string.
    fn apply(&self, content: &str) -> String;
    /// Returns a descriptive name for the filter.
    fn name(&self) -> &'static str;
}

impl fmt::Debug for dyn ContentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ContentFilter").field(&self.name()).finish()
    }
}

// --- Filter Implementations ---

/// Filter that escapes triple-backtick runs.
#[derive(Debug)]
pub struct EscapeFencesFilter;

impl ContentFilter for EscapeFencesFilter {
    fn apply(&self, content: &str) -> String {
        fences::escape_fences(content)
    }
    fn name(&self) -> &'static str {
        "EscapeFencesFilter"
    }
}

/// Filter that collapses insignificant whitespace.
#[derive(Debug)]
pub struct CollapseWhitespaceFilter;

impl ContentFilter for CollapseWhitespaceFilter {
    fn apply(&self, content: &str) -> String {
        whitespace::collapse_whitespace(content)
    }
    fn name(&self) -> &'static str {
        "CollapseWhitespaceFilter"
    }
}

/// Returns the filters to run, in order, for a file with `extension`.
///
/// Fence escaping always runs; whitespace collapsing only when requested and
/// the extension is not whitespace-significant.
pub fn filters_for(remove_whitespace: bool, extension: &str) -> Vec<Box<dyn ContentFilter>> {
    let mut filters: Vec<Box<dyn ContentFilter>> = vec![Box::new(EscapeFencesFilter)];
    if remove_whitespace && !is_whitespace_significant(extension) {
        filters.push(Box::new(CollapseWhitespaceFilter));
    }
    filters
}
