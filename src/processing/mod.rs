//! Handles the content stage of the `aidigest` pipeline.
//!
//! Text files are decoded with encoding detection, then passed through the
//! content filters (fence escaping, optional whitespace collapsing). The
//! metrics collector works on either the normalized or the decoded source
//! content, depending on configuration.

mod encoding;
pub mod filters;
mod metrics;

pub use encoding::decode;
pub use metrics::{collect, comment_pattern, count_lines_and_comments};

use filters::filters_for;
use log::trace;

/// Decodes raw bytes and applies the content filters for `extension`.
///
/// Fence escaping always runs. Whitespace collapsing runs only when
/// `remove_whitespace` is set and the extension is not whitespace-significant.
///
/// # Examples
/// ```
/// use aidigest::processing::normalize;
///
/// let raw = b"fn main() {\n    println!(\"hi\");\n}\n";
/// assert_eq!(normalize(raw, true, "rs"), "fn main() { println!(\"hi\"); }");
///
/// // Python keeps its indentation.
/// let raw = b"if x:\n    y()\n";
/// assert_eq!(normalize(raw, true, "py"), "if x:\n    y()\n");
///
/// // Embedded fences never reach the artifact unescaped.
/// assert_eq!(normalize(b"```", false, "md"), "\\`\\`\\`");
/// ```
pub fn normalize(raw: &[u8], remove_whitespace: bool, extension: &str) -> String {
    let (text, _) = decode(raw);
    apply_filters(text, remove_whitespace, extension)
}

/// Runs the content filters over already-decoded text.
pub fn apply_filters(text: String, remove_whitespace: bool, extension: &str) -> String {
    let mut content = text;
    for filter in filters_for(remove_whitespace, extension) {
        content = filter.apply(&content);
        trace!("Applied filter '{}' (extension '{}')", filter.name(), extension);
    }
    content
}
