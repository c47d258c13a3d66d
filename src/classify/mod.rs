//! Classifies files by content and by extension.
//!
//! Three independent questions are answered here:
//! - Is the file text? (a byte probe over the head of the file)
//! - Which binary category does the extension belong to?
//! - Which language label does the extension carry?
//!
//! Both lookup tables are fixed `const` slices mapping a lowercase extension
//! to an enum variant, so every label is a typed value instead of a string.

use std::path::Path;

mod category;
mod language;
mod text_detection;

pub use category::{category, is_forced_binary, FileCategory};
pub use language::{language, Language};
pub use text_detection::{is_text, is_text_buffer, TEXT_SAMPLE_SIZE};

/// Returns the lowercase extension of `path`, without the leading dot.
///
/// Hidden files such as `.gitignore` have no extension.
///
/// # Examples
/// ```
/// use aidigest::classify::lowercase_extension;
/// use std::path::Path;
///
/// assert_eq!(lowercase_extension(Path::new("src/Main.JAVA")).as_deref(), Some("java"));
/// assert_eq!(lowercase_extension(Path::new(".env")), None);
/// assert_eq!(lowercase_extension(Path::new("Makefile")), None);
/// ```
pub fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}

/// Shared check for the extension tables: no extension may appear twice.
#[cfg(test)]
pub(crate) fn assert_unambiguous<T>(table: &[(&str, T)]) {
    use std::collections::HashSet;
    let mut seen = HashSet::new();
    for (ext, _) in table {
        assert_eq!(*ext, ext.to_lowercase(), "table keys must be lowercase: {ext}");
        assert!(!ext.starts_with('.'), "table keys carry no dot: {ext}");
        assert!(seen.insert(*ext), "extension mapped twice: {ext}");
    }
}
