/// Extensions whose syntax depends on indentation or line structure.
///
/// Files with these extensions are never whitespace-collapsed.
pub const WHITESPACE_SIGNIFICANT_EXTENSIONS: &[&str] =
    &["py", "yaml", "yml", "jade", "haml", "slim", "coffee", "pug", "styl"];

/// Whether `extension` (with or without a leading dot, any case) is
/// whitespace-significant.
///
/// # Examples
/// ```
/// use aidigest::processing::filters::is_whitespace_significant;
///
/// assert!(is_whitespace_significant("py"));
/// assert!(is_whitespace_significant(".YML"));
/// assert!(!is_whitespace_significant("rs"));
/// assert!(!is_whitespace_significant(""));
/// ```
pub fn is_whitespace_significant(extension: &str) -> bool {
    let ext = extension.trim_start_matches('.').to_lowercase();
    WHITESPACE_SIGNIFICANT_EXTENSIONS.contains(&ext.as_str())
}

/// Collapses every run of whitespace, newlines included, to one space and
/// trims both ends. The transform is lossy and one-way.
///
/// # Examples
/// ```
/// use aidigest::processing::filters::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  fn main() {\n\tok();\n}\n"), "fn main() { ok(); }");
/// ```
pub fn collapse_whitespace(content: &str) -> String {
    content.split_whitespace().collect::<Vec<_>>().join(" ")
}
