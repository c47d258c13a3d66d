// src/processing/metrics.rs

use crate::classify::Language;
use crate::core_types::Metrics;
use once_cell::sync::Lazy;
use regex::Regex;

static HASH_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*#").unwrap());
static SLASH_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(//|/\*)").unwrap());
static PHP_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(//|#|/\*)").unwrap());
static DASH_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*--").unwrap());

/// The leading-comment pattern for `language`, if it has one.
///
/// Languages without an entry (markup, data formats, `Unknown`) report zero
/// comment lines.
pub fn comment_pattern(language: Language) -> Option<&'static Regex> {
    match language {
        Language::Python
        | Language::Ruby
        | Language::Shell
        | Language::Perl
        | Language::R
        | Language::Yaml
        | Language::Toml => Some(&HASH_COMMENT),
        Language::JavaScript
        | Language::TypeScript
        | Language::Java
        | Language::Cpp
        | Language::C
        | Language::Go
        | Language::Rust
        | Language::Swift
        | Language::Kotlin
        | Language::Scala
        | Language::CSharp
        | Language::ObjectiveC
        | Language::Css => Some(&SLASH_COMMENT),
        Language::Php => Some(&PHP_COMMENT),
        Language::Sql | Language::Lua => Some(&DASH_COMMENT),
        Language::Html
        | Language::Markdown
        | Language::Json
        | Language::Xml
        | Language::VisualBasic
        | Language::Fortran
        | Language::Unknown => None,
    }
}

/// Counts newline-delimited lines and leading-comment lines.
///
/// # Examples
/// ```
/// use aidigest::classify::Language;
/// use aidigest::processing::count_lines_and_comments;
///
/// let content = "# header\nimport os\n    # indented\n";
/// assert_eq!(count_lines_and_comments(content, Language::Python), (3, 2));
/// assert_eq!(count_lines_and_comments("", Language::Python), (0, 0));
/// ```
pub fn count_lines_and_comments(content: &str, language: Language) -> (usize, usize) {
    let mut total_lines = 0;
    let mut comment_lines = 0;
    let pattern = comment_pattern(language);
    for line in content.lines() {
        total_lines += 1;
        if pattern.is_some_and(|re| re.is_match(line)) {
            comment_lines += 1;
        }
    }
    (total_lines, comment_lines)
}

/// Builds the [`Metrics`] entry for one text file.
///
/// `comment_ratio` is `0.0` for empty content.
pub fn collect(relative_path: &str, content: &str, language: Language) -> Metrics {
    let (total_lines, comment_lines) = count_lines_and_comments(content, language);
    let comment_ratio = if total_lines > 0 {
        comment_lines as f64 / total_lines as f64
    } else {
        0.0
    };
    Metrics {
        relative_path: relative_path.to_string(),
        total_lines,
        comment_lines,
        comment_ratio,
        language,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_family_comments() {
        let content = "// line\n/* block\n * continued */\nint x; // trailing\n";
        // Only lines that *start* with a marker count.
        assert_eq!(count_lines_and_comments(content, Language::C), (4, 2));
    }

    #[test]
    fn test_php_accepts_all_markers() {
        let content = "<?php\n# hash\n// slash\n/* block */\necho 1;";
        assert_eq!(count_lines_and_comments(content, Language::Php), (5, 3));
    }

    #[test]
    fn test_language_without_pattern() {
        let content = "<!-- comment -->\n<p>hi</p>";
        assert_eq!(count_lines_and_comments(content, Language::Html), (2, 0));
        assert_eq!(count_lines_and_comments("# title", Language::Markdown), (1, 0));
    }

    #[test]
    fn test_languages_beyond_the_core_seven() {
        assert_eq!(count_lines_and_comments("// doc\nfn f() {}", Language::Rust), (2, 1));
        assert_eq!(count_lines_and_comments("// pkg\npackage main", Language::Go), (2, 1));
        assert_eq!(count_lines_and_comments("-- q\nSELECT 1;", Language::Sql), (2, 1));
        assert_eq!(count_lines_and_comments("# k\na = 1", Language::Toml), (2, 1));
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(count_lines_and_comments("# a\r\nb\r\n", Language::Ruby), (2, 1));
    }

    #[test]
    fn test_collect_ratio() {
        let metrics = collect("m.py", "# a\n# b\nx = 1\ny = 2", Language::Python);
        assert_eq!(metrics.relative_path, "m.py");
        assert_eq!(metrics.total_lines, 4);
        assert_eq!(metrics.comment_lines, 2);
        assert!((metrics.comment_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(metrics.language, Language::Python);
    }

    #[test]
    fn test_collect_empty_has_zero_ratio() {
        let metrics = collect("empty.rs", "", Language::Rust);
        assert_eq!(metrics.total_lines, 0);
        assert_eq!(metrics.comment_lines, 0);
        assert_eq!(metrics.comment_ratio, 0.0);
    }

    #[test]
    fn test_comment_lines_never_exceed_total() {
        for content in ["", "#", "#\n#\n#", "// a\n\n// b", "x\n#\n"] {
            for language in [Language::Python, Language::Go, Language::Unknown] {
                let m = collect("f", content, language);
                assert!(m.comment_lines <= m.total_lines);
                assert!((0.0..=1.0).contains(&m.comment_ratio));
            }
        }
    }
}
