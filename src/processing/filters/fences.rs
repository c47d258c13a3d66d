/// The Markdown fence that must never appear verbatim inside a block.
const FENCE: &str = "```";
/// Each backtick of the fence, preceded by a backslash.
const ESCAPED_FENCE: &str = "\\`\\`\\`";

/// Escapes every run of three backticks by putting a backslash before each
/// backtick, so file content cannot close the surrounding code fence.
///
/// Runs are replaced left to right without overlap, so four backticks become
/// one escaped fence followed by a single literal backtick.
///
/// # Examples
/// ```
/// use aidigest::processing::filters::escape_fences;
///
/// assert_eq!(escape_fences("see ```rust"), "see \\`\\`\\`rust");
/// assert_eq!(escape_fences("single ` tick"), "single ` tick");
/// ```
pub fn escape_fences(content: &str) -> String {
    content.replace(FENCE, ESCAPED_FENCE)
}

/// Reverses [`escape_fences`].
///
/// # Examples
/// ```
/// use aidigest::processing::filters::{escape_fences, unescape_fences};
///
/// let original = "a ``` b ```` c";
/// assert_eq!(unescape_fences(&escape_fences(original)), original);
/// ```
pub fn unescape_fences(content: &str) -> String {
    content.replace(ESCAPED_FENCE, FENCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_multiple_fences() {
        let input = "```\ncode\n```";
        assert_eq!(escape_fences(input), "\\`\\`\\`\ncode\n\\`\\`\\`");
    }

    #[test]
    fn test_escape_four_backticks() {
        assert_eq!(escape_fences("````"), "\\`\\`\\``");
    }

    #[test]
    fn test_escaped_output_has_no_fence() {
        let escaped = escape_fences("``````` and ``` and ``");
        assert!(!escaped.contains(FENCE));
    }

    #[test]
    fn test_round_trip() {
        for original in ["", "plain", "```", "``````", "x```y```z", "`` ` ``"] {
            assert_eq!(unescape_fences(&escape_fences(original)), original);
        }
    }
}
