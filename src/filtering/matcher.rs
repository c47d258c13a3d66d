// src/filtering/matcher.rs

use glob::{MatchOptions, Pattern};
use log::{debug, warn};
use std::collections::HashSet;

/// Shell-glob semantics: `*` and `?` cross `/`, leading dots need no literal
/// match, comparison is case-sensitive.
const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// The compiled union of ignore patterns for one aggregation.
///
/// Built once per call and never mutated afterwards. There is no negation or
/// precedence: matching any single pattern excludes a path.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    /// Assembles the set from the three pattern sources.
    ///
    /// When `use_defaults` is `false` the built-in list is left out. Duplicate
    /// patterns collapse to one; patterns that are not valid globs are logged
    /// and skipped.
    ///
    /// # Examples
    /// ```
    /// use aidigest::filtering::IgnoreSet;
    ///
    /// let none: &[&str] = &[];
    /// let set = IgnoreSet::build(&["node_modules"], &["*.log".to_string()], none, false);
    /// assert_eq!(set.len(), 1);
    /// assert!(set.matches("logs/debug.log"));
    /// assert!(!set.matches("node_modules/pkg/index.js"));
    ///
    /// let custom = IgnoreSet::build(none, none, &["src"], false);
    /// assert!(!custom.matches("src/main.rs"));
    /// ```
    pub fn build<D, R, C>(defaults: &[D], repo_patterns: &[R], custom: &[C], use_defaults: bool) -> Self
    where
        D: AsRef<str>,
        R: AsRef<str>,
        C: AsRef<str>,
    {
        let defaults = defaults.iter().map(AsRef::as_ref).filter(|_| use_defaults);
        let repo = repo_patterns.iter().map(AsRef::as_ref);
        let custom = custom.iter().map(AsRef::as_ref);

        let mut seen = HashSet::new();
        let patterns = defaults
            .chain(repo)
            .chain(custom)
            .filter(|raw| seen.insert(raw.to_string()))
            .filter_map(|raw| match Pattern::new(raw) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    warn!("Invalid ignore glob pattern '{}': {}", raw, e);
                    None
                }
            })
            .collect::<Vec<_>>();

        debug!("Ignore set assembled with {} pattern(s).", patterns.len());
        Self { patterns }
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns `true` when the set has no patterns.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The source text of each compiled pattern, in assembly order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Pattern::as_str)
    }

    /// Checks a `/`-separated path relative to the traversal root.
    ///
    /// The path is excluded when at least one pattern matches the whole
    /// relative path. Directories are never tested on their own; a subtree is
    /// excluded only by a pattern such as `vendor/*`.
    pub fn matches(&self, relative_path: &str) -> bool {
        self.patterns
            .iter()
            .any(|pattern| pattern.matches_with(relative_path, GLOB_OPTIONS))
    }
}

/// Free-function form of [`IgnoreSet::matches`].
pub fn matches(relative_path: &str, set: &IgnoreSet) -> bool {
    set.matches(relative_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(patterns: &[&str]) -> IgnoreSet {
        IgnoreSet::build::<&str, &str, &str>(&[], &[], patterns, true)
    }

    #[test]
    fn test_star_crosses_separators() {
        let s = set(&["*.log"]);
        assert!(s.matches("debug.log"));
        assert!(s.matches("deep/nested/trace.log"));
        assert!(!s.matches("main.go"));
    }

    #[test]
    fn test_question_mark_and_classes() {
        let s = set(&["file?.txt", "data[0-9].csv", "x[!ab].md"]);
        assert!(s.matches("file1.txt"));
        assert!(!s.matches("file10.txt"));
        assert!(s.matches("data7.csv"));
        assert!(!s.matches("dataX.csv"));
        assert!(s.matches("xc.md"));
        assert!(!s.matches("xa.md"));
    }

    #[test]
    fn test_plain_name_matches_only_the_path_itself() {
        let s = set(&["src"]);
        assert!(s.matches("src"));
        assert!(!s.matches("src/main.rs"));
        assert!(!s.matches("lib/src"));
    }

    #[test]
    fn test_directory_star_pattern_excludes_subtree() {
        let s = set(&["node_modules/*"]);
        assert!(s.matches("node_modules/lodash/index.js"));
        // `*` crosses `/`, but the prefix is anchored at the root.
        assert!(!s.matches("web/node_modules/x.js"));
        assert!(!s.matches("node_modules_backup/x.js"));
    }

    #[test]
    fn test_leading_dot_needs_no_literal() {
        let s = set(&["*rc"]);
        assert!(s.matches(".bashrc"));
    }

    #[test]
    fn test_case_sensitive() {
        let s = set(&["*.LOG"]);
        assert!(!s.matches("debug.log"));
    }

    #[test]
    fn test_use_defaults_toggle() {
        let with = IgnoreSet::build(&["dist"], &["*.tmp"], &["secret.txt"], true);
        let without = IgnoreSet::build(&["dist"], &["*.tmp"], &["secret.txt"], false);
        assert_eq!(with.len(), 3);
        assert_eq!(without.len(), 2);
        assert!(with.matches("dist"));
        assert!(!with.matches("dist/app.js"));
        assert!(!without.matches("dist"));
        assert!(without.matches("scratch.tmp"));
        assert!(without.matches("secret.txt"));
    }

    #[test]
    fn test_duplicates_and_invalid_patterns() {
        let s = IgnoreSet::build(&["*.log"], &["*.log"], &["[unclosed", "*.bak"], true);
        let sources: Vec<_> = s.patterns().collect();
        assert_eq!(sources, vec!["*.log", "*.bak"]);
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let s = IgnoreSet::default();
        assert!(s.is_empty());
        assert!(!matches("anything/at/all", &s));
    }
}
