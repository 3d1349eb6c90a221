//! Pattern-based link extraction from plain text

use regex::Regex;
use std::collections::BTreeSet;

/// Matches URL-like substrings, in priority order: explicit http(s) URLs,
/// `www`-prefixed hosts, bare `github.com`/`linkedin.com` references, and
/// generic `label.tld` hosts for a fixed TLD allow-list. A match runs until
/// a delimiter character (whitespace, angle brackets, quotes, braces, pipe,
/// backslash, caret, backtick, square brackets).
const LINK_PATTERN: &str = r#"(?i)(https?://[^\s<>"{}|\\^`\[\]]+)|(www\d{0,3}\.[^\s<>"{}|\\^`\[\]]+)|(github\.com[^\s<>"{}|\\^`\[\]]+)|(linkedin\.com[^\s<>"{}|\\^`\[\]]+)|([a-z0-9-]+\.(?:com|org|net|io|ai|co|edu)[^\s<>"{}|\\^`\[\]]*)"#;

/// Finds URL-like substrings in raw text.
///
/// Purely syntactic: no network access and no validation beyond the pattern.
/// The pattern is compiled once at construction and reused for every scan.
pub struct LinkScanner {
    pattern: Regex,
}

impl LinkScanner {
    /// Create a new scanner. The pattern is a compile-time constant.
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(LINK_PATTERN).expect("link pattern is valid"),
        }
    }

    /// Scan text and return the set of unique link strings found.
    ///
    /// Never fails; text with no matches yields an empty set. When two
    /// alternatives could match at the same position, the first listed one
    /// claims the span (leftmost-first alternation), so a `github.com`
    /// substring inside a full `https://` URL is not reported twice.
    pub fn scan(&self, text: &str) -> BTreeSet<String> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                // Exactly one of the five alternative groups is non-empty.
                (1..=5).find_map(|i| caps.get(i)).map(|m| m.as_str().to_string())
            })
            .collect()
    }
}

impl Default for LinkScanner {
    fn default() -> Self {
        Self::new()
    }
}
