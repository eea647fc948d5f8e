//! Namespace pattern matching
//!
//! A pattern is plain text where `*` stands for any run of characters
//! (including none). Every other character is literal. Matching is
//! unanchored: a namespace is admitted when any substring of it matches,
//! so `test` admits `test`, `testing` and `my:test:x` alike.

use super::error::{LoggerError, Result};
use regex::Regex;

/// Pattern used when `DEBUG` is unset or empty.
pub const MATCH_ALL: &str = "*";

/// A namespace pattern translated to a regular expression.
#[derive(Debug, Clone)]
pub struct NamespacePattern {
    source: String,
    regex: Regex,
}

impl NamespacePattern {
    /// Translate `pattern` into a regex: escape all meta characters, then
    /// turn each escaped `*` back into `.*`.
    pub fn compile(pattern: &str) -> Result<Self> {
        let translated = regex::escape(pattern).replace(r"\*", ".*");
        let regex = Regex::new(&translated).map_err(|e| LoggerError::pattern(pattern, e))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Whether `namespace` is admitted by this pattern.
    pub fn is_match(&self, namespace: &str) -> bool {
        self.regex.is_match(namespace)
    }

    /// The pattern text as supplied.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

/// Check whether `namespace` is admitted by `pattern`.
///
/// # Example
///
/// ```
/// use ns_debug_logger::core::pattern::matches;
///
/// assert!(matches("test:subnamespace", "test:sub*").unwrap());
/// assert!(!matches("test:subnamespace", "test:foo*").unwrap());
/// ```
pub fn matches(namespace: &str, pattern: &str) -> Result<bool> {
    Ok(NamespacePattern::compile(pattern)?.is_match(namespace))
}
