//! # Slug Search
//!
//! A search query is matched as a case-insensitive substring of `slug`.
//!
//! ```text
//! raw query "wid.get"
//!      │
//!      ▼
//! regex::escape ──► "wid\.get"   (metacharacters are literal)
//!      │
//!      ├──► MongoDB: { slug: { $regex: "wid\.get", $options: "i" } }
//!      └──► in-process: RegexBuilder(..).case_insensitive(true)
//! ```
//!
//! An empty query yields the empty pattern, which matches every slug.

use regex::{Regex, RegexBuilder};

/// A slug search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlugQuery {
    raw: String,
}

impl SlugQuery {
    /// Creates a query from the raw user input. No trimming or normalization.
    pub fn new(raw: impl Into<String>) -> Self {
        SlugQuery { raw: raw.into() }
    }

    /// Creates a query from an optional parameter; missing means match-all.
    pub fn from_param(raw: Option<String>) -> Self {
        SlugQuery::new(raw.unwrap_or_default())
    }

    /// The raw input.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the query places no restriction on the slug.
    pub fn is_unrestricted(&self) -> bool {
        self.raw.is_empty()
    }

    /// Regex source matching the query literally.
    pub fn pattern(&self) -> String {
        regex::escape(&self.raw)
    }

    /// Compiled case-insensitive regex for in-process matching.
    pub fn to_regex(&self) -> Result<Regex, regex::Error> {
        RegexBuilder::new(&self.pattern())
            .case_insensitive(true)
            .build()
    }

    /// Convenience check against a single slug.
    pub fn matches(&self, slug: &str) -> bool {
        self.to_regex().map(|re| re.is_match(slug)).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_case_insensitive() {
        let query = SlugQuery::new("WID");
        assert!(query.matches("widget"));
        assert!(query.matches("blue-widget-xl"));
        assert!(!query.matches("gadget"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let query = SlugQuery::from_param(None);
        assert!(query.is_unrestricted());
        assert!(query.matches("widget"));
        assert!(query.matches(""));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        let query = SlugQuery::new(".*");
        assert_eq!(query.pattern(), r"\.\*");
        assert!(!query.matches("widget"));
        assert!(query.matches("odd.*slug"));

        let query = SlugQuery::new("a+b");
        assert!(query.matches("A+B-kit"));
        assert!(!query.matches("aab"));
    }
}
