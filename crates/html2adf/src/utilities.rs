//! Utility functions for tag classification and inline filtering.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Inline;

static HEADING_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^H([1-6])$").expect("valid regex"));

/// Heading level of an uppercase tag name (`"H3"` → `Some(3)`)
pub fn heading_level(tag: &str) -> Option<u8> {
    HEADING_TAG
        .captures(tag)
        .and_then(|caps| caps[1].parse().ok())
}

/// Drop whitespace-only text runs, keeping bare newlines and hard breaks.
///
/// Applying it twice yields the same sequence as applying it once.
pub fn filter_meaningful(inlines: Vec<Inline>) -> Vec<Inline> {
    inlines.into_iter().filter(Inline::is_meaningful).collect()
}
