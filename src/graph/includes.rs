// src/graph/includes.rs
//! Extracts local include directives from C source text.
//!
//! Textual scan, not a preprocessor: includes inside disabled `#if`
//! branches are still counted, and malformed source yields whatever
//! happens to match.

use crate::config::LOCAL_INCLUDE_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(LOCAL_INCLUDE_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Extracts the module names referenced by quoted include directives,
/// in source order.
///
/// Angle-bracket (system) includes are ignored, as are quoted includes
/// that do not name a header. The `.h` suffix is stripped so targets line
/// up with module names. Duplicates are preserved; the graph builder
/// collapses them.
#[must_use]
pub fn extract(content: &str) -> Vec<String> {
    INCLUDE_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .filter_map(|target| target.as_str().strip_suffix(".h"))
        .map(str::to_string)
        .collect()
}
