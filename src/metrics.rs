// src/metrics.rs
//! Per-file size metrics: line count and a heuristic function count.

use crate::config::FUNCTION_DEF_PATTERN;
use regex::Regex;
use std::sync::LazyLock;

static FUNCTION_DEF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FUNCTION_DEF_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex"))
});

/// Size metrics for one module file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct FileMetrics {
    pub lines: usize,
    /// Approximate: counts definition-shaped lines, not parsed functions.
    pub functions: usize,
}

/// Measures source text. Callers that could not read a file pass nothing
/// and report the zero default instead.
#[must_use]
pub fn measure(content: &str) -> FileMetrics {
    FileMetrics {
        lines: content.lines().count(),
        functions: FUNCTION_DEF_RE.find_iter(content).count(),
    }
}
