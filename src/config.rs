// src/config.rs
use crate::graph::closure::DEPTH_LIMIT;
use std::path::PathBuf;

/// Runtime settings for one audit run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory whose module files are scanned.
    pub root: PathBuf,
    /// Surface walk/read warnings on stderr.
    pub verbose: bool,
    /// Maximum include indirection explored per module.
    pub depth_limit: usize,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: PathBuf::from("."),
            verbose: false,
            depth_limit: DEPTH_LIMIT,
        }
    }

    /// Audit rooted at the given directory instead of the current one.
    #[must_use]
    pub fn for_dir(root: PathBuf) -> Self {
        Self {
            root,
            ..Self::new()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

// Pattern constants

/// Extension of files treated as modules.
pub const MODULE_EXT: &str = "c";

/// Quoted include directive. Angle-bracket (system) includes do not match.
pub const LOCAL_INCLUDE_PATTERN: &str = r#"#include\s*"([^"]+)""#;

/// Start of a plausible C function definition at column zero. A textual
/// heuristic, not a parser: prototypes and indented braces do not match,
/// while the occasional top-level control block does.
pub const FUNCTION_DEF_PATTERN: &str = r"(?m)^(?:static\s+)?[A-Za-z_][\w\s*\[\],]*\([^)]*\)\s*\{";
