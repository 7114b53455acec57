// src/discovery.rs
use crate::config::{Config, MODULE_EXT};
use crate::error::{DepscopeError, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Enumerates the module files of the target directory.
///
/// Only regular `.c` files directly inside the root are considered;
/// subdirectories are not descended into. Results are sorted by file name
/// so report ordering is stable.
///
/// # Errors
/// Returns an error if the configured root is not a directory. Failures on
/// individual entries are counted and reported on stderr in verbose mode,
/// never propagated.
pub fn discover(config: &Config) -> Result<Vec<PathBuf>> {
    if !config.root.is_dir() {
        return Err(DepscopeError::NotADirectory(config.root.clone()));
    }

    let walker = WalkDir::new(&config.root)
        .max_depth(1)
        .follow_links(false)
        .into_iter();

    let (mut paths, error_count) = accumulate_walker(walker);
    if error_count > 0 && config.verbose {
        eprintln!("WARN: Encountered {error_count} errors during file walk");
    }

    paths.sort();
    Ok(paths)
}

fn accumulate_walker<I>(walker: I) -> (Vec<PathBuf>, usize)
where
    I: Iterator<Item = walkdir::Result<walkdir::DirEntry>>,
{
    let mut paths = Vec::new();
    let mut errors = 0;
    for item in walker {
        match item {
            Ok(entry) => {
                if entry.file_type().is_file() && is_module_file(entry.path()) {
                    paths.push(entry.path().to_path_buf());
                }
            }
            Err(_) => errors += 1,
        }
    }
    (paths, errors)
}

fn is_module_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(MODULE_EXT)
}

/// Derives the module name from a file path: base name, extension stripped.
#[must_use]
pub fn module_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_name_strips_extension() {
        assert_eq!(module_name(Path::new("web_server.c")), "web_server");
        assert_eq!(module_name(Path::new("/fw/main/config_manager.c")), "config_manager");
    }

    #[test]
    fn test_module_file_filter() {
        assert!(is_module_file(Path::new("main.c")));
        assert!(!is_module_file(Path::new("main.h")));
        assert!(!is_module_file(Path::new("notes.txt")));
        assert!(!is_module_file(Path::new("Makefile")));
    }
}
