// src/engine.rs
//! Scan orchestration: discovery, extraction, graph build, closure.
//!
//! One sequential pass. Each file is read in full and released before the
//! next; the graph is built once, then queried read-only for every module.

use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::discovery;
use crate::error::{DepscopeError, Result};
use crate::graph::{closure, includes, DependencyGraph};
use crate::metrics;
use crate::types::{ComplexityTier, ModuleReport, ScanReport};

/// The audit engine. Ties the pipeline stages into a `ScanReport`.
pub struct Engine {
    config: Config,
}

impl Engine {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the full pipeline over the configured directory.
    ///
    /// Best-effort: an unreadable directory yields an empty report, an
    /// unreadable file yields a zero-metric module with no edges. Nothing
    /// here fails the run.
    #[must_use]
    pub fn scan(&self) -> ScanReport {
        let start = std::time::Instant::now();

        let files = discovery::discover(&self.config).unwrap_or_else(|e| {
            if self.config.verbose {
                eprintln!("WARN: {e}");
            }
            Vec::new()
        });

        let sources = self.read_sources(&files);

        let graph = DependencyGraph::build(
            sources
                .iter()
                .map(|(name, text)| (name.clone(), includes::extract(text))),
        );

        let mut modules: Vec<ModuleReport> = sources
            .iter()
            .map(|(name, text)| self.report_module(name, text, &graph))
            .collect();
        modules.sort_by(|a, b| a.name.cmp(&b.name));

        ScanReport {
            total_lines: modules.iter().map(|m| m.lines).sum(),
            total_functions: modules.iter().map(|m| m.functions).sum(),
            modules,
            duration_ms: start.elapsed().as_millis(),
        }
    }

    /// Reads each module file once. A file that cannot be read still gets
    /// an entry, with empty text, so it shows up as zero lines / zero
    /// functions / no edges.
    fn read_sources(&self, files: &[std::path::PathBuf]) -> Vec<(String, String)> {
        files
            .iter()
            .map(|path| {
                let name = discovery::module_name(path);
                let text = read_module(path).unwrap_or_else(|e| {
                    if self.config.verbose {
                        eprintln!("WARN: {e}");
                    }
                    String::new()
                });
                (name, text)
            })
            .collect()
    }

    fn report_module(&self, name: &str, text: &str, graph: &DependencyGraph) -> ModuleReport {
        let file_metrics = metrics::measure(text);
        let counts = closure::dependency_counts(graph, name, self.config.depth_limit);

        ModuleReport {
            name: name.to_string(),
            lines: file_metrics.lines,
            functions: file_metrics.functions,
            includes: graph.direct_dependencies(name).to_vec(),
            direct: counts.direct,
            transitive: counts.transitive,
            total: counts.total,
            tier: ComplexityTier::from_lines(file_metrics.lines),
        }
    }
}

/// Reads a module file tolerantly: raw bytes, lossily decoded, so stray
/// non-UTF-8 in string literals does not sink the scan.
fn read_module(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| DepscopeError::io(source, path))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
