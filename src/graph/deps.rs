// src/graph/deps.rs
//! The include-dependency graph structure and query interface.
//!
//! Built once per scan from extracted include lists, then queried
//! read-only. Edge targets are taken as written: a target that never shows
//! up as a module of its own simply has no entry, and lookups on it return
//! nothing.

use std::collections::HashMap;

/// Directed graph of "module A includes module B's declarations" edges.
pub struct DependencyGraph {
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Builds the graph from per-module include target lists.
    ///
    /// Modules with no local includes are omitted entirely rather than
    /// stored with an empty edge set; queries treat both the same way.
    /// Repeated targets collapse to their first occurrence, so each edge
    /// list stays an ordered set. Self-references are kept as written.
    #[must_use]
    pub fn build<I>(modules: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<String>)>,
    {
        let mut edges = HashMap::new();
        for (name, targets) in modules {
            let deduped = dedup_preserving_order(targets);
            if !deduped.is_empty() {
                edges.insert(name, deduped);
            }
        }
        Self { edges }
    }

    /// Direct dependencies of `module`, in first-seen include order.
    /// Empty for modules absent from the graph.
    #[must_use]
    pub fn direct_dependencies(&self, module: &str) -> &[String] {
        self.edges.get(module).map_or(&[], Vec::as_slice)
    }

    /// Whether `module` has at least one recorded edge.
    #[must_use]
    pub fn contains(&self, module: &str) -> bool {
        self.edges.contains_key(module)
    }

    /// Number of modules with at least one recorded edge.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

fn dedup_preserving_order(targets: Vec<String>) -> Vec<String> {
    let mut seen = Vec::with_capacity(targets.len());
    for target in targets {
        if !seen.contains(&target) {
            seen.push(target);
        }
    }
    seen
}
