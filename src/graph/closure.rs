// src/graph/closure.rs
//! Depth-bounded, cycle-safe reachability over the dependency graph.
//!
//! One traversal per start module, one visited set per traversal. The
//! visited set is seeded with the start, so a cycle back to it is skipped
//! and a module never appears in its own closure. The depth bound caps the
//! longest unvisited chain; together the two guarantee termination on any
//! graph.

use std::collections::{BTreeSet, HashSet};

use super::deps::DependencyGraph;

/// Maximum include indirection explored per start module.
pub const DEPTH_LIMIT: usize = 5;

/// Direct / transitive / total dependency counts for one module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyCounts {
    pub direct: usize,
    pub transitive: usize,
    pub total: usize,
}

struct TraversalState {
    visited: HashSet<String>,
    reached: BTreeSet<String>,
}

/// Computes every module reachable from `start` via one or more edges,
/// excluding `start` itself, under the default depth limit.
#[must_use]
pub fn transitive_closure(graph: &DependencyGraph, start: &str) -> BTreeSet<String> {
    bounded_closure(graph, start, DEPTH_LIMIT)
}

/// Closure computation with an explicit depth limit.
///
/// A node whose expansion depth exceeds the limit keeps its place in the
/// result but its own dependencies are not explored, so very deep chains
/// are silently truncated. Completeness past the limit is explicitly not
/// guaranteed.
#[must_use]
pub fn bounded_closure(graph: &DependencyGraph, start: &str, limit: usize) -> BTreeSet<String> {
    let mut state = TraversalState {
        visited: HashSet::from([start.to_string()]),
        reached: BTreeSet::new(),
    };
    expand(graph, start, 0, limit, &mut state);
    state.reached
}

fn expand(
    graph: &DependencyGraph,
    module: &str,
    depth: usize,
    limit: usize,
    state: &mut TraversalState,
) {
    if depth > limit {
        return;
    }

    for dep in graph.direct_dependencies(module) {
        // Already discovered earlier in this traversal (or the start
        // itself): the edge to it is recorded, but it is not re-expanded.
        if state.visited.contains(dep) {
            continue;
        }
        state.visited.insert(dep.clone());
        state.reached.insert(dep.clone());
        expand(graph, dep, depth + 1, limit, state);
    }
}

/// Derives the externally reported counts for `module`.
///
/// `transitive` is the closure minus the direct dependency set, so it
/// stays at zero (never negative) when the graph has no structure deeper
/// than one hop, and also in the self-include corner where a direct
/// dependency is not part of the closure.
#[must_use]
pub fn dependency_counts(graph: &DependencyGraph, module: &str, limit: usize) -> DependencyCounts {
    let direct = graph.direct_dependencies(module);
    let reached = bounded_closure(graph, module, limit);
    let transitive = reached
        .iter()
        .filter(|name| !direct.contains(name))
        .count();

    DependencyCounts {
        direct: direct.len(),
        transitive,
        total: direct.len() + transitive,
    }
}
