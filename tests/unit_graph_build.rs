// tests/unit_graph_build.rs
//! Tests for dependency graph construction.

use depscope_core::graph::DependencyGraph;

fn build(modules: &[(&str, &[&str])]) -> DependencyGraph {
    DependencyGraph::build(modules.iter().map(|(name, deps)| {
        (
            (*name).to_string(),
            deps.iter().map(|d| (*d).to_string()).collect(),
        )
    }))
}

#[test]
fn test_module_without_includes_omitted() {
    let g = build(&[("web_server", &["config_manager"]), ("session_auth", &[])]);
    assert_eq!(g.len(), 1);
    assert!(g.contains("web_server"));
    assert!(!g.contains("session_auth"));
}

#[test]
fn test_absent_and_empty_queries_equivalent() {
    let g = build(&[("main", &[])]);
    // Never stored and stored-with-no-edges answer the same way.
    assert!(g.direct_dependencies("main").is_empty());
    assert!(g.direct_dependencies("never_scanned").is_empty());
}

#[test]
fn test_direct_dependencies_keep_include_order() {
    let g = build(&[("main", &["zeta", "alpha", "mid"])]);
    assert_eq!(g.direct_dependencies("main"), ["zeta", "alpha", "mid"]);
}

#[test]
fn test_duplicate_targets_collapse_to_first() {
    let g = build(&[("main", &["util", "log", "util"])]);
    assert_eq!(g.direct_dependencies("main"), ["util", "log"]);
}

#[test]
fn test_self_include_recorded_as_written() {
    let g = build(&[("recursive", &["recursive"])]);
    assert_eq!(g.direct_dependencies("recursive"), ["recursive"]);
}

#[test]
fn test_dangling_target_not_a_key() {
    let g = build(&[("main", &["nonexistent_module"])]);
    assert_eq!(g.direct_dependencies("main"), ["nonexistent_module"]);
    assert!(!g.contains("nonexistent_module"));
    assert!(g.direct_dependencies("nonexistent_module").is_empty());
}

#[test]
fn test_empty_input() {
    let g = build(&[]);
    assert!(g.is_empty());
    assert_eq!(g.len(), 0);
}
