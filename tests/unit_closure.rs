// tests/unit_closure.rs
//! Reachability properties of the transitive closure engine.

use depscope_core::graph::{bounded_closure, dependency_counts, transitive_closure, DependencyGraph};

fn build(modules: &[(&str, &[&str])]) -> DependencyGraph {
    DependencyGraph::build(modules.iter().map(|(name, deps)| {
        (
            (*name).to_string(),
            deps.iter().map(|d| (*d).to_string()).collect(),
        )
    }))
}

#[test]
fn test_no_includes_empty_closure() {
    let g = build(&[("web_server", &["config_manager"])]);
    assert!(transitive_closure(&g, "session_auth").is_empty());
    let counts = dependency_counts(&g, "session_auth", 5);
    assert_eq!((counts.direct, counts.transitive, counts.total), (0, 0, 0));
}

#[test]
fn test_direct_deps_subset_of_closure_start_excluded() {
    let g = build(&[
        ("web_server", &["config_manager", "session_auth"]),
        ("config_manager", &["file_manager"]),
    ]);
    let closure = transitive_closure(&g, "web_server");
    for dep in g.direct_dependencies("web_server") {
        assert!(closure.contains(dep), "direct dep {dep} missing from closure");
    }
    assert!(!closure.contains("web_server"));
}

#[test]
fn test_idempotent_over_repeated_calls() {
    let g = build(&[
        ("a", &["b", "c"]),
        ("b", &["c", "a"]),
        ("c", &["a"]),
    ]);
    let first = transitive_closure(&g, "a");
    let second = transitive_closure(&g, "a");
    assert_eq!(first, second);
}

#[test]
fn test_two_node_cycle_reaches_only_the_other() {
    let g = build(&[("a", &["b"]), ("b", &["a"])]);
    let closure = transitive_closure(&g, "a");
    assert_eq!(closure.into_iter().collect::<Vec<_>>(), ["b"]);
}

#[test]
fn test_ten_chain_truncated_at_bound() {
    let modules: Vec<(String, Vec<String>)> = (0..10)
        .map(|i| (format!("m{i}"), vec![format!("m{}", i + 1)]))
        .collect();
    let g = DependencyGraph::build(modules);

    let closure = bounded_closure(&g, "m0", 5);
    // m6 is discovered while expanding m5 at the bound and stays in the
    // result; m7 and beyond are never reached.
    assert_eq!(closure.len(), 6);
    assert!(closure.contains("m6"));
    assert!(!closure.contains("m7"));
}

#[test]
fn test_transitive_count_zero_when_graph_is_flat() {
    let g = build(&[("main", &["util", "log"])]);
    let counts = dependency_counts(&g, "main", 5);
    assert_eq!(counts.direct, 2);
    assert_eq!(counts.transitive, 0);
    assert_eq!(counts.total, 2);
}

#[test]
fn test_transitive_count_nonnegative_with_self_include() {
    // "recursive" names itself; the closure skips the start, so the direct
    // set is not a subset of the closure here. Set difference keeps the
    // transitive count at zero rather than underflowing.
    let g = build(&[("recursive", &["recursive"])]);
    let counts = dependency_counts(&g, "recursive", 5);
    assert_eq!(counts.direct, 1);
    assert_eq!(counts.transitive, 0);
    assert_eq!(counts.total, 1);
}

#[test]
fn test_firmware_scenario() {
    let g = build(&[
        ("web_server", &["config_manager", "session_auth"]),
        ("config_manager", &["file_manager"]),
        ("session_auth", &[]),
    ]);

    assert_eq!(
        g.direct_dependencies("web_server"),
        ["config_manager", "session_auth"]
    );

    let closure = transitive_closure(&g, "web_server");
    assert_eq!(closure.len(), 3);
    assert!(closure.contains("config_manager"));
    assert!(closure.contains("session_auth"));
    assert!(closure.contains("file_manager"));

    let counts = dependency_counts(&g, "web_server", 5);
    assert_eq!((counts.direct, counts.transitive, counts.total), (2, 1, 3));
}

#[test]
fn test_dangling_include_scenario() {
    let g = build(&[("main", &["nonexistent_module"])]);
    let closure = transitive_closure(&g, "main");
    assert_eq!(closure.len(), 1);
    assert!(closure.contains("nonexistent_module"));

    let counts = dependency_counts(&g, "main", 5);
    assert_eq!(counts.total, 1);
    assert!(g.direct_dependencies("nonexistent_module").is_empty());
}

#[test]
fn test_shared_visited_set_counts_once() {
    // Two paths to file_manager; it contributes once.
    let g = build(&[
        ("web_server", &["config_manager", "log_manager"]),
        ("config_manager", &["file_manager"]),
        ("log_manager", &["file_manager"]),
    ]);
    let counts = dependency_counts(&g, "web_server", 5);
    assert_eq!((counts.direct, counts.transitive, counts.total), (2, 1, 3));
}
