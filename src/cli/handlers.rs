// src/cli/handlers.rs
use anyhow::Result;

use crate::cli::args::ScanOptions;
use crate::config::Config;
use crate::engine::Engine;
use crate::reporting;
use crate::types::ScanReport;

/// Handles the default command: the full audit report.
///
/// # Errors
/// Returns error only if JSON serialization fails; the scan itself is
/// best-effort and never errors.
pub fn handle_scan(opts: &ScanOptions) -> Result<()> {
    let report = run_scan(opts);
    if opts.json {
        return reporting::print_json(&report);
    }
    reporting::print_report(&report);
    Ok(())
}

/// Handles the `deps` command.
///
/// # Errors
/// Returns error only if JSON serialization fails.
pub fn handle_deps(opts: &ScanOptions) -> Result<()> {
    let report = run_scan(opts);
    if opts.json {
        return reporting::print_json(&report);
    }
    reporting::print_dependency_report(&report);
    Ok(())
}

/// Handles the `metrics` command.
///
/// # Errors
/// Returns error only if JSON serialization fails.
pub fn handle_metrics(opts: &ScanOptions) -> Result<()> {
    let report = run_scan(opts);
    if opts.json {
        return reporting::print_json(&report);
    }
    reporting::print_metrics_report(&report);
    Ok(())
}

fn run_scan(opts: &ScanOptions) -> ScanReport {
    let mut config = match &opts.dir {
        Some(dir) => Config::for_dir(dir.clone()),
        None => Config::new(),
    };
    config.verbose = opts.verbose;

    Engine::new(config).scan()
}
