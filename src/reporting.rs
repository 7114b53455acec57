// src/reporting.rs
//! Console output formatting for scan results.
//!
//! Four sections: the include listing, the dependency-complexity table,
//! the file-metrics summary, and the oversized-file callout. Sections that
//! have nothing to say are skipped.

use crate::types::{ComplexityTier, ModuleReport, ScanReport, OVERSIZE_LINES};
use anyhow::Result;
use colored::{ColoredString, Colorize};

/// Prints the full report to stdout.
pub fn print_report(report: &ScanReport) {
    if report.modules.is_empty() {
        println!("{}", "No modules found.".dimmed());
        return;
    }

    print_dependencies(report);
    print_complexity(report);
    print_metrics_summary(report);
    print_oversized(report);
    print_footer(report);
}

/// Prints only the dependency sections (include listing + complexity).
pub fn print_dependency_report(report: &ScanReport) {
    if report.modules.is_empty() {
        println!("{}", "No modules found.".dimmed());
        return;
    }
    print_dependencies(report);
    print_complexity(report);
    print_footer(report);
}

/// Prints only the file-metrics sections.
pub fn print_metrics_report(report: &ScanReport) {
    if report.modules.is_empty() {
        println!("{}", "No modules found.".dimmed());
        return;
    }
    print_metrics_summary(report);
    print_oversized(report);
    print_footer(report);
}

fn print_dependencies(report: &ScanReport) {
    print_header("INTERNAL DEPENDENCIES (module includes)");

    for module in linked_modules(report) {
        println!("\n{} includes:", format!("{:<25}", module.name).bold());
        let mut targets = module.includes.clone();
        targets.sort();
        for target in targets {
            println!("  -> {target}");
        }
    }
}

fn print_complexity(report: &ScanReport) {
    print_header("DEPENDENCY COMPLEXITY");

    for module in linked_modules(report) {
        println!(
            "{:<25} {:>2} direct, {:>2} transitive (total: {})",
            module.name,
            module.direct,
            module.transitive,
            format_count(module.total),
        );
    }
}

/// Modules that carry at least one local include; modules without edges
/// are left out of the dependency sections entirely.
fn linked_modules(report: &ScanReport) -> impl Iterator<Item = &ModuleReport> {
    report.modules.iter().filter(|m| !m.includes.is_empty())
}

fn print_metrics_summary(report: &ScanReport) {
    print_header("FILE METRICS SUMMARY");
    println!(
        "{}",
        format!(
            "{:<25} {:>6} {:>15} {:>15}",
            "File", "Lines", "Est. Functions", "Complexity"
        )
        .bold()
    );

    for module in report.by_lines_desc() {
        println!(
            "{:<25} {:>6} {:>15} {}",
            module.name,
            module.lines,
            module.functions,
            tier_cell(module.tier),
        );
    }

    println!(
        "{} {:>6} {:>15}",
        format!("{:<25}", "TOTAL").bold(),
        report.total_lines,
        report.total_functions,
    );
}

fn print_oversized(report: &ScanReport) {
    let oversized = report.oversized();
    if oversized.is_empty() {
        return;
    }

    print_header(&format!("OVERLY COMPLEX FILES (>{OVERSIZE_LINES} LOC)"));
    for module in oversized {
        println!(
            "{} {:>5} lines, {:>3} functions, ~{:.0} LOC/function",
            format!("{:<25}", module.name).red(),
            module.lines,
            module.functions,
            module.avg_function_length(),
        );
    }
}

fn print_footer(report: &ScanReport) {
    println!(
        "\n{} {} modules scanned in {}ms",
        "DONE".green().bold(),
        report.module_count(),
        report.duration_ms,
    );
}

fn print_header(title: &str) {
    println!("\n{}", title.cyan().bold());
    println!("{}", "=".repeat(70).dimmed());
}

fn format_count(n: usize) -> ColoredString {
    let cell = format!("{n:>2}");
    if n == 0 {
        cell.green()
    } else {
        cell.normal()
    }
}

fn tier_cell(tier: ComplexityTier) -> ColoredString {
    let cell = format!("{:>15}", tier.label());
    match tier {
        ComplexityTier::VeryHigh => cell.red().bold(),
        ComplexityTier::High => cell.red(),
        ComplexityTier::Moderate => cell.yellow(),
        ComplexityTier::Low => cell.green(),
    }
}

/// Prints a serializable report as pretty JSON.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json<T: serde::Serialize>(data: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    println!("{json}");
    Ok(())
}
