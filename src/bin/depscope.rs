// src/bin/depscope.rs
use std::process;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use depscope_core::cli::args::{Cli, Commands, ScanOptions};
use depscope_core::cli::handlers;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = ScanOptions::from(&cli);

    match &cli.command {
        Some(Commands::Deps) => handlers::handle_deps(&opts),
        Some(Commands::Metrics) => handlers::handle_metrics(&opts),
        None => handlers::handle_scan(&opts),
    }
}
