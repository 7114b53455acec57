// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "depscope",
    version,
    about = "C module dependency and complexity auditor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory to audit (defaults to the current directory)
    #[arg(long, short, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Emit the report as JSON instead of formatted text
    #[arg(long, global = true)]
    pub json: bool,

    /// Surface walk/read warnings
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Include graph and dependency complexity only
    Deps,
    /// Line and function counts only
    Metrics,
}

/// Options shared by every command (used by handlers).
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub dir: Option<PathBuf>,
    pub json: bool,
    pub verbose: bool,
}

impl From<&Cli> for ScanOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            dir: cli.dir.clone(),
            json: cli.json,
            verbose: cli.verbose,
        }
    }
}
