//! Yarn Audit CLI library — exposed for integration tests

pub mod commands;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "yarn-audit")]
#[command(about = "Turn yarn audit output into normalized vulnerability issues", long_about = None)]
#[command(version = yarn_audit_core::VERSION)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input is line-delimited JSON, as printed by `yarn audit --json`
    #[arg(long, global = true)]
    pub ndjson: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Severity threshold for non-zero exit: info, low, medium, high, critical, never
    #[arg(long, global = true)]
    pub fail_on: Option<String>,

    /// Config file (default: nearest .yarn-audit.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert advisories into issues (default command)
    Issues {
        /// Audit output file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Show the audit tool's own summary and suggested actions
    Summary {
        /// Audit output file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Initialize .yarn-audit.toml configuration
    Init {
        /// Path to initialize (default: current directory)
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Sarif,
}
