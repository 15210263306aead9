//! Yarn Audit CLI - yarn audit producer

use anyhow::Result;
use clap::Parser;
use yarn_audit_cli::commands::{self, RunExitCode};
use yarn_audit_cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let code = match cli.command {
        Some(Commands::Issues { ref input }) => commands::issues::run(input.as_deref(), &cli)?,
        Some(Commands::Summary { ref input }) => commands::summary::run(input.as_deref(), &cli)?,
        Some(Commands::Init { ref path }) => {
            commands::init::run(path.as_deref())?;
            RunExitCode::Success
        }
        None => {
            // Default command converts stdin
            commands::issues::run(None, &cli)?
        }
    };

    if code == RunExitCode::IssuesExceedThreshold {
        std::process::exit(1);
    }

    Ok(())
}
