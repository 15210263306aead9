//! CLI commands

pub mod init;
pub mod issues;
pub mod summary;

use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;
use yarn_audit_core::{Report, YarnAuditConfig};

use crate::{Cli, OutputFormat};

/// Process exit status of a command run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunExitCode {
    Success,
    IssuesExceedThreshold,
}

/// Read the whole audit output from a file, or stdin when no path is given
pub fn read_input(input: Option<&Path>) -> Result<Vec<u8>> {
    match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read audit output from stdin")?;
            Ok(buf)
        }
    }
}

/// Decode audit output, either as a JSON array or as line-delimited JSON
pub fn load_report(bytes: &[u8], ndjson: bool) -> Result<Report> {
    let report = if ndjson {
        Report::from_ndjson(bytes)?
    } else {
        Report::from_slice(bytes)?
    };
    Ok(report)
}

/// Use `--config` when given, otherwise search from the current directory
pub fn load_config(cli: &Cli) -> Result<YarnAuditConfig> {
    match cli.config {
        Some(ref path) => YarnAuditConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => YarnAuditConfig::find_and_load(Path::new(".")),
    }
}

/// CLI flag wins over the config file; unknown config values fall back to JSON
pub fn resolve_format(cli: &Cli, config: &YarnAuditConfig) -> OutputFormat {
    if let Some(f) = cli.format {
        return f;
    }
    match config.output.format.as_str() {
        "terminal" => OutputFormat::Terminal,
        "sarif" => OutputFormat::Sarif,
        _ => OutputFormat::Json,
    }
}

/// Write rendered output to `--output` or stdout
pub fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
