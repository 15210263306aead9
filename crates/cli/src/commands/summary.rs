//! Summary command — the audit tool's own counts and suggested remediations

use anyhow::Result;
use std::path::Path;

use super::{load_config, load_report, read_input, resolve_format, write_output, RunExitCode};
use crate::output;
use crate::OutputFormat;

pub fn run(input: Option<&Path>, cli: &crate::Cli) -> Result<RunExitCode> {
    let config = load_config(cli)?;
    let format = resolve_format(cli, &config);

    let bytes = read_input(input)?;
    let report = load_report(&bytes, cli.ndjson)?;

    if cli.output.is_some() {
        colored::control::set_override(false);
    }
    let rendered = match format {
        OutputFormat::Terminal => output::terminal::format_audit_summary(&report),
        // summary records have no SARIF form
        OutputFormat::Json | OutputFormat::Sarif => {
            let out = output::json::JsonAuditSummary {
                summaries: &report.summaries,
                actions: &report.actions,
            };
            output::json::to_string(&out, config.output.pretty)?
        }
    };
    write_output(cli.output.as_deref(), &rendered)?;

    Ok(RunExitCode::Success)
}
