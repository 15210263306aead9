//! Main issues command — wires input, report decoding, filtering and output together

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use yarn_audit_core::{as_issues, AuditAdvisory, Issue, IssueSummary, YarnAuditConfig};

use super::{load_config, load_report, read_input, resolve_format, write_output, RunExitCode};
use crate::output;
use crate::progress::Step;
use crate::OutputFormat;

pub fn run(input: Option<&Path>, cli: &crate::Cli) -> Result<RunExitCode> {
    eprintln!(
        "{}",
        format!(
            "  yarn-audit v{} — converting audit output",
            yarn_audit_core::VERSION
        )
        .bold()
    );

    // ── 1. Config ────────────────────────────────────────────────
    let config = load_config(cli)?;
    let format = resolve_format(cli, &config);

    // ── 2. Read ──────────────────────────────────────────────────
    let step = Step::new("Reading audit output");
    let bytes = read_input(input).inspect_err(|e| step.fail(e))?;
    step.finish(&format!("{} bytes", bytes.len()));

    // ── 3. Decode ────────────────────────────────────────────────
    let step = Step::new("Decoding records");
    let report = load_report(&bytes, cli.ndjson).inspect_err(|e| step.fail(e))?;
    step.finish(&format!(
        "{} advisories, {} actions, {} summaries",
        report.advisories.len(),
        report.actions.len(),
        report.summaries.len()
    ));

    // ── 4. Project ───────────────────────────────────────────────
    let step = Step::new("Projecting issues");
    let (kept, ignored) = filter_advisories(&report.advisories, &config);
    if ignored > 0 {
        step.warn(format!("{} advisory(ies) ignored by config", ignored));
    }
    let issues = as_issues(&kept);
    let summary = IssueSummary::from_issues(&issues);
    if issues.is_empty() {
        step.skip("No advisories to convert");
    } else {
        step.finish(&format!("{} issue(s)", issues.len()));
    }

    // ── 5. Output ────────────────────────────────────────────────
    if cli.output.is_some() {
        colored::control::set_override(false);
    }
    let rendered = render(format, &issues, &summary, &config)?;
    write_output(cli.output.as_deref(), &rendered)?;

    let fail_on = cli.fail_on.as_deref().unwrap_or(&config.general.fail_on);
    if summary.exceeds_threshold(fail_on) {
        eprintln!(
            "  {}",
            format!("issues at or above '{}' found", fail_on).red()
        );
        Ok(RunExitCode::IssuesExceedThreshold)
    } else {
        Ok(RunExitCode::Success)
    }
}

// ── Helpers ──────────────────────────────────────────────────────

/// Drop advisories suppressed by the config; returns the rest and the number dropped
pub fn filter_advisories(
    advisories: &[AuditAdvisory],
    config: &YarnAuditConfig,
) -> (Vec<AuditAdvisory>, usize) {
    let kept: Vec<AuditAdvisory> = advisories
        .iter()
        .filter(|a| !config.ignore.is_ignored(a))
        .cloned()
        .collect();
    let ignored = advisories.len() - kept.len();
    (kept, ignored)
}

pub fn render(
    format: OutputFormat,
    issues: &[Issue],
    summary: &IssueSummary,
    config: &YarnAuditConfig,
) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json => {
            let out = output::json::JsonOutput {
                issues: issues.to_vec(),
                summary: summary.clone(),
            };
            output::json::to_string(&out, config.output.pretty)?
        }
        OutputFormat::Sarif => {
            let log = output::sarif::build_sarif_log(issues);
            output::json::to_string(&log, config.output.pretty)?
        }
        OutputFormat::Terminal => output::terminal::format_issues(issues, summary),
    };
    Ok(rendered)
}
