//! Terminal output formatting

use colored::Colorize;
use std::fmt::Write;
use yarn_audit_core::{Issue, IssueSummary, Report, Severity};

pub fn severity_icon(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "🔥",
        Severity::High => "❌",
        Severity::Medium => "⚠️ ",
        Severity::Low => "ℹ️ ",
        Severity::Info => "  ",
    }
}

pub fn format_issue(issue: &Issue) -> String {
    let mut line = format!(
        "  {} [{}] {} — {}",
        severity_icon(issue.severity),
        issue.severity,
        issue.title,
        issue.target
    );
    if !issue.cve.is_empty() {
        line.push_str(&format!(" ({})", issue.cve));
    }
    line
}

pub fn format_issues(issues: &[Issue], summary: &IssueSummary) -> String {
    let mut out = String::new();

    for issue in issues {
        let _ = writeln!(out, "{}", format_issue(issue));
    }
    if !issues.is_empty() {
        out.push('\n');
    }

    let _ = writeln!(out, "  {}", "\u{2500}".repeat(60).dimmed());
    let _ = writeln!(
        out,
        "  {} \u{00b7} {} \u{00b7} {} \u{00b7} {} \u{00b7} {}",
        format!("{} critical", summary.critical).red().bold(),
        format!("{} high", summary.high).red(),
        format!("{} medium", summary.medium).yellow(),
        format!("{} low", summary.low).blue(),
        format!("{} info", summary.info).dimmed()
    );
    out
}

/// Render the audit tool's summary records and remediation actions
pub fn format_audit_summary(report: &Report) -> String {
    let mut out = String::new();

    for summary in &report.summaries {
        let v = &summary.vulnerabilities;
        let _ = writeln!(
            out,
            "  {} vulnerabilities: {} critical \u{00b7} {} high \u{00b7} {} moderate \u{00b7} {} low \u{00b7} {} info",
            v.total().to_string().bold(),
            v.critical,
            v.high,
            v.moderate,
            v.low,
            v.info
        );
        let _ = writeln!(
            out,
            "  {} dependencies ({} prod \u{00b7} {} dev \u{00b7} {} optional)",
            summary.total_dependencies,
            summary.dependencies,
            summary.dev_dependencies,
            summary.optional_dependencies
        );
    }

    if !report.actions.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "  {}", "Suggested actions:".bold());
        for action in &report.actions {
            let marker = if action.is_breaking {
                "breaking".red().to_string()
            } else {
                "safe".green().to_string()
            };
            let _ = writeln!(
                out,
                "    {} [{}] resolves {} advisory path(s)",
                action.cmd,
                marker,
                action.action.resolves.len()
            );
        }
    }

    if report.summaries.is_empty() && report.actions.is_empty() {
        let _ = writeln!(out, "  {}", "No summary records found.".dimmed());
    }
    out
}
