//! JSON output formatting

use serde::Serialize;
use yarn_audit_core::{AuditAction, AuditSummary, Issue, IssueSummary};

#[derive(Debug, Serialize)]
pub struct JsonOutput {
    pub issues: Vec<Issue>,
    pub summary: IssueSummary,
}

#[derive(Debug, Serialize)]
pub struct JsonAuditSummary<'a> {
    pub summaries: &'a [AuditSummary],
    pub actions: &'a [AuditAction],
}

/// Serialize with a trailing newline, pretty-printed when requested
pub fn to_string<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    let mut out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    out.push('\n');
    Ok(out)
}
