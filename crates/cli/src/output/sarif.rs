//! SARIF 2.1.0 output formatting
//!
//! Produces Static Analysis Results Interchange Format for GitHub Code Scanning
//! and other SARIF consumers. Dependency advisories have no source line, so
//! every result points at the project manifest.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use yarn_audit_core::{Issue, Severity};

/// Rule id used for issues without a CWE classification
pub const FALLBACK_RULE_ID: &str = "yarn-audit";

/// Artifact every result is reported against
pub const MANIFEST_URI: &str = "package.json";

// ── SARIF 2.1.0 structs ─────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLog {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub version: String,
    pub runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifRun {
    pub tool: SarifTool,
    pub results: Vec<SarifResult>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifTool {
    pub driver: SarifDriver,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifDriver {
    pub name: String,
    pub semantic_version: String,
    pub rules: Vec<SarifReportingDescriptor>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifReportingDescriptor {
    pub id: String,
    pub short_description: SarifMessage,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifResult {
    pub rule_id: String,
    pub rule_index: usize,
    pub level: String,
    pub message: SarifMessage,
    pub locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifLocation {
    pub physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifPhysicalLocation {
    pub artifact_location: SarifArtifactLocation,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifArtifactLocation {
    pub uri: String,
    pub uri_base_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SarifMessage {
    pub text: String,
}

// ── Rule helpers ─────────────────────────────────────────────────

fn severity_to_level(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical | Severity::High => "error",
        Severity::Medium => "warning",
        Severity::Low | Severity::Info => "note",
    }
}

/// Rule id of an issue: its first CWE, or [`FALLBACK_RULE_ID`].
fn rule_id(issue: &Issue) -> &str {
    issue
        .kind
        .split(", ")
        .map(str::trim)
        .find(|s| !s.is_empty())
        .unwrap_or(FALLBACK_RULE_ID)
}

fn rule_description(id: &str) -> String {
    if id == FALLBACK_RULE_ID {
        "Vulnerable dependency".to_string()
    } else {
        format!("Vulnerable dependency ({})", id)
    }
}

fn result_message(issue: &Issue) -> String {
    if issue.cve.is_empty() {
        format!("{} in {}", issue.title, issue.target)
    } else {
        format!("{} in {} [{}]", issue.title, issue.target, issue.cve)
    }
}

// ── Public API ───────────────────────────────────────────────────

/// Build a complete SARIF 2.1.0 log from a list of issues.
pub fn build_sarif_log(issues: &[Issue]) -> SarifLog {
    // 1. Collect unique rule ids in stable order
    let rule_ids: Vec<&str> = issues
        .iter()
        .map(rule_id)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // 2. Build rules array
    let rules: Vec<SarifReportingDescriptor> = rule_ids
        .iter()
        .map(|id| SarifReportingDescriptor {
            id: id.to_string(),
            short_description: SarifMessage {
                text: rule_description(id),
            },
        })
        .collect();

    // Build id → index lookup
    let rule_index: BTreeMap<&str, usize> = rule_ids
        .iter()
        .enumerate()
        .map(|(i, id)| (*id, i))
        .collect();

    // 3. Build results array
    let results: Vec<SarifResult> = issues
        .iter()
        .map(|issue| {
            let id = rule_id(issue);
            SarifResult {
                rule_id: id.to_string(),
                rule_index: rule_index.get(id).copied().unwrap_or(0),
                level: severity_to_level(issue.severity).to_string(),
                message: SarifMessage {
                    text: result_message(issue),
                },
                locations: vec![SarifLocation {
                    physical_location: SarifPhysicalLocation {
                        artifact_location: SarifArtifactLocation {
                            uri: MANIFEST_URI.to_string(),
                            uri_base_id: "%SRCROOT%".to_string(),
                        },
                    },
                }],
            }
        })
        .collect();

    // 4. Assemble
    SarifLog {
        schema: "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/main/sarif-2.1/schema/sarif-schema-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "yarn-audit".to_string(),
                    semantic_version: yarn_audit_core::VERSION.to_string(),
                    rules,
                },
            },
            results,
        }],
    }
}
