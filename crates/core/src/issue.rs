//! Normalized issue types shared with the downstream scanning pipeline

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Ordinal severity of an issue, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    #[serde(rename = "SEVERITY_INFO")]
    Info,
    #[serde(rename = "SEVERITY_LOW")]
    Low,
    #[serde(rename = "SEVERITY_MEDIUM")]
    Medium,
    #[serde(rename = "SEVERITY_HIGH")]
    High,
    #[serde(rename = "SEVERITY_CRITICAL")]
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Info,
        Severity::Low,
        Severity::Medium,
        Severity::High,
        Severity::Critical,
    ];
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Low => write!(f, "low"),
            Severity::Medium => write!(f, "medium"),
            Severity::High => write!(f, "high"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "info" => Ok(Severity::Info),
            "low" => Ok(Severity::Low),
            "medium" | "moderate" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// How sure the producer is that the issue is real
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Confidence {
    #[serde(rename = "CONFIDENCE_INFO")]
    Info,
    #[serde(rename = "CONFIDENCE_LOW")]
    Low,
    #[serde(rename = "CONFIDENCE_MEDIUM")]
    Medium,
    #[serde(rename = "CONFIDENCE_HIGH")]
    High,
    #[serde(rename = "CONFIDENCE_CRITICAL")]
    Critical,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::Info => write!(f, "info"),
            Confidence::Low => write!(f, "low"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::High => write!(f, "high"),
            Confidence::Critical => write!(f, "critical"),
        }
    }
}

/// A single security finding, independent of the tool that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// What is affected (e.g. "webpack>chokidar: braces")
    pub target: String,

    /// Classification, here the comma-joined CWE list
    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,

    pub severity: Severity,

    pub confidence: Confidence,

    pub description: String,

    /// Comma-joined CVE identifiers
    pub cve: String,
}

/// Per-severity issue counts for one producer run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub info: usize,
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl IssueSummary {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let mut summary = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Info => summary.info += 1,
                Severity::Low => summary.low += 1,
                Severity::Medium => summary.medium += 1,
                Severity::High => summary.high += 1,
                Severity::Critical => summary.critical += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> usize {
        self.info + self.low + self.medium + self.high + self.critical
    }

    pub fn count(&self, severity: Severity) -> usize {
        match severity {
            Severity::Info => self.info,
            Severity::Low => self.low,
            Severity::Medium => self.medium,
            Severity::High => self.high,
            Severity::Critical => self.critical,
        }
    }

    /// Check whether issues reach the configured severity threshold.
    ///
    /// - a severity name (`"low"`, `"high"`, ...) → fail if any issue is at or above it
    /// - `"never"` or anything unrecognised → always pass
    pub fn exceeds_threshold(&self, fail_on: &str) -> bool {
        match fail_on.parse::<Severity>() {
            Ok(threshold) => Severity::ALL
                .iter()
                .filter(|s| **s >= threshold)
                .any(|s| self.count(*s) > 0),
            Err(_) => false,
        }
    }
}
