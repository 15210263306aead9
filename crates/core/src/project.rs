//! Projection of advisory records into normalized issues

use crate::issue::{Confidence, Issue, Severity};
use crate::record::{Advisory, AuditAdvisory};

/// Confidence given to every advisory-derived issue: the audit tool is
/// authoritative for the presence of a published advisory.
pub const ADVISORY_CONFIDENCE: Confidence = Confidence::High;

/// Map the audit tool's severity vocabulary onto the issue scale.
///
/// Anything outside `low`, `moderate`, `high`, `critical` (including the
/// tool's own `info` and empty strings) maps to [`Severity::Info`].
pub fn map_severity(severity: &str) -> Severity {
    match severity {
        "low" => Severity::Low,
        "moderate" => Severity::Medium,
        "high" => Severity::High,
        "critical" => Severity::Critical,
        _ => Severity::Info,
    }
}

impl Advisory {
    /// Human-readable issue description
    pub fn description(&self) -> String {
        format!(
            "Vulnerable Versions: {}\nRecommendation: {}\nOverview: {}\nReferences:\n{}\nAdvisory URL: {}\n",
            self.vulnerable_versions, self.recommendation, self.overview, self.references, self.url,
        )
    }
}

impl AuditAdvisory {
    /// Target identifier: `"<path>: <module>"`, or the module alone when the
    /// resolution has no dependency path
    pub fn target(&self) -> String {
        if self.resolution.path.is_empty() {
            self.advisory.module_name.clone()
        } else {
            format!("{}: {}", self.resolution.path, self.advisory.module_name)
        }
    }

    pub fn as_issue(&self) -> Issue {
        Issue {
            target: self.target(),
            kind: self.advisory.cwe.join(", "),
            title: self.advisory.title.clone(),
            severity: map_severity(&self.advisory.severity),
            confidence: ADVISORY_CONFIDENCE,
            description: self.advisory.description(),
            cve: self.advisory.cves.join(", "),
        }
    }
}

/// Project advisories one-to-one, preserving input order
pub fn as_issues(advisories: &[AuditAdvisory]) -> Vec<Issue> {
    advisories.iter().map(AuditAdvisory::as_issue).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_case_sensitive() {
        assert_eq!(map_severity("High"), Severity::Info);
    }

    #[test]
    fn description_keeps_line_order() {
        let advisory = Advisory {
            vulnerable_versions: "<1.2.6".to_string(),
            recommendation: "Upgrade to version 1.2.6 or later".to_string(),
            overview: "Prototype pollution".to_string(),
            references: "- https://example.test/ref".to_string(),
            url: "https://example.test/advisories/1179".to_string(),
            ..Default::default()
        };
        let description = advisory.description();
        let lines: Vec<&str> = description.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Vulnerable Versions: <1.2.6",
                "Recommendation: Upgrade to version 1.2.6 or later",
                "Overview: Prototype pollution",
                "References:",
                "- https://example.test/ref",
                "Advisory URL: https://example.test/advisories/1179",
            ]
        );
    }
}
