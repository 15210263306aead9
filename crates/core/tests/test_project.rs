//! Integration tests for severity mapping and issue projection

use yarn_audit_core::{
    as_issues, map_severity, Advisory, AuditAdvisory, Confidence, IdList, Report, Resolution,
    Severity,
};

fn make_advisory(path: &str, module: &str, cves: &[&str], cwe: &[&str]) -> AuditAdvisory {
    AuditAdvisory {
        resolution: Resolution {
            id: 1,
            path: path.to_string(),
            ..Default::default()
        },
        advisory: Advisory {
            module_name: module.to_string(),
            severity: "moderate".to_string(),
            title: format!("Issue in {}", module),
            cves: IdList::Many(cves.iter().map(|s| s.to_string()).collect()),
            cwe: IdList::Many(cwe.iter().map(|s| s.to_string()).collect()),
            ..Default::default()
        },
    }
}

// ── Severity mapping ─────────────────────────────────────────

#[test]
fn test_known_severities_ascend() {
    let mapped: Vec<Severity> = ["low", "moderate", "high", "critical"]
        .iter()
        .map(|s| map_severity(s))
        .collect();

    assert_eq!(
        mapped,
        vec![Severity::Low, Severity::Medium, Severity::High, Severity::Critical]
    );
    assert!(mapped.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_unknown_severity_is_lowest() {
    for s in ["", "info", "unknown", "MODERATE", "severe"] {
        assert_eq!(map_severity(s), Severity::Info, "severity {:?}", s);
    }
    assert!(Severity::ALL.iter().all(|s| Severity::Info <= *s));
}

// ── Projection ───────────────────────────────────────────────

#[test]
fn test_target_without_path_is_module() {
    let issue = make_advisory("", "lodash", &[], &[]).as_issue();
    assert_eq!(issue.target, "lodash");
}

#[test]
fn test_target_with_path_is_prefixed() {
    let issue = make_advisory("webpack>chokidar", "braces", &[], &[]).as_issue();
    assert_eq!(issue.target, "webpack>chokidar: braces");
}

#[test]
fn test_cve_join() {
    let issue = make_advisory("", "a", &["CVE-1", "CVE-2"], &[]).as_issue();
    assert_eq!(issue.cve, "CVE-1, CVE-2");

    let issue = make_advisory("", "a", &[], &[]).as_issue();
    assert_eq!(issue.cve, "");
}

#[test]
fn test_cve_bare_string() {
    let mut advisory = make_advisory("", "a", &[], &[]);
    advisory.advisory.cves = IdList::One("CVE-2020-1".to_string());
    assert_eq!(advisory.as_issue().cve, "CVE-2020-1");
}

#[test]
fn test_cwe_becomes_type() {
    let issue = make_advisory("", "a", &[], &["CWE-79", "CWE-80"]).as_issue();
    assert_eq!(issue.kind, "CWE-79, CWE-80");

    let issue = make_advisory("", "a", &[], &[]).as_issue();
    assert_eq!(issue.kind, "");
}

#[test]
fn test_fixed_fields() {
    let issue = make_advisory("x", "minimist", &[], &[]).as_issue();
    assert_eq!(issue.title, "Issue in minimist");
    assert_eq!(issue.severity, Severity::Medium);
    assert_eq!(issue.confidence, Confidence::High);
}

#[test]
fn test_description_template() {
    let mut advisory = make_advisory("", "minimist", &[], &[]);
    advisory.advisory.vulnerable_versions = "<1.2.6".to_string();
    advisory.advisory.recommendation = "Upgrade".to_string();
    advisory.advisory.overview = "Bad".to_string();
    advisory.advisory.references = "- ref1\n- ref2".to_string();
    advisory.advisory.url = "https://example.test/1".to_string();

    assert_eq!(
        advisory.as_issue().description,
        "Vulnerable Versions: <1.2.6\nRecommendation: Upgrade\nOverview: Bad\nReferences:\n- ref1\n- ref2\nAdvisory URL: https://example.test/1\n"
    );
}

#[test]
fn test_default_advisory_projects() {
    let issue = AuditAdvisory::default().as_issue();
    assert_eq!(issue.target, "");
    assert_eq!(issue.severity, Severity::Info);
    assert_eq!(issue.confidence, Confidence::High);
}

#[test]
fn test_batch_preserves_order_and_length() {
    let advisories = vec![
        make_advisory("", "a", &[], &[]),
        make_advisory("", "b", &[], &[]),
        make_advisory("", "a", &[], &[]),
    ];
    let issues = as_issues(&advisories);

    let targets: Vec<&str> = issues.iter().map(|i| i.target.as_str()).collect();
    assert_eq!(targets, vec!["a", "b", "a"]);
}

#[test]
fn test_fixture_issue() {
    let report = Report::from_slice(include_bytes!("fixtures/audit.json")).unwrap();
    let issue = &report.as_issues()[0];

    assert_eq!(issue.title, "Prototype Pollution in minimist");
    assert_eq!(issue.kind, "CWE-1321");
    assert_eq!(issue.cve, "CVE-2021-44906");
    assert_eq!(issue.severity, Severity::Critical);
    assert!(issue
        .description
        .ends_with("Advisory URL: https://github.com/advisories/GHSA-xvch-5gv4-984h\n"));
}

#[test]
fn test_issue_serializes_pipeline_names() {
    let issue = make_advisory("", "a", &["CVE-1"], &["CWE-1"]).as_issue();
    let json = serde_json::to_value(&issue).unwrap();

    assert_eq!(json["type"], "CWE-1");
    assert_eq!(json["severity"], "SEVERITY_MEDIUM");
    assert_eq!(json["confidence"], "CONFIDENCE_HIGH");
    assert_eq!(json["cve"], "CVE-1");
}
