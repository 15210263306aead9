use yarn_audit_cli::output::sarif::{build_sarif_log, FALLBACK_RULE_ID, MANIFEST_URI};
use yarn_audit_core::{Confidence, Issue, Severity};

fn make_issue(kind: &str, severity: Severity, title: &str, target: &str, cve: &str) -> Issue {
    Issue {
        target: target.to_string(),
        kind: kind.to_string(),
        title: title.to_string(),
        severity,
        confidence: Confidence::High,
        description: String::new(),
        cve: cve.to_string(),
    }
}

#[test]
fn test_empty_issues() {
    let log = build_sarif_log(&[]);
    assert_eq!(log.version, "2.1.0");
    assert_eq!(log.runs.len(), 1);
    assert!(log.runs[0].results.is_empty());
    assert!(log.runs[0].tool.driver.rules.is_empty());

    let json = serde_json::to_string_pretty(&log).unwrap();
    assert!(json.contains("\"version\": \"2.1.0\""));
    assert!(json.contains("\"$schema\""));
}

#[test]
fn test_single_issue() {
    let issues = vec![make_issue(
        "CWE-1321",
        Severity::Critical,
        "Prototype Pollution in minimist",
        "mkdirp>minimist: minimist",
        "CVE-2021-44906",
    )];
    let log = build_sarif_log(&issues);

    assert_eq!(log.runs[0].results.len(), 1);
    let result = &log.runs[0].results[0];
    assert_eq!(result.rule_id, "CWE-1321");
    assert_eq!(result.level, "error");
    assert_eq!(
        result.message.text,
        "Prototype Pollution in minimist in mkdirp>minimist: minimist [CVE-2021-44906]"
    );
    assert_eq!(
        result.locations[0].physical_location.artifact_location.uri,
        MANIFEST_URI
    );
}

#[test]
fn test_severity_mapping() {
    let issues = vec![
        make_issue("", Severity::Critical, "c", "a", ""),
        make_issue("", Severity::High, "h", "a", ""),
        make_issue("", Severity::Medium, "m", "a", ""),
        make_issue("", Severity::Low, "l", "a", ""),
        make_issue("", Severity::Info, "i", "a", ""),
    ];
    let log = build_sarif_log(&issues);
    let levels: Vec<&str> = log.runs[0]
        .results
        .iter()
        .map(|r| r.level.as_str())
        .collect();
    assert_eq!(levels, vec!["error", "error", "warning", "note", "note"]);
}

#[test]
fn test_rules_deduplicated_and_indexed() {
    let issues = vec![
        make_issue("CWE-79", Severity::High, "a", "x", ""),
        make_issue("", Severity::Low, "b", "y", ""),
        make_issue("CWE-400, CWE-1333", Severity::Medium, "c", "z", ""),
        make_issue("CWE-79", Severity::High, "d", "w", ""),
    ];
    let log = build_sarif_log(&issues);
    let rules: Vec<&str> = log.runs[0]
        .tool
        .driver
        .rules
        .iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(rules, vec!["CWE-400", "CWE-79", FALLBACK_RULE_ID]);

    for result in &log.runs[0].results {
        assert_eq!(rules[result.rule_index], result.rule_id);
    }
    assert_eq!(log.runs[0].results[1].rule_id, FALLBACK_RULE_ID);
}

#[test]
fn test_message_without_cve() {
    let log = build_sarif_log(&[make_issue("", Severity::Low, "ReDoS", "braces", "")]);
    assert_eq!(log.runs[0].results[0].message.text, "ReDoS in braces");
}
