//! Typed payloads for the records emitted by `yarn audit --json`
//!
//! The audit tool's output is loosely specified and has drifted between
//! versions, so every struct here defaults missing fields and decodes `null`
//! as the field's zero value.

use serde::{Deserialize, Deserializer, Serialize};

/// Decode `null` as the type's zero value instead of failing.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Identifier lists ─────────────────────────────────────────────

/// CVE / CWE identifiers, which older tool versions emit as a bare string
/// and newer ones as an array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdList {
    Many(Vec<String>),
    One(String),
}

impl Default for IdList {
    fn default() -> Self {
        IdList::Many(Vec::new())
    }
}

impl IdList {
    /// Iterate over the identifiers, skipping an empty bare string
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let items: &[String] = match self {
            IdList::Many(items) => items,
            IdList::One(item) if item.is_empty() => &[],
            IdList::One(item) => std::slice::from_ref(item),
        };
        items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join all identifiers with `sep` (empty string when there are none)
    pub fn join(&self, sep: &str) -> String {
        self.iter().collect::<Vec<_>>().join(sep)
    }
}

impl From<Vec<String>> for IdList {
    fn from(items: Vec<String>) -> Self {
        IdList::Many(items)
    }
}

// ── auditAction ──────────────────────────────────────────────────

/// A remediation the audit tool would perform (`type: "auditAction"`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditAction {
    /// Shell command that applies the remediation (e.g. `yarn upgrade lodash@4.17.21`)
    #[serde(deserialize_with = "null_as_default")]
    pub cmd: String,

    #[serde(deserialize_with = "null_as_default")]
    pub is_breaking: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub action: ActionDetail,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionDetail {
    /// Action verb: "install", "update" or "review"
    #[serde(deserialize_with = "null_as_default")]
    pub action: String,

    #[serde(deserialize_with = "null_as_default")]
    pub module: String,

    /// Version the module would be moved to
    #[serde(deserialize_with = "null_as_default")]
    pub target: String,

    #[serde(deserialize_with = "null_as_default")]
    pub is_major: bool,

    /// Advisory resolutions this action addresses
    #[serde(deserialize_with = "null_as_default")]
    pub resolves: Vec<Resolution>,
}

// ── auditAdvisory ────────────────────────────────────────────────

/// One vulnerability finding (`type: "auditAdvisory"`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditAdvisory {
    #[serde(deserialize_with = "null_as_default")]
    pub resolution: Resolution,
    #[serde(deserialize_with = "null_as_default")]
    pub advisory: Advisory,
}

/// Where in the dependency tree an advisory's module was found
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resolution {
    /// Advisory id this resolution belongs to
    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,

    /// `>`-separated dependency path, e.g. `webpack>watchpack>chokidar`
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,

    #[serde(deserialize_with = "null_as_default")]
    pub dev: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub optional: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub bundled: bool,
}

/// Advisory body as published by the registry's security database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Advisory {
    #[serde(deserialize_with = "null_as_default")]
    pub findings: Vec<AdvisoryFinding>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AdvisoryMetadata>,

    #[serde(deserialize_with = "null_as_default")]
    pub vulnerable_versions: String,

    #[serde(deserialize_with = "null_as_default")]
    pub module_name: String,

    /// Free text: "info", "low", "moderate", "high" or "critical"
    #[serde(deserialize_with = "null_as_default")]
    pub severity: String,

    #[serde(deserialize_with = "null_as_default")]
    pub github_advisory_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub cves: IdList,

    #[serde(deserialize_with = "null_as_default")]
    pub access: String,

    #[serde(deserialize_with = "null_as_default")]
    pub patched_versions: String,

    #[serde(deserialize_with = "null_as_default")]
    pub cvss: Cvss,

    #[serde(deserialize_with = "null_as_default")]
    pub updated: String,

    #[serde(deserialize_with = "null_as_default")]
    pub recommendation: String,

    #[serde(deserialize_with = "null_as_default")]
    pub cwe: IdList,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_by: Option<Contact>,

    #[serde(deserialize_with = "null_as_default")]
    pub deleted: bool,

    #[serde(deserialize_with = "null_as_default")]
    pub id: u64,

    #[serde(deserialize_with = "null_as_default")]
    pub references: String,

    #[serde(deserialize_with = "null_as_default")]
    pub created: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reported_by: Option<Contact>,

    #[serde(deserialize_with = "null_as_default")]
    pub title: String,

    /// Legacy registry id; its shape is not fixed upstream so it is kept opaque
    #[serde(skip_serializing_if = "Option::is_none")]
    pub npm_advisory_id: Option<serde_json::Value>,

    #[serde(deserialize_with = "null_as_default")]
    pub overview: String,

    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

/// An installed version of the vulnerable module and the paths leading to it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryFinding {
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
    #[serde(deserialize_with = "null_as_default")]
    pub paths: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub dev: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub optional: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub bundled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryMetadata {
    #[serde(deserialize_with = "null_as_default")]
    pub module_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub exploitability: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub affected_components: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Cvss {
    /// Kept as the exact JSON number so `7` and `7.0` survive re-encoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<serde_json::Number>,

    #[serde(deserialize_with = "null_as_default")]
    pub vector_string: String,
}

impl Cvss {
    pub fn score_f64(&self) -> Option<f64> {
        self.score.as_ref().and_then(serde_json::Number::as_f64)
    }
}

/// Reporter / finder of an advisory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

// ── auditSummary ─────────────────────────────────────────────────

/// Aggregate counts for the whole audit run (`type: "auditSummary"`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuditSummary {
    #[serde(deserialize_with = "null_as_default")]
    pub vulnerabilities: VulnerabilityCounts,
    #[serde(deserialize_with = "null_as_default")]
    pub dependencies: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub dev_dependencies: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub optional_dependencies: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_dependencies: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnerabilityCounts {
    #[serde(deserialize_with = "null_as_default")]
    pub info: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub low: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub moderate: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub high: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub critical: u64,
}

impl VulnerabilityCounts {
    pub fn total(&self) -> u64 {
        [self.low, self.moderate, self.high, self.critical]
            .iter()
            .fold(self.info, |sum, n| sum.saturating_add(*n))
    }
}
