//! Discriminating decoder — classifies one raw JSON element by its `type` tag
//!
//! Every element of the audit output looks like `{"type": "<tag>", "data": {...}}`.
//! Each record kind is probed separately: a probe succeeds only when the
//! element decodes into that kind's payload *and* carries that kind's tag.
//! Decode failures and tag mismatches are both plain non-matches, so the
//! same element can be offered to the next kind.

use crate::record::{null_as_default, AuditAction, AuditAdvisory, AuditSummary};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The closed set of record kinds the audit tool emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Action,
    Advisory,
    Summary,
}

impl RecordKind {
    /// Probe order used when classifying an element
    pub const PRIORITY: [RecordKind; 3] =
        [RecordKind::Action, RecordKind::Advisory, RecordKind::Summary];

    /// Discriminator value carried in the element's `type` field
    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::Action => "auditAction",
            RecordKind::Advisory => "auditAdvisory",
            RecordKind::Summary => "auditSummary",
        }
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A decoded record of any known kind.
///
/// Serializes back to the wire envelope `{"type": ..., "data": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Record {
    #[serde(rename = "auditAction")]
    Action(AuditAction),
    #[serde(rename = "auditAdvisory")]
    Advisory(AuditAdvisory),
    #[serde(rename = "auditSummary")]
    Summary(AuditSummary),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Action(_) => RecordKind::Action,
            Record::Advisory(_) => RecordKind::Advisory,
            Record::Summary(_) => RecordKind::Summary,
        }
    }
}

/// Wire envelope for a single probe; a missing `type` never matches a tag,
/// a missing or `null` `data` decodes as the default payload
#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de> + Default"))]
struct Envelope<T> {
    #[serde(rename = "type", default)]
    tag: String,
    #[serde(default, deserialize_with = "null_as_default")]
    data: T,
}

fn probe<T>(raw: &Value, kind: RecordKind) -> Option<T>
where
    T: DeserializeOwned + Default,
{
    let envelope = Envelope::<T>::deserialize(raw).ok()?;
    (envelope.tag == kind.tag()).then_some(envelope.data)
}

/// Try to decode `raw` as a record of `kind`.
///
/// Returns `None` when the element is structurally incompatible with the
/// kind's payload or when its tag names a different kind.
pub fn decode_as(raw: &Value, kind: RecordKind) -> Option<Record> {
    match kind {
        RecordKind::Action => probe(raw, kind).map(Record::Action),
        RecordKind::Advisory => probe(raw, kind).map(Record::Advisory),
        RecordKind::Summary => probe(raw, kind).map(Record::Summary),
    }
}

/// Probe every kind in [`RecordKind::PRIORITY`] order and return the first match
pub fn classify(raw: &Value) -> Option<Record> {
    RecordKind::PRIORITY
        .iter()
        .find_map(|kind| decode_as(raw, *kind))
}
