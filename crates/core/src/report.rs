//! Report aggregation — partitions a whole audit output into typed collections

use crate::decode::{classify, Record};
use crate::error::ReportError;
use crate::issue::Issue;
use crate::project::as_issues;
use crate::record::{AuditAction, AuditAdvisory, AuditSummary};
use serde_json::Value;

/// Every record of one audit run, grouped by kind in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub actions: Vec<AuditAction>,
    pub advisories: Vec<AuditAdvisory>,
    pub summaries: Vec<AuditSummary>,
}

impl Report {
    /// Build a report from a JSON array of audit records.
    ///
    /// Fails with [`ReportError::Parse`] unless the input is a JSON array, and
    /// with [`ReportError::UnrecognizedRecord`] on the first element that is
    /// none of the known kinds. No partial report is returned.
    pub fn from_slice(input: &[u8]) -> Result<Self, ReportError> {
        let elements: Vec<Value> = serde_json::from_slice(input)?;
        Self::from_values(elements)
    }

    /// Build a report from line-delimited JSON, as `yarn audit --json` prints it.
    ///
    /// Blank lines are skipped; line numbers in errors are 1-based.
    pub fn from_ndjson(input: &[u8]) -> Result<Self, ReportError> {
        let elements = input
            .split(|b| *b == b'\n')
            .enumerate()
            .filter(|(_, line)| !line.trim_ascii().is_empty())
            .map(|(i, line)| {
                serde_json::from_slice::<Value>(line)
                    .map_err(|source| ReportError::ParseLine { line: i + 1, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_values(elements)
    }

    /// Classify already-parsed elements, in order
    pub fn from_values<I>(elements: I) -> Result<Self, ReportError>
    where
        I: IntoIterator<Item = Value>,
    {
        let mut report = Report::default();
        for (index, raw) in elements.into_iter().enumerate() {
            match classify(&raw) {
                Some(record) => report.push(record),
                None => {
                    return Err(ReportError::UnrecognizedRecord {
                        index,
                        raw: raw.to_string(),
                    })
                }
            }
        }
        Ok(report)
    }

    /// Append a record to the collection for its kind
    pub fn push(&mut self, record: Record) {
        match record {
            Record::Action(action) => self.actions.push(action),
            Record::Advisory(advisory) => self.advisories.push(advisory),
            Record::Summary(summary) => self.summaries.push(summary),
        }
    }

    /// Total number of records across all kinds
    pub fn len(&self) -> usize {
        self.actions.len() + self.advisories.len() + self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Project every advisory into a normalized issue, preserving order
    pub fn as_issues(&self) -> Vec<Issue> {
        as_issues(&self.advisories)
    }
}
