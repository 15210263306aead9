//! Error types for building a report

use thiserror::Error;

/// Failure to turn audit output into a [`crate::Report`]
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Malformed audit output: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Malformed audit output on line {line}: {source}")]
    ParseLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unable to decode record #{index} into a known structure: {raw}")]
    UnrecognizedRecord { index: usize, raw: String },
}

impl ReportError {
    /// True for malformed JSON, whether array or line-delimited input
    pub fn is_parse(&self) -> bool {
        matches!(self, ReportError::Parse(_) | ReportError::ParseLine { .. })
    }
}
