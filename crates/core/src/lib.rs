//! Yarn Audit Core - typed decoding of `yarn audit --json` output
//!
//! This crate turns the audit tool's heterogeneous record stream into:
//! - strongly typed action, advisory and summary records
//! - a [`Report`] grouping those records by kind, in input order
//! - normalized [`Issue`]s, one per advisory, for the scanning pipeline

pub mod config;
pub mod decode;
pub mod error;
pub mod issue;
pub mod project;
pub mod record;
pub mod report;

pub use config::YarnAuditConfig;
pub use decode::{classify, decode_as, Record, RecordKind};
pub use error::ReportError;
pub use issue::{Confidence, Issue, IssueSummary, Severity};
pub use project::{as_issues, map_severity, ADVISORY_CONFIDENCE};
pub use record::{
    ActionDetail, Advisory, AdvisoryFinding, AdvisoryMetadata, AuditAction, AuditAdvisory,
    AuditSummary, Contact, Cvss, IdList, Resolution, VulnerabilityCounts,
};
pub use report::Report;

/// Yarn Audit version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
