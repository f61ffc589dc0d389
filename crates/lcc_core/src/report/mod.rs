//! Report rendering for compliance results.
//!
//! A [`ComplianceReport`](crate::models::ComplianceReport) is rendered in one
//! of four formats: structured JSON or XML, a condensed `simple` block, or the
//! human-readable text summary.

mod format;
mod render;

pub use format::ReportFormat;
pub use render::render;

use thiserror::Error;

/// Errors that can occur while rendering a report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to serialize JSON report: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write XML report: {0}")]
    Xml(String),

    #[error("Report is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Result type for report rendering.
pub type ReportResult<T> = Result<T, ReportError>;
