//! Output format selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Output format for the compliance report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pretty-printed JSON object.
    #[default]
    Json,
    /// XML document with a `MediaFileLoudness` root.
    Xml,
    /// Four-line condensed summary.
    Simple,
    /// Human-readable verdict.
    Text,
}

impl ReportFormat {
    /// Parse a format name, case-insensitively.
    ///
    /// Anything that is not json, xml or simple selects the text summary.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => ReportFormat::Json,
            "xml" => ReportFormat::Xml,
            "simple" => ReportFormat::Simple,
            _ => ReportFormat::Text,
        }
    }

    /// Lowercase name as used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ReportFormat::Json => "json",
            ReportFormat::Xml => "xml",
            ReportFormat::Simple => "simple",
            ReportFormat::Text => "text",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
