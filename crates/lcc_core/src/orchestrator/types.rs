//! Core types for the orchestrator pipeline.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::logging::CheckLogger;
use crate::models::{
    AudioParams, ComplianceResult, ComplianceStandard, CorrectionPlan, LoudnessMeasurement,
    MediaProbeReport,
};
use crate::tools::{MediaTools, TranscodeOutcome};

/// Options for a single check, resolved from config and command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOptions {
    /// File to check.
    pub input_path: PathBuf,
    /// Standard to check against.
    pub standard: ComplianceStandard,
    /// Run the corrective transcode when the check fails.
    pub autofix: bool,
}

impl CheckOptions {
    /// Options for checking `input_path` against EBU R128 without autofix.
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            standard: ComplianceStandard::default(),
            autofix: false,
        }
    }

    pub fn with_standard(mut self, standard: ComplianceStandard) -> Self {
        self.standard = standard;
        self
    }

    pub fn with_autofix(mut self, autofix: bool) -> Self {
        self.autofix = autofix;
        self
    }
}

/// Read-only context passed to pipeline steps.
///
/// Mutable state goes in `CheckState`.
pub struct Context {
    /// Check options.
    pub options: CheckOptions,
    /// Check name (the input's base name).
    pub check_name: String,
    /// External probe/measure/transcode tools.
    pub tools: Box<dyn MediaTools>,
    /// Per-check logger.
    pub logger: Arc<CheckLogger>,
}

impl Context {
    /// Create a new context for a check.
    pub fn new(
        options: CheckOptions,
        tools: Box<dyn MediaTools>,
        logger: Arc<CheckLogger>,
    ) -> Self {
        let check_name = check_name_for(&options.input_path);
        Self {
            options,
            check_name,
            tools,
            logger,
        }
    }

    /// Path of the file being checked.
    pub fn input_path(&self) -> &Path {
        &self.options.input_path
    }

    /// Standard being checked against.
    pub fn standard(&self) -> ComplianceStandard {
        self.options.standard
    }
}

/// Base name of a path, or the whole path when it has none.
pub fn check_name_for(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Mutable check state that accumulates results from pipeline steps.
///
/// Each step's output is stored in its own section and written once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckState {
    /// Unique check identifier.
    pub check_id: String,
    /// When the check started.
    pub started_at: Option<String>,
    /// Probe results (from Probe step).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probe: Option<ProbeOutput>,
    /// Integrated loudness (from Measure step).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurement: Option<LoudnessMeasurement>,
    /// Verdict (from Evaluate step).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance: Option<ComplianceResult>,
    /// Correction plan (from Plan step).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<CorrectionPlan>,
    /// Transcode record (from Correct step, only when it ran).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correction: Option<TranscodeOutcome>,
}

impl CheckState {
    /// Create a new check state with the given ID.
    pub fn new(check_id: impl Into<String>) -> Self {
        Self {
            check_id: check_id.into(),
            started_at: Some(chrono::Local::now().to_rfc3339()),
            ..Default::default()
        }
    }

    /// Audio parameters selected by the Probe step.
    pub fn audio(&self) -> Option<&AudioParams> {
        self.probe.as_ref().map(|p| &p.audio)
    }

    /// Whether the file was found compliant (false until evaluated).
    pub fn passed(&self) -> bool {
        self.compliance.as_ref().is_some_and(|c| c.passed)
    }
}

/// Output from the Probe step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProbeOutput {
    /// Parsed probe report.
    pub report: MediaProbeReport,
    /// Parameters of the last audio stream.
    pub audio: AudioParams,
}

/// Result of executing a pipeline step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Step completed successfully.
    Success,
    /// Step was skipped (preconditions not met, but not an error).
    Skipped(String),
}
