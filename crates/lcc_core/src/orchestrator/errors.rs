//! Error types for the orchestrator pipeline.
//!
//! Errors carry context that chains through layers:
//! Check → Step → Tool/Parser → Detail

use thiserror::Error;

use crate::loudness::LoudnessError;
use crate::tools::ToolError;

/// Top-level pipeline error with check context.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A step failed during execution.
    #[error("Check '{check_name}' failed at step '{step_name}': {source}")]
    StepFailed {
        check_name: String,
        step_name: String,
        #[source]
        source: StepError,
    },

    /// The pipeline finished without producing a required result.
    #[error("Check '{check_name}' is incomplete: {message}")]
    Incomplete { check_name: String, message: String },
}

impl PipelineError {
    /// Create a step failed error.
    pub fn step_failed(
        check_name: impl Into<String>,
        step_name: impl Into<String>,
        source: StepError,
    ) -> Self {
        Self::StepFailed {
            check_name: check_name.into(),
            step_name: step_name.into(),
            source,
        }
    }

    /// Create an incomplete-run error.
    pub fn incomplete(check_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Incomplete {
            check_name: check_name.into(),
            message: message.into(),
        }
    }

    /// The underlying step error, if a step failed.
    pub fn step_error(&self) -> Option<&StepError> {
        match self {
            PipelineError::StepFailed { source, .. } => Some(source),
            PipelineError::Incomplete { .. } => None,
        }
    }
}

/// Error from a pipeline step with operation context.
#[derive(Error, Debug)]
pub enum StepError {
    /// Output validation failed.
    #[error("Output validation failed: {0}")]
    InvalidOutput(String),

    /// An external tool could not be found, started, or exited abnormally.
    #[error(transparent)]
    Tool(#[from] ToolError),

    /// The measurement diagnostics held no integrated loudness.
    #[error(transparent)]
    Loudness(#[from] LoudnessError),

    /// An earlier step did not record its output.
    #[error("Precondition not met: {0}")]
    PreconditionFailed(String),
}

impl StepError {
    /// Create an invalid output error.
    pub fn invalid_output(message: impl Into<String>) -> Self {
        Self::InvalidOutput(message.into())
    }

    /// Create a precondition failed error.
    pub fn precondition_failed(message: impl Into<String>) -> Self {
        Self::PreconditionFailed(message.into())
    }
}

/// Result type for step operations.
pub type StepResult<T> = Result<T, StepError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
