//! Loudness measurement parsing and compliance evaluation.
//!
//! The measurement tool (ffmpeg's `ebur128` filter) prints its readings
//! as free text on stderr. This module finds the integrated loudness in
//! that text and checks it against a [`ComplianceStandard`].
//!
//! # Failure policy
//!
//! Two "no number" cases are deliberately handled differently:
//!
//! - No integrated-loudness reading in the text at all is a hard
//!   [`LoudnessError::NoMeasurement`].
//! - A reading whose numeric payload does not parse is *degraded*: the
//!   check completes as failed, with an empty loudness and zero adjustment.
//!
//! [`ComplianceStandard`]: crate::models::ComplianceStandard

mod evaluator;
mod extractor;

use thiserror::Error;

pub use evaluator::{evaluate, evaluate_measurement};
pub use extractor::extract_loudness;

/// Errors from loudness extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoudnessError {
    /// The diagnostics contained no integrated-loudness reading.
    #[error("no loudness measurement found in diagnostic output")]
    NoMeasurement,
}

/// Result type for loudness operations.
pub type LoudnessResult<T> = Result<T, LoudnessError>;
