//! Data models for the loudness compliance checker.
//!
//! This module contains the structures threaded through a check:
//! - Enums for stream kinds and loudness standards
//! - The typed media probe report (streams + container format)
//! - Measurement, compliance, correction plan and report records

mod enums;
mod media;
mod results;

// Re-export all public types
pub use enums::{CodecType, ComplianceStandard};
pub use media::{FormatDescriptor, MediaProbeReport, StreamDescriptor, StreamTags};
pub use results::{
    AudioParams, ComplianceReport, ComplianceResult, CorrectionPlan, LoudnessMeasurement,
    MeasurementStatus,
};
