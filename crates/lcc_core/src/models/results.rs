//! Per-check result records: measurement, compliance, plan, report.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::enums::ComplianceStandard;

/// Audio parameters preserved across a corrective re-encode.
///
/// All fields are zero values when the probe report had no audio stream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioParams {
    /// Codec name (e.g., "aac").
    pub codec: String,
    /// Bit rate in bits/second, verbatim from the probe report.
    pub bit_rate: String,
    /// Sample rate in Hz, verbatim from the probe report.
    pub sample_rate: String,
    /// Channel count.
    pub channels: u32,
}

impl AudioParams {
    /// True when no audio stream contributed to this selection.
    pub fn is_empty(&self) -> bool {
        self.codec.is_empty()
            && self.bit_rate.is_empty()
            && self.sample_rate.is_empty()
            && self.channels == 0
    }
}

/// Whether the matched measurement text could be read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasurementStatus {
    /// The numeric payload parsed cleanly.
    Measured,
    /// A measurement was matched but its payload is not a number.
    Degraded,
}

/// Integrated loudness pulled from the measurement tool's diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoudnessMeasurement {
    /// Integrated loudness in LUFS, absent when the payload was unparseable.
    pub integrated_lufs: Option<f64>,
    /// The numeric text of the authoritative (last) match.
    pub raw: String,
    /// How many integrated-loudness occurrences the text contained.
    pub occurrences: usize,
}

impl LoudnessMeasurement {
    pub fn status(&self) -> MeasurementStatus {
        if self.integrated_lufs.is_some() {
            MeasurementStatus::Measured
        } else {
            MeasurementStatus::Degraded
        }
    }
}

/// Outcome of checking a measurement against a standard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResult {
    /// Whether the measurement is inside the standard's tolerance band.
    pub passed: bool,
    /// Measured loudness as found in the diagnostics ("" when unmeasured).
    pub measured_lufs: String,
    /// Signed gain to reach the target, 0.0 when passed or unmeasured.
    pub adjustment_db: f64,
}

impl ComplianceResult {
    /// Degraded result for a measurement that could not be read.
    pub fn unmeasured() -> Self {
        Self {
            passed: false,
            measured_lufs: String::new(),
            adjustment_db: 0.0,
        }
    }

    /// Gain formatted for a volume filter, one decimal followed by `dB`.
    pub fn adjustment_string(&self) -> String {
        format!("{:.1}dB", self.adjustment_db)
    }
}

/// Parameters for the corrective transcode of a non-compliant file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionPlan {
    /// File that was checked.
    pub input_path: PathBuf,
    /// Where the corrected file is written.
    pub output_path: PathBuf,
    /// Audio encoding to preserve.
    pub audio: AudioParams,
    /// Volume filter argument (e.g. "-3.6dB").
    pub gain: String,
}

impl CorrectionPlan {
    /// The full `volume` filter expression.
    pub fn volume_filter(&self) -> String {
        format!("volume=volume={}", self.gain)
    }
}

/// Record handed to the report renderer.
///
/// Field names match the structured report format consumers already parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceReport {
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "PassedOrFailed")]
    pub passed: bool,
    #[serde(rename = "Loudness")]
    pub loudness: String,
    #[serde(rename = "RecommendedAdjustment")]
    pub adjustment: f64,
    #[serde(rename = "RecommendedAdjustmentString")]
    pub adjustment_string: String,
    #[serde(rename = "Standard")]
    pub standard: String,
}

impl ComplianceReport {
    /// Build a report for a checked file.
    pub fn new(
        file_name: impl Into<String>,
        result: &ComplianceResult,
        standard: ComplianceStandard,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            passed: result.passed,
            loudness: result.measured_lufs.clone(),
            adjustment: result.adjustment_db,
            adjustment_string: result.adjustment_string(),
            standard: standard.description().to_string(),
        }
    }
}
