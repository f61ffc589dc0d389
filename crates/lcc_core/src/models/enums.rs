//! Core enums used throughout the checker.

use serde::{Deserialize, Serialize};

const EBU_R128_DESCRIPTION: &str = "EBU R128 standard = -23 LUFS +/- 1, True Peak -2dB maximum";
const ATSC_A85_DESCRIPTION: &str = "ATSC A/85 RP  = -24 LKFS +/- 2, True Peak -2dB maximum";

/// Kind of elementary stream, as reported by the probe tool's `codec_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecType {
    Audio,
    Video,
    Subtitle,
    /// Anything else, including a missing or malformed value.
    #[default]
    Other,
}

impl CodecType {
    /// Interpret the free-text `codec_type` value from the wire.
    ///
    /// Matching is exact: the probe tool always emits lowercase names.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "audio" => CodecType::Audio,
            "video" => CodecType::Video,
            "subtitle" => CodecType::Subtitle,
            _ => CodecType::Other,
        }
    }
}

impl std::fmt::Display for CodecType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CodecType::Audio => write!(f, "audio"),
            CodecType::Video => write!(f, "video"),
            CodecType::Subtitle => write!(f, "subtitle"),
            CodecType::Other => write!(f, "other"),
        }
    }
}

/// Broadcast loudness standard a file is checked against.
///
/// Each standard defines an inclusive tolerance band and the target
/// integrated loudness used to compute the corrective gain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ComplianceStandard {
    /// EBU R128: [-24, -22] LUFS, target -23 LUFS.
    #[default]
    #[serde(rename = "ebu")]
    EbuR128,
    /// ATSC A/85: [-26, -22] LUFS, target -24 LUFS.
    #[serde(rename = "atsc")]
    AtscA85,
}

impl ComplianceStandard {
    /// Map the legacy boolean selector (true = EBU R128, false = ATSC A/85).
    pub fn from_ebu_flag(ebu: bool) -> Self {
        if ebu {
            ComplianceStandard::EbuR128
        } else {
            ComplianceStandard::AtscA85
        }
    }

    /// Parse a standard name ("ebu", "r128", "atsc", "a85"), case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "ebu" | "r128" | "ebu-r128" => Some(ComplianceStandard::EbuR128),
            "atsc" | "a85" | "atsc-a85" => Some(ComplianceStandard::AtscA85),
            _ => None,
        }
    }

    /// Lower bound of the tolerance band in LUFS.
    pub fn tolerance_low(&self) -> f64 {
        match self {
            ComplianceStandard::EbuR128 => -24.0,
            ComplianceStandard::AtscA85 => -26.0,
        }
    }

    /// Upper bound of the tolerance band in LUFS.
    pub fn tolerance_high(&self) -> f64 {
        -22.0
    }

    /// Target integrated loudness in LUFS.
    pub fn target_lufs(&self) -> f64 {
        match self {
            ComplianceStandard::EbuR128 => -23.0,
            ComplianceStandard::AtscA85 => -24.0,
        }
    }

    /// Whether a measured value lies inside the (inclusive) tolerance band.
    pub fn accepts(&self, lufs: f64) -> bool {
        lufs >= self.tolerance_low() && lufs <= self.tolerance_high()
    }

    /// Short name used in config files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ComplianceStandard::EbuR128 => "ebu",
            ComplianceStandard::AtscA85 => "atsc",
        }
    }

    /// Description printed in reports.
    pub fn description(&self) -> &'static str {
        match self {
            ComplianceStandard::EbuR128 => EBU_R128_DESCRIPTION,
            ComplianceStandard::AtscA85 => ATSC_A85_DESCRIPTION,
        }
    }
}

impl std::fmt::Display for ComplianceStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComplianceStandard::EbuR128 => write!(f, "EBU R128"),
            ComplianceStandard::AtscA85 => write!(f, "ATSC A/85"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codec_type_from_wire() {
        assert_eq!(CodecType::from_wire("audio"), CodecType::Audio);
        assert_eq!(CodecType::from_wire("video"), CodecType::Video);
        assert_eq!(CodecType::from_wire("subtitle"), CodecType::Subtitle);
        assert_eq!(CodecType::from_wire("data"), CodecType::Other);
        assert_eq!(CodecType::from_wire(""), CodecType::Other);
    }

    #[test]
    fn ebu_flag_maps_to_standard() {
        assert_eq!(ComplianceStandard::from_ebu_flag(true), ComplianceStandard::EbuR128);
        assert_eq!(ComplianceStandard::from_ebu_flag(false), ComplianceStandard::AtscA85);
    }

    #[test]
    fn standard_bands_are_inclusive() {
        let ebu = ComplianceStandard::EbuR128;
        assert!(ebu.accepts(-24.0));
        assert!(ebu.accepts(-22.0));
        assert!(!ebu.accepts(-24.1));

        let atsc = ComplianceStandard::AtscA85;
        assert!(atsc.accepts(-26.0));
        assert!(atsc.accepts(-22.0));
        assert!(!atsc.accepts(-21.9));
    }

    #[test]
    fn standard_from_name() {
        assert_eq!(ComplianceStandard::from_name("EBU"), Some(ComplianceStandard::EbuR128));
        assert_eq!(ComplianceStandard::from_name("atsc"), Some(ComplianceStandard::AtscA85));
        assert_eq!(ComplianceStandard::from_name("loud"), None);
    }
}
