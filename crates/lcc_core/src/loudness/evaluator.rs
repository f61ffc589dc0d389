//! Compliance decision and corrective gain.

use crate::models::{ComplianceResult, ComplianceStandard, LoudnessMeasurement};

/// Check a measured loudness (as text) against a standard.
///
/// Inside the standard's inclusive band the file passes with a zero
/// adjustment. Outside it, the adjustment is `target - measured`.
///
/// Text that does not parse as a finite number yields a failed result with
/// an empty loudness and zero adjustment; this is not an error.
pub fn evaluate(measured: &str, standard: ComplianceStandard) -> ComplianceResult {
    let value = match measured.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            tracing::debug!("Cannot evaluate loudness '{}', reporting as unmeasured", measured);
            return ComplianceResult::unmeasured();
        }
    };

    if standard.accepts(value) {
        tracing::debug!("{} LUFS is within {} tolerance", value, standard);
        return ComplianceResult {
            passed: true,
            measured_lufs: measured.to_string(),
            adjustment_db: 0.0,
        };
    }

    let adjustment_db = standard.target_lufs() - value;
    tracing::debug!(
        "{} LUFS is outside {} tolerance, adjustment {:.1} dB",
        value,
        standard,
        adjustment_db
    );

    ComplianceResult {
        passed: false,
        measured_lufs: measured.to_string(),
        adjustment_db,
    }
}

/// Evaluate an extracted measurement using its authoritative text.
pub fn evaluate_measurement(
    measurement: &LoudnessMeasurement,
    standard: ComplianceStandard,
) -> ComplianceResult {
    evaluate(&measurement.raw, standard)
}
