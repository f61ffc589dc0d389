//! Integrated loudness extraction from ebur128 diagnostics.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{LoudnessError, LoudnessResult};
use crate::models::LoudnessMeasurement;

/// `I: <value> LUFS`, as printed in both the per-frame lines and the summary.
///
/// The separator between the digit groups is any character, so a reading
/// like `-19,4` still matches and surfaces as a degraded measurement. Digits
/// are ASCII only.
static INTEGRATED_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)i:\s*(-?[0-9]+.[0-9])\s*lufs").expect("integrated loudness pattern is valid")
});

/// Extract the integrated loudness from the measurement tool's stderr.
///
/// The filter reports a running integrated value on every frame and once
/// more in its summary, so the **last** occurrence is authoritative.
///
/// Returns [`LoudnessError::NoMeasurement`] when nothing matches. A match
/// whose payload is not a number is returned with `integrated_lufs: None`.
pub fn extract_loudness(diagnostics: &str) -> LoudnessResult<LoudnessMeasurement> {
    let folded = diagnostics.to_lowercase();

    let (occurrences, last) = INTEGRATED_RE
        .captures_iter(&folded)
        .filter_map(|caps| caps.get(1))
        .fold((0usize, None), |(count, _), m| (count + 1, Some(m.as_str())));

    let raw = last.ok_or(LoudnessError::NoMeasurement)?.to_string();
    let integrated_lufs = raw.parse::<f64>().ok();

    match integrated_lufs {
        Some(lufs) => tracing::debug!(
            "Integrated loudness {} LUFS (last of {} readings)",
            lufs,
            occurrences
        ),
        None => tracing::debug!(
            "Loudness reading '{}' is not a number",
            raw
        ),
    }

    Ok(LoudnessMeasurement {
        integrated_lufs,
        raw,
        occurrences,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MeasurementStatus;

    const EBUR128_OUTPUT: &str = "\
Input #0, matroska,webm, from 'show.mkv':
  Duration: 00:01:00.00, start: 0.000000, bitrate: 1200 kb/s
[Parsed_ebur128_0 @ 0x55d] t: 0.1      TARGET:-23 LUFS    M:-120.7 S:-120.7     I: -70.0 LUFS       LRA:   0.0 LU
[Parsed_ebur128_0 @ 0x55d] t: 0.2      TARGET:-23 LUFS    M: -25.3 S:-120.7     I: -25.3 LUFS       LRA:   0.0 LU
[Parsed_ebur128_0 @ 0x55d] Summary:

  Integrated loudness:
    I:         -19.4 LUFS
    Threshold: -29.6 LUFS

  Loudness range:
    LRA:         5.2 LU
    Threshold:  -39.5 LUFS
";

    #[test]
    fn last_occurrence_wins() {
        let m = extract_loudness(EBUR128_OUTPUT).unwrap();
        assert_eq!(m.raw, "-19.4");
        assert_eq!(m.integrated_lufs, Some(-19.4));
        assert_eq!(m.occurrences, 3);
        assert_eq!(m.status(), MeasurementStatus::Measured);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let m = extract_loudness("summary i: -23.0 lufs").unwrap();
        assert_eq!(m.integrated_lufs, Some(-23.0));

        let m = extract_loudness("I:-18.2 LUFS").unwrap();
        assert_eq!(m.raw, "-18.2");
    }

    #[test]
    fn positive_values_match() {
        let m = extract_loudness("I: 2.5 LUFS").unwrap();
        assert_eq!(m.integrated_lufs, Some(2.5));
    }

    #[test]
    fn no_occurrence_is_a_parse_error() {
        let result = extract_loudness("ffmpeg version 6.0\nOutput #0, null, to 'pipe:':\n");
        assert_eq!(result, Err(LoudnessError::NoMeasurement));

        let result = extract_loudness("");
        assert_eq!(result, Err(LoudnessError::NoMeasurement));
    }

    #[test]
    fn non_ascii_digits_are_not_a_measurement() {
        assert_eq!(
            extract_loudness("I: -\u{0661}\u{0669}.\u{0664} LUFS"),
            Err(LoudnessError::NoMeasurement)
        );

        let m = extract_loudness("I: -\u{0661}\u{0669}.\u{0664} LUFS\nI: -23.0 LUFS").unwrap();
        assert_eq!(m.occurrences, 1);
        assert_eq!(m.integrated_lufs, Some(-23.0));
    }

    #[test]
    fn unparseable_payload_degrades() {
        let m = extract_loudness("I: -19,4 LUFS").unwrap();
        assert_eq!(m.raw, "-19,4");
        assert_eq!(m.integrated_lufs, None);
        assert_eq!(m.status(), MeasurementStatus::Degraded);
    }

    #[test]
    fn degraded_last_match_overrides_good_earlier_match() {
        let m = extract_loudness("I: -20.0 LUFS\nI: -21x5 LUFS").unwrap();
        assert_eq!(m.occurrences, 2);
        assert_eq!(m.integrated_lufs, None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let first = extract_loudness(EBUR128_OUTPUT).unwrap();
        let second = extract_loudness(EBUR128_OUTPUT).unwrap();
        assert_eq!(first, second);
    }
}
