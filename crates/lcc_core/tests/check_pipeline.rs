//! End-to-end checks through the standard pipeline with fake tools.

mod common;

use common::{context, ebur128_output, FakeTools, Workspace, PROBE_AAC_STEREO, PROBE_VIDEO_ONLY};
use lcc_core::loudness::LoudnessError;
use lcc_core::models::{AudioParams, ComplianceStandard};
use lcc_core::orchestrator::{run_check, CheckOptions, StepError};
use lcc_core::report::{render, ReportFormat};
use lcc_core::tools::ToolError;

const EPS: f64 = 1e-9;

#[test]
fn loud_file_fails_ebu_with_corrective_gain() {
    let ws = Workspace::with_file("show.mkv");
    let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-19.4"));
    let (ctx, calls) = context(CheckOptions::new(&ws.input), tools);

    let outcome = run_check(&ctx).unwrap();

    assert!(!outcome.report.passed);
    assert_eq!(outcome.report.file_name, "show.mkv");
    assert_eq!(outcome.report.loudness, "-19.4");
    assert_eq!(outcome.report.adjustment_string, "-3.6dB");
    assert!((outcome.compliance.adjustment_db - (-23.0 - -19.4)).abs() < EPS);

    assert_eq!(
        outcome.plan.audio,
        AudioParams {
            codec: "aac".to_string(),
            bit_rate: "128000".to_string(),
            sample_rate: "48000".to_string(),
            channels: 2,
        }
    );
    assert_eq!(outcome.plan.output_path, ws.dir.path().join("show-fixedAudio.mkv"));
    assert_eq!(outcome.plan.gain, "-3.6dB");

    assert!(outcome.correction.is_none());
    assert_eq!(outcome.steps_skipped, vec!["Correct"]);
    assert_eq!(calls.probe(), 1);
    assert_eq!(calls.measure(), 1);
    assert_eq!(calls.transcode(), 0);
}

#[test]
fn same_reading_under_atsc_targets_minus_24() {
    let ws = Workspace::with_file("show.mkv");
    let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-19.4"));
    let options = CheckOptions::new(&ws.input).with_standard(ComplianceStandard::AtscA85);
    let (ctx, _) = context(options, tools);

    let outcome = run_check(&ctx).unwrap();

    assert!(!outcome.report.passed);
    assert_eq!(outcome.report.adjustment_string, "-4.6dB");
    assert!(outcome.report.standard.starts_with("ATSC A/85"));
}

#[test]
fn compliant_file_skips_correction_even_with_autofix() {
    let ws = Workspace::with_file("show.mkv");
    let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-23.0"));
    let options = CheckOptions::new(&ws.input).with_autofix(true);
    let (ctx, calls) = context(options, tools);

    let outcome = run_check(&ctx).unwrap();

    assert!(outcome.report.passed);
    assert_eq!(outcome.report.loudness, "-23.0");
    assert_eq!(outcome.report.adjustment_string, "0.0dB");
    assert_eq!(outcome.plan.gain, "0.0dB");
    assert!(outcome.correction.is_none());
    assert_eq!(calls.transcode(), 0);
}

#[test]
fn autofix_transcodes_failing_file() {
    let ws = Workspace::with_file("show.mkv");
    let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-30.0"));
    let options = CheckOptions::new(&ws.input).with_autofix(true);
    let (ctx, calls) = context(options, tools);

    let outcome = run_check(&ctx).unwrap();

    assert!(!outcome.report.passed);
    assert_eq!(outcome.report.adjustment_string, "7.0dB");
    let correction = outcome.correction.expect("correction should run");
    assert_eq!(correction.output_path, ws.dir.path().join("show-fixedAudio.mkv"));
    assert!(correction.output_path.exists());
    assert!(outcome.steps_completed.iter().any(|s| s == "Correct"));
    assert!(outcome.steps_skipped.is_empty());
    assert_eq!(calls.transcode(), 1);
}

#[test]
fn missing_file_fails_before_probing() {
    let ws = Workspace::with_file("present.mkv");
    let missing = ws.dir.path().join("absent.mkv");
    let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-23.0"));
    let (ctx, calls) = context(CheckOptions::new(&missing), tools);

    let err = run_check(&ctx).unwrap_err();

    assert!(matches!(
        err.step_error(),
        Some(StepError::Tool(ToolError::FileNotFound(path))) if path == &missing
    ));
    assert!(err.to_string().contains("Probe"));
    assert_eq!(calls.probe(), 0);
    assert_eq!(calls.measure(), 0);
}

#[test]
fn file_without_audio_gets_empty_parameters() {
    let ws = Workspace::with_file("silent.mkv");
    let tools = FakeTools::new(PROBE_VIDEO_ONLY, &ebur128_output("-40.0"));
    let (ctx, _) = context(CheckOptions::new(&ws.input), tools);

    let outcome = run_check(&ctx).unwrap();

    assert!(outcome.plan.audio.is_empty());
    assert!(!outcome.report.passed);
    assert_eq!(outcome.report.adjustment_string, "17.0dB");
}

#[test]
fn unreadable_number_is_reported_unmeasured() {
    let ws = Workspace::with_file("show.mkv");
    let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-19,4"));
    let options = CheckOptions::new(&ws.input).with_autofix(true);
    let (ctx, calls) = context(options, tools);

    let outcome = run_check(&ctx).unwrap();

    assert!(!outcome.report.passed);
    assert_eq!(outcome.report.loudness, "");
    assert_eq!(outcome.report.adjustment, 0.0);
    assert_eq!(outcome.report.adjustment_string, "0.0dB");
    // A failed verdict with autofix still runs the (no-op gain) correction
    assert_eq!(calls.transcode(), 1);
}

#[test]
fn diagnostics_without_loudness_are_fatal() {
    let ws = Workspace::with_file("show.mkv");
    let tools = FakeTools::new(PROBE_AAC_STEREO, "Output #0, null, to 'pipe:':\n");
    let (ctx, _) = context(CheckOptions::new(&ws.input), tools);

    let err = run_check(&ctx).unwrap_err();

    assert!(matches!(
        err.step_error(),
        Some(StepError::Loudness(LoudnessError::NoMeasurement))
    ));
    assert!(err.to_string().contains("Measure"));
}

#[test]
fn probe_failure_is_fatal() {
    let ws = Workspace::with_file("show.mkv");
    let mut tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-23.0"));
    tools.probe_output = None;
    let (ctx, calls) = context(CheckOptions::new(&ws.input), tools);

    let err = run_check(&ctx).unwrap_err();

    assert!(matches!(
        err.step_error(),
        Some(StepError::Tool(ToolError::CommandFailed { exit_code: 1, .. }))
    ));
    assert_eq!(calls.measure(), 0);
}

#[test]
fn repeated_checks_give_identical_reports() {
    let ws = Workspace::with_file("show.mkv");

    let first = {
        let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-19.4"));
        let (ctx, _) = context(CheckOptions::new(&ws.input), tools);
        run_check(&ctx).unwrap()
    };
    let second = {
        let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-19.4"));
        let (ctx, _) = context(CheckOptions::new(&ws.input), tools);
        run_check(&ctx).unwrap()
    };

    assert_eq!(first.report, second.report);
    assert_eq!(first.plan, second.plan);
}

#[test]
fn outcome_renders_as_simple_report() {
    let ws = Workspace::with_file("show.mkv");
    let tools = FakeTools::new(PROBE_AAC_STEREO, &ebur128_output("-19.4"));
    let (ctx, _) = context(CheckOptions::new(&ws.input), tools);

    let outcome = run_check(&ctx).unwrap();
    let text = render(&outcome.report, ReportFormat::Simple).unwrap();

    assert_eq!(text, "show.mkv\nLoudness: -19.4\nAdjustment: -3.6dB\nPassed=false\n");
}
