//! Shared fixtures for pipeline tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lcc_core::logging::{CheckLogger, LogConfig};
use lcc_core::models::CorrectionPlan;
use lcc_core::orchestrator::{CheckOptions, Context};
use lcc_core::tools::{MediaTools, ToolError, ToolResult, TranscodeOutcome};
use tempfile::TempDir;

const INVALID_DATA: &str = "Invalid data found when processing input";

/// ffprobe output for a file with one video and one AAC stereo stream.
pub const PROBE_AAC_STEREO: &str = r#"{
    "streams": [
        {
            "index": 0,
            "codec_name": "h264",
            "codec_type": "video",
            "width": 1920,
            "height": 1080,
            "r_frame_rate": "25/1"
        },
        {
            "index": 1,
            "codec_name": "aac",
            "codec_type": "audio",
            "sample_fmt": "fltp",
            "sample_rate": "48000",
            "channels": 2,
            "bit_rate": "128000",
            "tags": { "language": "eng" }
        }
    ],
    "format": {
        "filename": "show.mkv",
        "nb_streams": 2,
        "format_name": "matroska,webm",
        "duration": "1800.000000"
    }
}"#;

/// ffprobe output for a video-only file.
pub const PROBE_VIDEO_ONLY: &str = r#"{
    "streams": [
        { "index": 0, "codec_name": "h264", "codec_type": "video" }
    ],
    "format": { "filename": "silent.mkv", "nb_streams": 1 }
}"#;

/// ebur128 stderr whose summary carries the given integrated value.
pub fn ebur128_output(integrated: &str) -> String {
    format!(
        "\
Input #0, matroska,webm, from 'show.mkv':
  Duration: 00:30:00.00, start: 0.000000, bitrate: 5120 kb/s
[Parsed_ebur128_0 @ 0x5581] t: 0.4       TARGET:-23 LUFS    M: -21.3 S:-120.7     I: -21.3 LUFS       LRA:   0.0 LU
[Parsed_ebur128_0 @ 0x5581] t: 0.5       TARGET:-23 LUFS    M: -20.8 S:-120.7     I: -20.9 LUFS       LRA:   0.0 LU
[Parsed_ebur128_0 @ 0x5581] Summary:

  Integrated loudness:
    I:         {} LUFS
    Threshold: -30.1 LUFS

  Loudness range:
    LRA:         6.2 LU
    Threshold: -40.2 LUFS
",
        integrated
    )
}

/// In-memory `MediaTools` returning fixture text.
///
/// `None` for probe or measure output makes that call fail with a non-zero
/// exit. Transcode writes an empty file at the planned output path.
pub struct FakeTools {
    pub probe_output: Option<String>,
    pub measure_output: Option<String>,
    pub calls: Arc<ToolCalls>,
}

/// Per-operation call counters, shared with the test after the tools move
/// into the context.
#[derive(Default)]
pub struct ToolCalls {
    pub probe: AtomicUsize,
    pub measure: AtomicUsize,
    pub transcode: AtomicUsize,
}

impl ToolCalls {
    pub fn probe(&self) -> usize {
        self.probe.load(Ordering::SeqCst)
    }

    pub fn measure(&self) -> usize {
        self.measure.load(Ordering::SeqCst)
    }

    pub fn transcode(&self) -> usize {
        self.transcode.load(Ordering::SeqCst)
    }
}

impl FakeTools {
    pub fn new(probe: &str, measure: &str) -> Self {
        Self {
            probe_output: Some(probe.to_string()),
            measure_output: Some(measure.to_string()),
            calls: Arc::new(ToolCalls::default()),
        }
    }
}

impl MediaTools for FakeTools {
    fn probe(&self, _path: &Path) -> ToolResult<String> {
        self.calls.probe.fetch_add(1, Ordering::SeqCst);
        self.probe_output
            .clone()
            .ok_or_else(|| ToolError::command_failed("ffprobe", 1, INVALID_DATA))
    }

    fn measure(&self, _path: &Path) -> ToolResult<String> {
        self.calls.measure.fetch_add(1, Ordering::SeqCst);
        self.measure_output
            .clone()
            .ok_or_else(|| ToolError::command_failed("ffmpeg", 1, INVALID_DATA))
    }

    fn transcode(&self, plan: &CorrectionPlan) -> ToolResult<TranscodeOutcome> {
        self.calls.transcode.fetch_add(1, Ordering::SeqCst);
        fs::write(&plan.output_path, b"")
            .map_err(|e| ToolError::invocation_failed("ffmpeg", e.to_string()))?;
        Ok(TranscodeOutcome {
            output_path: plan.output_path.clone(),
            exit_code: 0,
            command: "ffmpeg (fake)".to_string(),
        })
    }
}

/// A temp directory holding an (empty) input file.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
}

impl Workspace {
    pub fn with_file(name: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join(name);
        fs::write(&input, b"").unwrap();
        Self { dir, input }
    }
}

/// Build a context around fake tools, returning the shared call counters.
pub fn context(options: CheckOptions, tools: FakeTools) -> (Context, Arc<ToolCalls>) {
    let calls = Arc::clone(&tools.calls);
    let name = options.input_path.to_string_lossy().to_string();
    let logger = Arc::new(CheckLogger::new(name, LogConfig::default()));
    (Context::new(options, Box::new(tools), logger), calls)
}
