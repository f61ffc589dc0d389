//! ffprobe/ffmpeg-backed implementation of [`MediaTools`].

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::errors::{ToolError, ToolResult};
use super::locate::resolve_tool;
use super::{MediaTools, TranscodeOutcome};
use crate::correction::TranscodeArgsBuilder;
use crate::models::CorrectionPlan;

const FFPROBE: &str = "ffprobe";
const FFMPEG: &str = "ffmpeg";

/// Runs ffprobe and ffmpeg as blocking child processes.
///
/// Executables are resolved on every call, from the configured paths or
/// from `PATH`.
#[derive(Debug, Clone, Default)]
pub struct FfmpegTools {
    /// Path to ffmpeg executable (None = find in PATH).
    ffmpeg_path: Option<PathBuf>,
    /// Path to ffprobe executable (None = find in PATH).
    ffprobe_path: Option<PathBuf>,
}

impl FfmpegTools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom path to the ffmpeg executable.
    pub fn with_ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffmpeg_path = Some(path.into());
        self
    }

    /// Set a custom path to the ffprobe executable.
    pub fn with_ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.ffprobe_path = Some(path.into());
        self
    }

    fn ffmpeg(&self) -> ToolResult<PathBuf> {
        resolve_tool(FFMPEG, self.ffmpeg_path.as_deref())
    }

    fn ffprobe(&self) -> ToolResult<PathBuf> {
        resolve_tool(FFPROBE, self.ffprobe_path.as_deref())
    }
}

fn ensure_exists(path: &Path) -> ToolResult<()> {
    if !path.exists() {
        return Err(ToolError::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

impl MediaTools for FfmpegTools {
    fn probe(&self, path: &Path) -> ToolResult<String> {
        ensure_exists(path)?;
        let ffprobe = self.ffprobe()?;

        let mut cmd = Command::new(&ffprobe);
        cmd.args(["-show_format", "-show_streams", "-print_format", "json=c=1"])
            .arg(path);

        tracing::debug!("Running ffprobe: {:?}", cmd);

        let output = cmd
            .output()
            .map_err(|e| ToolError::invocation_failed(FFPROBE, format!("Failed to run: {}", e)))?;

        if !output.status.success() {
            return Err(ToolError::command_failed(
                FFPROBE,
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        if output.stdout.is_empty() {
            return Err(ToolError::invocation_failed(FFPROBE, "produced no output"));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    fn measure(&self, path: &Path) -> ToolResult<String> {
        ensure_exists(path)?;
        let ffmpeg = self.ffmpeg()?;

        // The ebur128 filter reports on stderr; the decoded stream is discarded
        let mut cmd = Command::new(&ffmpeg);
        cmd.arg("-i")
            .arg(path)
            .args(["-filter_complex", "ebur128", "-f", "null", "-"])
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        tracing::debug!("Running ffmpeg (ebur128): {:?}", cmd);

        let output = cmd
            .output()
            .map_err(|e| ToolError::invocation_failed(FFMPEG, format!("Failed to run: {}", e)))?;

        let diagnostics = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            return Err(ToolError::command_failed(
                FFMPEG,
                output.status.code().unwrap_or(-1),
                diagnostics,
            ));
        }

        if diagnostics.is_empty() {
            return Err(ToolError::invocation_failed(FFMPEG, "produced no diagnostics"));
        }

        tracing::debug!("ffmpeg produced {} lines of diagnostics", diagnostics.lines().count());
        Ok(diagnostics)
    }

    fn transcode(&self, plan: &CorrectionPlan) -> ToolResult<TranscodeOutcome> {
        ensure_exists(&plan.input_path)?;
        let ffmpeg = self.ffmpeg()?;

        let builder = TranscodeArgsBuilder::new(plan);
        let tokens = builder.build();
        let command = builder.command_line(&ffmpeg.to_string_lossy());

        tracing::debug!("Running ffmpeg (correction): {}", command);

        let output = Command::new(&ffmpeg)
            .args(&tokens)
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ToolError::invocation_failed(FFMPEG, format!("Failed to run: {}", e)))?;

        let exit_code = output.status.code().unwrap_or(-1);
        if !output.status.success() {
            return Err(ToolError::command_failed(
                FFMPEG,
                exit_code,
                String::from_utf8_lossy(&output.stderr).to_string(),
            ));
        }

        Ok(TranscodeOutcome {
            output_path: plan.output_path.clone(),
            exit_code,
            command,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_nonexistent_file() {
        let tools = FfmpegTools::new();
        let result = tools.probe(Path::new("/nonexistent/file.mkv"));
        assert!(matches!(result, Err(ToolError::FileNotFound(_))));
    }

    #[test]
    fn measure_nonexistent_file() {
        let tools = FfmpegTools::new();
        let result = tools.measure(Path::new("/nonexistent/file.mkv"));
        assert!(matches!(result, Err(ToolError::FileNotFound(_))));
    }

    #[test]
    fn missing_configured_tool_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("show.mkv");
        std::fs::write(&input, b"").unwrap();

        let tools = FfmpegTools::new().with_ffprobe_path("/nonexistent/ffprobe");
        let result = tools.probe(&input);
        assert!(matches!(result, Err(ToolError::ToolUnavailable { .. })));
    }
}
