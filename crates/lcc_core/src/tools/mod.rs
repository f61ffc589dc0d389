//! External media tools.
//!
//! The decision engine never spawns processes itself. Everything it needs
//! from the outside world goes through the narrow [`MediaTools`] trait:
//!
//! - `probe(path)` → JSON stream/format report
//! - `measure(path)` → loudness diagnostics (free text)
//! - `transcode(plan)` → corrected file on disk
//!
//! [`FfmpegTools`] implements it with `ffprobe`/`ffmpeg` child processes;
//! tests substitute fixtures.

mod errors;
mod ffmpeg;
mod locate;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::models::CorrectionPlan;

pub use errors::{ToolError, ToolResult};
pub use ffmpeg::FfmpegTools;
pub use locate::{find_in_path, resolve_tool};

/// Capability interface over the external probe, measurement and
/// transcoding tools.
pub trait MediaTools {
    /// Return the structured (JSON) probe report for a file.
    fn probe(&self, path: &Path) -> ToolResult<String>;

    /// Run a loudness measurement pass and return its diagnostic text.
    fn measure(&self, path: &Path) -> ToolResult<String>;

    /// Perform the corrective re-encode described by `plan`.
    fn transcode(&self, plan: &CorrectionPlan) -> ToolResult<TranscodeOutcome>;
}

/// Record of a completed corrective transcode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscodeOutcome {
    /// Path of the corrected file.
    pub output_path: PathBuf,
    /// Transcoder exit code.
    pub exit_code: i32,
    /// Command line that was run.
    pub command: String,
}
