//! Corrective re-encode planning.
//!
//! Combines the audio parameters selected from the probe report with the
//! gain from the compliance check into a [`CorrectionPlan`], and renders
//! that plan as an ffmpeg argument list.
//!
//! The plan only describes the operation. Running it is up to a
//! [`MediaTools`](crate::tools::MediaTools) implementation, and only
//! happens when a check failed and auto-correction was requested.
//!
//! [`CorrectionPlan`]: crate::models::CorrectionPlan

mod plan;
mod transcode;

pub use plan::{build_plan, derive_output_path, OUTPUT_SUFFIX};
pub use transcode::TranscodeArgsBuilder;
