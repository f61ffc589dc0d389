//! Pipeline orchestrator for running a loudness check.
//!
//! # Architecture
//!
//! ```text
//! Pipeline
//!     ├── Step: Probe     (file check, ffprobe, audio selection)
//!     ├── Step: Measure   (ffmpeg ebur128, integrated loudness)
//!     ├── Step: Evaluate  (verdict and corrective gain)
//!     ├── Step: Plan      (output path and re-encode parameters)
//!     └── Step: Correct   (optional re-encode)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use lcc_core::logging::{CheckLogger, LogConfig};
//! use lcc_core::orchestrator::{run_check, CheckOptions, Context};
//! use lcc_core::tools::FfmpegTools;
//!
//! let options = CheckOptions::new("show.mkv");
//! let logger = Arc::new(CheckLogger::new("show.mkv", LogConfig::default()));
//! let ctx = Context::new(options, Box::new(FfmpegTools::new()), logger);
//!
//! let outcome = run_check(&ctx).unwrap();
//! println!("passed: {}", outcome.report.passed);
//! ```

mod errors;
mod pipeline;
mod step;
pub mod steps;
mod types;

pub use errors::{PipelineError, PipelineResult, StepError, StepResult};
pub use pipeline::{Pipeline, PipelineRunResult};
pub use step::PipelineStep;
pub use steps::{CorrectStep, EvaluateStep, MeasureStep, PlanStep, ProbeStep};
pub use types::{check_name_for, CheckOptions, CheckState, Context, ProbeOutput, StepOutcome};

use chrono::Local;

use crate::models::{ComplianceReport, ComplianceResult, CorrectionPlan};
use crate::tools::TranscodeOutcome;

/// Create the standard check pipeline.
///
/// 1. Probe - confirm the file exists, read metadata, select audio
/// 2. Measure - integrated loudness from the ebur128 pass
/// 3. Evaluate - verdict against the selected standard
/// 4. Plan - corrective re-encode plan
/// 5. Correct - re-encode (only when failed and autofix requested)
pub fn create_standard_pipeline() -> Pipeline {
    Pipeline::new()
        .with_step(ProbeStep::new())
        .with_step(MeasureStep::new())
        .with_step(EvaluateStep::new())
        .with_step(PlanStep::new())
        .with_step(CorrectStep::new())
}

/// Everything a completed check produced.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    /// Record for the report renderer.
    pub report: ComplianceReport,
    /// Verdict and corrective gain.
    pub compliance: ComplianceResult,
    /// Correction plan (built whether or not it was executed).
    pub plan: CorrectionPlan,
    /// Transcode record, when the Correct step ran.
    pub correction: Option<TranscodeOutcome>,
    /// Steps that completed.
    pub steps_completed: Vec<String>,
    /// Steps that were skipped.
    pub steps_skipped: Vec<String>,
}

/// Run the standard pipeline for one file.
///
/// Any fatal error aborts the check; nothing partial is returned.
pub fn run_check(ctx: &Context) -> PipelineResult<CheckOutcome> {
    let check_id = format!("{}-{}", ctx.check_name, Local::now().format("%Y%m%d-%H%M%S"));
    let mut state = CheckState::new(check_id);

    ctx.logger.info(&format!(
        "Checking {} against {}",
        ctx.input_path().display(),
        ctx.standard()
    ));

    let run = create_standard_pipeline().run(ctx, &mut state)?;
    ctx.logger.flush();

    let compliance = state
        .compliance
        .take()
        .ok_or_else(|| PipelineError::incomplete(&ctx.check_name, "no compliance result"))?;
    let plan = state
        .plan
        .take()
        .ok_or_else(|| PipelineError::incomplete(&ctx.check_name, "no correction plan"))?;

    let report = ComplianceReport::new(&ctx.check_name, &compliance, ctx.standard());

    Ok(CheckOutcome {
        report,
        compliance,
        plan,
        correction: state.correction.take(),
        steps_completed: run.steps_completed,
        steps_skipped: run.steps_skipped,
    })
}
