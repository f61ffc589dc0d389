//! Correct step - re-encodes the audio with the corrective gain.

use crate::correction::TranscodeArgsBuilder;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{CheckState, Context, StepOutcome};

use super::log_tool_failure;

/// Correct step.
///
/// Runs only when the check failed and autofix was requested. Video is
/// copied, audio is re-encoded with its original parameters.
pub struct CorrectStep;

impl CorrectStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CorrectStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for CorrectStep {
    fn name(&self) -> &str {
        "Correct"
    }

    fn description(&self) -> &str {
        "Apply the corrective gain with ffmpeg"
    }

    fn validate_input(&self, _ctx: &Context) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut CheckState) -> StepResult<StepOutcome> {
        if state.passed() {
            return Ok(StepOutcome::Skipped("file is compliant".to_string()));
        }
        if !ctx.options.autofix {
            return Ok(StepOutcome::Skipped("autofix not requested".to_string()));
        }

        let plan = state
            .plan
            .as_ref()
            .ok_or_else(|| StepError::precondition_failed("No correction plan recorded"))?;

        ctx.logger.command(&TranscodeArgsBuilder::new(plan).command_line("ffmpeg"));

        let outcome = ctx.tools.transcode(plan).map_err(|e| {
            log_tool_failure(&ctx.logger, "ffmpeg", &e);
            e
        })?;

        ctx.logger.success(&format!(
            "Corrected file written to {}",
            outcome.output_path.display()
        ));

        state.correction = Some(outcome);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &CheckState) -> StepResult<()> {
        let outcome = state
            .correction
            .as_ref()
            .ok_or_else(|| StepError::invalid_output("Transcode outcome not recorded"))?;

        if !outcome.output_path.exists() {
            return Err(StepError::invalid_output(format!(
                "Corrected file missing: {}",
                outcome.output_path.display()
            )));
        }
        Ok(())
    }
}
