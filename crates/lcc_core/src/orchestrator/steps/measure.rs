//! Measure step - runs the loudness pass and extracts integrated loudness.

use crate::loudness::extract_loudness;
use crate::models::MeasurementStatus;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{CheckState, Context, StepOutcome};

use super::log_tool_failure;

/// Measure step.
///
/// The diagnostics go into the logger tail so they can be shown if the
/// measurement cannot be read.
pub struct MeasureStep;

impl MeasureStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MeasureStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for MeasureStep {
    fn name(&self) -> &str {
        "Measure"
    }

    fn description(&self) -> &str {
        "Measure integrated loudness with the ebur128 filter"
    }

    fn validate_input(&self, _ctx: &Context) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut CheckState) -> StepResult<StepOutcome> {
        let path = ctx.input_path();
        ctx.logger.command(&format!(
            "ffmpeg -i {} -filter_complex ebur128 -f null -",
            path.display()
        ));

        let diagnostics = ctx.tools.measure(path).map_err(|e| {
            log_tool_failure(&ctx.logger, "ffmpeg", &e);
            e
        })?;
        ctx.logger.output_lines(&diagnostics);

        let measurement = extract_loudness(&diagnostics).map_err(|e| {
            ctx.logger.show_tail("ffmpeg output");
            e
        })?;

        match measurement.status() {
            MeasurementStatus::Measured => ctx.logger.info(&format!(
                "Integrated loudness: {} LUFS ({} reading(s))",
                measurement.raw, measurement.occurrences
            )),
            MeasurementStatus::Degraded => ctx.logger.warn(&format!(
                "Integrated loudness '{}' is not a number; file will be reported unmeasured",
                measurement.raw
            )),
        }

        state.measurement = Some(measurement);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &CheckState) -> StepResult<()> {
        if state.measurement.is_none() {
            return Err(StepError::invalid_output("Measurement not recorded"));
        }
        Ok(())
    }
}
