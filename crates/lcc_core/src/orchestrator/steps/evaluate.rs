//! Evaluate step - compares the measurement with the selected standard.

use crate::loudness::evaluate_measurement;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{CheckState, Context, StepOutcome};

pub struct EvaluateStep;

impl EvaluateStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EvaluateStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for EvaluateStep {
    fn name(&self) -> &str {
        "Evaluate"
    }

    fn description(&self) -> &str {
        "Check the measured loudness against the standard"
    }

    fn validate_input(&self, _ctx: &Context) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut CheckState) -> StepResult<StepOutcome> {
        let measurement = state
            .measurement
            .as_ref()
            .ok_or_else(|| StepError::precondition_failed("No loudness measurement recorded"))?;

        let standard = ctx.standard();
        let result = evaluate_measurement(measurement, standard);

        if result.passed {
            ctx.logger.success(&format!(
                "{} LUFS is within {} [{}, {}]",
                result.measured_lufs,
                standard,
                standard.tolerance_low(),
                standard.tolerance_high()
            ));
        } else if result.measured_lufs.is_empty() {
            ctx.logger.warn(&format!("Not compliant to {}: loudness unmeasured", standard));
        } else {
            ctx.logger.info(&format!(
                "Not compliant to {}: {} LUFS, recommended adjustment {}",
                standard,
                result.measured_lufs,
                result.adjustment_string()
            ));
        }

        state.compliance = Some(result);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &CheckState) -> StepResult<()> {
        if state.compliance.is_none() {
            return Err(StepError::invalid_output("Compliance result not recorded"));
        }
        Ok(())
    }
}
