//! Plan step - builds the corrective re-encode plan.

use crate::correction::build_plan;
use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{CheckState, Context, StepOutcome};

/// Plan step.
///
/// A plan is built for every check, compliant or not. Whether it is
/// executed is decided by the Correct step.
pub struct PlanStep;

impl PlanStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlanStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for PlanStep {
    fn name(&self) -> &str {
        "Plan"
    }

    fn description(&self) -> &str {
        "Build the audio correction plan"
    }

    fn validate_input(&self, _ctx: &Context) -> StepResult<()> {
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut CheckState) -> StepResult<StepOutcome> {
        let audio = state
            .audio()
            .ok_or_else(|| StepError::precondition_failed("No probe results recorded"))?;
        let compliance = state
            .compliance
            .as_ref()
            .ok_or_else(|| StepError::precondition_failed("No compliance result recorded"))?;

        let plan = build_plan(ctx.input_path(), audio, compliance);
        ctx.logger.debug(&format!(
            "Correction: {} -> {} ({})",
            plan.input_path.display(),
            plan.output_path.display(),
            plan.volume_filter()
        ));

        state.plan = Some(plan);
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &CheckState) -> StepResult<()> {
        if state.plan.is_none() {
            return Err(StepError::invalid_output("Correction plan not recorded"));
        }
        Ok(())
    }
}
