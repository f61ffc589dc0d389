//! Pipeline step trait definition.
//!
//! All pipeline steps implement this trait, providing a consistent
//! interface for validation and execution.

use super::errors::StepResult;
use super::types::{CheckState, Context, StepOutcome};

/// Trait for pipeline steps.
///
/// The pipeline runner calls these methods in order:
///
/// 1. `validate_input` - Check preconditions before execution
/// 2. `execute` - Perform the step's work
/// 3. `validate_output` - Verify the step produced valid output
///
/// # Example
///
/// ```ignore
/// struct MeasureStep;
///
/// impl PipelineStep for MeasureStep {
///     fn name(&self) -> &str { "Measure" }
///
///     fn validate_input(&self, _ctx: &Context) -> StepResult<()> {
///         Ok(())
///     }
///
///     fn execute(&self, ctx: &Context, state: &mut CheckState) -> StepResult<StepOutcome> {
///         let diagnostics = ctx.tools.measure(ctx.input_path())?;
///         state.measurement = Some(extract_loudness(&diagnostics)?);
///         Ok(StepOutcome::Success)
///     }
///
///     fn validate_output(&self, _ctx: &Context, state: &CheckState) -> StepResult<()> {
///         if state.measurement.is_none() {
///             return Err(StepError::invalid_output("Measurement not recorded"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait PipelineStep: Send + Sync {
    /// Get the step name (for logging and error context).
    fn name(&self) -> &str;

    /// Validate inputs before execution.
    fn validate_input(&self, ctx: &Context) -> StepResult<()>;

    /// Execute the step's main work and record results in `state`.
    ///
    /// Returns `StepOutcome::Skipped` when the step decided not to run
    /// (not an error).
    fn execute(&self, ctx: &Context, state: &mut CheckState) -> StepResult<StepOutcome>;

    /// Validate outputs after `execute` returned `Success`.
    fn validate_output(&self, ctx: &Context, state: &CheckState) -> StepResult<()>;

    /// Human-readable description of what this step does, logged when
    /// the step starts.
    fn description(&self) -> &str {
        self.name()
    }
}
