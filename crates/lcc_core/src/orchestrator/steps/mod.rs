//! Pipeline step implementations.
//!
//! Each step handles one phase of a loudness check.

mod correct;
mod evaluate;
mod measure;
mod plan;
mod probe;

pub use correct::CorrectStep;
pub use evaluate::EvaluateStep;
pub use measure::MeasureStep;
pub use plan::PlanStep;
pub use probe::ProbeStep;

use crate::logging::CheckLogger;
use crate::tools::ToolError;

/// Dump a failed tool's captured output through the logger tail.
fn log_tool_failure(logger: &CheckLogger, tool: &str, err: &ToolError) {
    if let Some(output) = err.tool_output() {
        logger.output_lines(output);
        logger.show_tail(&format!("{} output", tool));
    }
}
