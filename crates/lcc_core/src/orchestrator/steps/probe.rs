//! Probe step - reads stream metadata and selects the audio parameters.

use crate::orchestrator::errors::{StepError, StepResult};
use crate::orchestrator::step::PipelineStep;
use crate::orchestrator::types::{CheckState, Context, ProbeOutput, StepOutcome};
use crate::probe::{parse_probe_report, select_audio_params};
use crate::tools::ToolError;

use super::log_tool_failure;

/// Probe step.
///
/// Confirms the input exists, runs the probe tool and keeps the parameters
/// of the last audio stream for a possible re-encode.
pub struct ProbeStep;

impl ProbeStep {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ProbeStep {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineStep for ProbeStep {
    fn name(&self) -> &str {
        "Probe"
    }

    fn description(&self) -> &str {
        "Read stream and container metadata with ffprobe"
    }

    fn validate_input(&self, ctx: &Context) -> StepResult<()> {
        let path = ctx.input_path();
        if !path.exists() {
            return Err(ToolError::FileNotFound(path.to_path_buf()).into());
        }
        Ok(())
    }

    fn execute(&self, ctx: &Context, state: &mut CheckState) -> StepResult<StepOutcome> {
        let path = ctx.input_path();
        ctx.logger.command(&format!(
            "ffprobe -show_format -show_streams -print_format json=c=1 {}",
            path.display()
        ));

        let text = ctx.tools.probe(path).map_err(|e| {
            log_tool_failure(&ctx.logger, "ffprobe", &e);
            e
        })?;

        let report = parse_probe_report(&text);
        let audio = select_audio_params(&report);

        ctx.logger.info(&format!(
            "Found {} stream(s), {} audio",
            report.streams.len(),
            report.audio_stream_count()
        ));
        if audio.is_empty() {
            ctx.logger.warn("No audio stream found; correction parameters will be empty");
        } else {
            ctx.logger.debug(&format!(
                "Audio: codec={} bit_rate={} sample_rate={} channels={}",
                audio.codec, audio.bit_rate, audio.sample_rate, audio.channels
            ));
        }

        state.probe = Some(ProbeOutput { report, audio });
        Ok(StepOutcome::Success)
    }

    fn validate_output(&self, _ctx: &Context, state: &CheckState) -> StepResult<()> {
        if state.probe.is_none() {
            return Err(StepError::invalid_output("Probe results not recorded"));
        }
        Ok(())
    }
}
