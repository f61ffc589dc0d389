//! ffmpeg command options builder for the corrective transcode.

use crate::models::CorrectionPlan;

/// Builder for the corrective ffmpeg command line.
///
/// Video is stream-copied; audio is re-encoded with the preserved codec,
/// bitrate, channel count and sample rate, through a `volume` filter.
/// The destination is overwritten unconditionally.
pub struct TranscodeArgsBuilder<'a> {
    plan: &'a CorrectionPlan,
}

impl<'a> TranscodeArgsBuilder<'a> {
    /// Create a new options builder.
    pub fn new(plan: &'a CorrectionPlan) -> Self {
        Self { plan }
    }

    /// Build the ffmpeg argument tokens (without the program name).
    pub fn build(&self) -> Vec<String> {
        let mut tokens = Vec::new();

        tokens.push("-threads".to_string());
        tokens.push("auto".to_string());

        tokens.push("-i".to_string());
        tokens.push(self.plan.input_path.to_string_lossy().to_string());

        tokens.push("-vcodec".to_string());
        tokens.push("copy".to_string());

        self.add_audio_options(&mut tokens);

        tokens.push("-filter_complex".to_string());
        tokens.push(self.plan.volume_filter());

        tokens.push("-y".to_string());
        tokens.push(self.plan.output_path.to_string_lossy().to_string());

        tokens
    }

    /// Add the audio encoding options, passed through verbatim.
    fn add_audio_options(&self, tokens: &mut Vec<String>) {
        let audio = &self.plan.audio;

        tokens.push("-acodec".to_string());
        tokens.push(audio.codec.clone());
        tokens.push("-b:a".to_string());
        tokens.push(audio.bit_rate.clone());
        tokens.push("-ac".to_string());
        tokens.push(audio.channels.to_string());
        tokens.push("-ar".to_string());
        tokens.push(audio.sample_rate.clone());

        // Allow experimental encoders (older native aac) and keep quality maxed
        tokens.push("-strict".to_string());
        tokens.push("experimental".to_string());
        tokens.push("-q:v".to_string());
        tokens.push("1".to_string());
        tokens.push("-q:a".to_string());
        tokens.push("1".to_string());
    }

    /// Format the tokens as a single shell-like line for logging.
    pub fn command_line(&self, program: &str) -> String {
        format!("{} {}", program, self.build().join(" "))
    }
}
