//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use lcc_core::config::Settings;
use lcc_core::logging::LogLevel;
use lcc_core::models::ComplianceStandard;
use lcc_core::report::ReportFormat;

/// Command-line arguments for loudness-check
#[derive(Parser, Debug)]
#[command(name = "loudness-check")]
#[command(about = "Check a media file's integrated loudness against EBU R128 or ATSC A/85")]
#[command(version)]
pub struct Args {
    /// Full path of the file to check
    #[arg(short, long)]
    pub filename: PathBuf,

    /// Loudness standard: ebu or atsc
    #[arg(long, value_parser = parse_standard)]
    pub standard: Option<ComplianceStandard>,

    /// Use EBU R128 (true) or ATSC A/85 (false); --standard takes precedence
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub ebu: Option<bool>,

    /// Re-encode the audio with the corrective gain when the check fails;
    /// `--autofix false` overrides the config file
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub autofix: Option<bool>,

    /// Report format: json, xml, simple or text
    #[arg(short, long)]
    pub output: Option<String>,

    /// Config file
    #[arg(
        long,
        default_value = ".config/loudness-check.toml",
        env = "LOUDNESS_CHECK_CONFIG"
    )]
    pub config: PathBuf,

    /// Store the effective check settings back into the config file
    #[arg(long)]
    pub save_config: bool,

    /// Path to the ffmpeg executable
    #[arg(long, env = "LOUDNESS_CHECK_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,

    /// Path to the ffprobe executable
    #[arg(long, env = "LOUDNESS_CHECK_FFPROBE")]
    pub ffprobe: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Overlay command-line values onto settings loaded from the config file.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(standard) = self.standard {
            settings.check.standard = standard;
        } else if let Some(ebu) = self.ebu {
            settings.check.standard = ComplianceStandard::from_ebu_flag(ebu);
        }

        if let Some(autofix) = self.autofix {
            settings.check.autofix = autofix;
        }

        if let Some(ref output) = self.output {
            settings.check.output_format = ReportFormat::from_name(output);
        }

        if let Some(ref path) = self.ffmpeg {
            settings.tools.ffmpeg_path = path.to_string_lossy().to_string();
        }
        if let Some(ref path) = self.ffprobe {
            settings.tools.ffprobe_path = path.to_string_lossy().to_string();
        }

        if self.verbose {
            settings.logging.level = LogLevel::Debug;
        }
    }
}

fn parse_standard(value: &str) -> Result<ComplianceStandard, String> {
    ComplianceStandard::from_name(value)
        .ok_or_else(|| format!("unknown standard '{}' (expected ebu or atsc)", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    #[test]
    fn filename_is_required() {
        assert!(Args::try_parse_from(["loudness-check"]).is_err());
    }

    #[test]
    fn defaults_leave_settings_untouched() {
        let args = parse(&["loudness-check", "-f", "show.mkv"]);
        let mut settings = Settings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn ebu_false_selects_atsc() {
        let args = parse(&["loudness-check", "-f", "show.mkv", "--ebu", "false"]);
        let mut settings = Settings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings.check.standard, ComplianceStandard::AtscA85);
    }

    #[test]
    fn standard_wins_over_ebu_flag() {
        let args = parse(&[
            "loudness-check",
            "-f",
            "show.mkv",
            "--ebu",
            "false",
            "--standard",
            "ebu",
        ]);
        let mut settings = Settings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings.check.standard, ComplianceStandard::EbuR128);
    }

    #[test]
    fn unknown_standard_is_rejected() {
        let args = ["loudness-check", "-f", "a.mkv", "--standard", "itu"];
        assert!(Args::try_parse_from(args).is_err());
    }

    #[test]
    fn unknown_output_falls_back_to_text() {
        let args = parse(&[
            "loudness-check",
            "-f",
            "show.mkv",
            "-o",
            "yaml",
            "--autofix",
            "-v",
        ]);
        let mut settings = Settings::default();
        args.apply_to(&mut settings);
        assert_eq!(settings.check.output_format, ReportFormat::Text);
        assert!(settings.check.autofix);
        assert_eq!(settings.logging.level, LogLevel::Debug);
    }

    #[test]
    fn autofix_false_overrides_config() {
        let args = parse(&["loudness-check", "-f", "show.mkv", "--autofix", "false"]);
        let mut settings = Settings::default();
        settings.check.autofix = true;
        args.apply_to(&mut settings);
        assert!(!settings.check.autofix);
    }

    #[test]
    fn bare_autofix_enables_it() {
        let args = parse(&["loudness-check", "--autofix", "-f", "show.mkv"]);
        assert_eq!(args.autofix, Some(true));

        let args = parse(&["loudness-check", "-f", "show.mkv"]);
        let mut settings = Settings::default();
        settings.check.autofix = true;
        args.apply_to(&mut settings);
        assert!(settings.check.autofix);
    }
}
