//! loudness-check - Main entry point
//!
//! Probes a media file, measures its integrated loudness, reports compliance
//! with EBU R128 or ATSC A/85 and optionally writes a gain-corrected copy.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::info;

use lcc_core::config::{ConfigManager, ConfigSection, Settings};
use lcc_core::logging::{init_tracing, CheckLogger};
use lcc_core::orchestrator::{check_name_for, run_check, CheckOptions, Context};
use lcc_core::report::render;
use lcc_core::tools::FfmpegTools;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ConfigManager::new(&args.config);
    config
        .load_optional()
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;
    args.apply_to(config.settings_mut());

    if args.save_config {
        config
            .update_section(ConfigSection::Check)
            .with_context(|| format!("Failed to save config {}", args.config.display()))?;
    }

    let settings = config.settings().clone();
    init_tracing(settings.logging.level);

    let check_name = check_name_for(&args.filename);
    let log_config = settings.logging.to_log_config();
    let logger = if settings.logging.write_log_file {
        CheckLogger::with_log_file(&check_name, config.logs_folder(), log_config)
            .context("Failed to create log file")?
    } else {
        CheckLogger::new(&check_name, log_config)
    };
    if let Some(path) = logger.log_path() {
        info!("Logging to {}", path.display());
    }

    let options = CheckOptions::new(&args.filename)
        .with_standard(settings.check.standard)
        .with_autofix(settings.check.autofix);
    let ctx = Context::new(options, Box::new(build_tools(&settings)), Arc::new(logger));

    let outcome = run_check(&ctx)?;

    let report = render(&outcome.report, settings.check.output_format)
        .context("Failed to render report")?;
    print!("{}", report);

    if let Some(correction) = outcome.correction {
        info!("Corrected file: {}", correction.output_path.display());
    }

    Ok(())
}

/// Build the ffmpeg/ffprobe adapter from configured paths.
fn build_tools(settings: &Settings) -> FfmpegTools {
    let mut tools = FfmpegTools::new();
    if !settings.tools.ffmpeg_path.is_empty() {
        tools = tools.with_ffmpeg_path(PathBuf::from(&settings.tools.ffmpeg_path));
    }
    if !settings.tools.ffprobe_path.is_empty() {
        tools = tools.with_ffprobe_path(PathBuf::from(&settings.tools.ffprobe_path));
    }
    tools
}
