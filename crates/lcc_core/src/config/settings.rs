//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::logging::{LogConfig, LogLevel};
use crate::models::ComplianceStandard;
use crate::report::ReportFormat;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Check defaults.
    #[serde(default)]
    pub check: CheckSettings,

    /// External tool locations.
    #[serde(default)]
    pub tools: ToolSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Path-related settings.
    #[serde(default)]
    pub paths: PathSettings,
}

/// Defaults applied to every check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckSettings {
    /// Loudness standard to check against ("ebu" or "atsc").
    #[serde(default)]
    pub standard: ComplianceStandard,

    /// Transcode non-compliant files with the corrective gain.
    #[serde(default)]
    pub autofix: bool,

    /// Report format written to stdout.
    #[serde(default)]
    pub output_format: ReportFormat,
}

/// Locations of ffmpeg and ffprobe. Empty means search PATH.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolSettings {
    #[serde(default)]
    pub ffmpeg_path: String,

    #[serde(default)]
    pub ffprobe_path: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level for console and file output.
    #[serde(default)]
    pub level: LogLevel,

    /// Write a per-check log file into the logs folder.
    #[serde(default)]
    pub write_log_file: bool,

    /// Number of tool output lines to show when a tool fails.
    #[serde(default = "default_error_tail")]
    pub error_tail: u32,
}

fn default_error_tail() -> u32 {
    20
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            write_log_file: false,
            error_tail: default_error_tail(),
        }
    }
}

impl LoggingSettings {
    /// Build the per-check logger configuration.
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            level: self.level,
            compact: self.level > LogLevel::Debug,
            error_tail: self.error_tail as usize,
            ..LogConfig::default()
        }
    }
}

/// Path configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            logs_folder: default_logs_folder(),
        }
    }
}

/// Config sections for atomic updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Check,
    Tools,
    Logging,
    Paths,
}

impl ConfigSection {
    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Check => "check",
            ConfigSection::Tools => "tools",
            ConfigSection::Logging => "logging",
            ConfigSection::Paths => "paths",
        }
    }
}
