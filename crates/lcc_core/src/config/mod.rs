//! Configuration management for the loudness checker.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//!
//! # Example
//!
//! ```no_run
//! use lcc_core::config::{ConfigManager, ConfigSection};
//! use lcc_core::models::ComplianceStandard;
//!
//! let mut config = ConfigManager::new(".config/loudness-check.toml");
//! config.load_optional().unwrap();
//!
//! config.settings_mut().check.standard = ComplianceStandard::AtscA85;
//! config.update_section(ConfigSection::Check).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{
    CheckSettings, ConfigSection, LoggingSettings, PathSettings, Settings, ToolSettings,
};
