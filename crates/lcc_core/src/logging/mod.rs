//! Logging infrastructure for the checker.
//!
//! This module provides:
//! - Global `tracing` subscriber setup honouring `RUST_LOG`
//! - A per-check logger mirroring messages into tracing and an optional file
//! - A tail buffer of external tool output for error diagnosis
//!
//! # Example
//!
//! ```no_run
//! use lcc_core::logging::{CheckLogger, LogConfig};
//!
//! let config = LogConfig::default();
//! let logger = CheckLogger::with_log_file("show.mkv", "/path/to/logs", config).unwrap();
//!
//! logger.phase("Probe");
//! logger.command("ffprobe -show_format -show_streams show.mkv");
//! logger.success("Check completed");
//! ```

mod check_logger;
mod types;

pub use check_logger::CheckLogger;
pub use types::{LogConfig, LogLevel, MessagePrefix};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize global tracing subscriber for application-wide logging.
///
/// This sets up a subscriber that:
/// - Respects RUST_LOG environment variable
/// - Falls back to the provided default level
/// - Outputs to stderr, keeping stdout free for the report
///
/// Should be called once at application startup.
pub fn init_tracing(default_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_to_filter_str(default_level)));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

/// Convert LogLevel to filter string.
fn level_to_filter_str(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}
