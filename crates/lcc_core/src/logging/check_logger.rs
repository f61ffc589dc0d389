//! Per-check logger with tracing and optional file output.
//!
//! Each check gets its own logger that:
//! - Forwards every message to the global `tracing` subscriber
//! - Optionally writes to a dedicated log file
//! - Maintains a tail buffer of tool output for error diagnosis

use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use super::types::{LogConfig, LogLevel, MessagePrefix};

/// Per-check logger.
pub struct CheckLogger {
    /// Check name (usually the input file name).
    check_name: String,
    /// Path to log file, when file output is enabled.
    log_path: Option<PathBuf>,
    /// File writer (buffered).
    file_writer: Mutex<Option<BufWriter<File>>>,
    /// Logging configuration.
    config: LogConfig,
    /// Tail buffer for recent tool output lines.
    tail_buffer: Mutex<VecDeque<String>>,
}

impl CheckLogger {
    /// Create a logger that only forwards to `tracing`.
    pub fn new(check_name: impl Into<String>, config: LogConfig) -> Self {
        let capacity = config.error_tail;
        Self {
            check_name: check_name.into(),
            log_path: None,
            file_writer: Mutex::new(None),
            config,
            tail_buffer: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Create a logger that also writes to `<log_dir>/<check_name>.log`.
    pub fn with_log_file(
        check_name: impl Into<String>,
        log_dir: impl AsRef<Path>,
        config: LogConfig,
    ) -> std::io::Result<Self> {
        let mut logger = Self::new(check_name, config);
        let log_dir = log_dir.as_ref();

        fs::create_dir_all(log_dir)?;

        let file_name = format!("{}.log", sanitize_filename(&logger.check_name));
        let log_path = log_dir.join(file_name);
        let file = File::create(&log_path)?;

        logger.file_writer = Mutex::new(Some(BufWriter::new(file)));
        logger.log_path = Some(log_path);
        Ok(logger)
    }

    /// Get the log file path, if file output is enabled.
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    /// Log a message at the specified level.
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.config.level {
            return;
        }

        self.emit(level, message);
        self.write_file(message);
    }

    /// Log an info message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a debug message.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log a warning message.
    pub fn warn(&self, message: &str) {
        let msg = MessagePrefix::Warning.format(message);
        self.log(LogLevel::Warn, &msg);
    }

    /// Log an error message.
    pub fn error(&self, message: &str) {
        let msg = MessagePrefix::Error.format(message);
        self.log(LogLevel::Error, &msg);
    }

    /// Log a command being executed.
    pub fn command(&self, command: &str) {
        let msg = MessagePrefix::Command.format(command);
        self.log(LogLevel::Debug, &msg);
    }

    /// Log a phase marker.
    pub fn phase(&self, phase_name: &str) {
        let msg = MessagePrefix::Phase.format(phase_name);
        self.log(LogLevel::Debug, &msg);
    }

    /// Log a success message.
    pub fn success(&self, message: &str) {
        let msg = MessagePrefix::Success.format(message);
        self.log(LogLevel::Info, &msg);
    }

    /// Record a line of external tool output.
    ///
    /// In compact mode, these only go to the tail buffer.
    pub fn output_line(&self, line: &str) {
        {
            let mut buffer = self.tail_buffer.lock();
            if self.config.error_tail == 0 {
                buffer.clear();
            } else {
                while buffer.len() >= self.config.error_tail {
                    buffer.pop_front();
                }
                buffer.push_back(line.to_string());
            }
        }

        if self.config.compact {
            return;
        }

        self.log(LogLevel::Debug, &format!("[tool] {}", line));
    }

    /// Record every line of a block of tool output.
    pub fn output_lines(&self, text: &str) {
        for line in text.lines() {
            self.output_line(line);
        }
    }

    /// Show the tail buffer (typically after an error).
    pub fn show_tail(&self, header: &str) {
        let buffer = self.tail_buffer.lock();
        if buffer.is_empty() {
            return;
        }

        self.emit(LogLevel::Error, &format!("[{}/tail]", header));
        self.write_file(&format!("[{}/tail]", header));
        for line in buffer.iter() {
            self.emit(LogLevel::Error, line);
            self.write_file(line);
        }
    }

    /// Flush the log file.
    pub fn flush(&self) {
        if let Some(ref mut writer) = *self.file_writer.lock() {
            let _ = writer.flush();
        }
    }

    /// Close the logger and release the file.
    pub fn close(&self) {
        self.flush();
        *self.file_writer.lock() = None;
    }

    /// Forward a message to the global tracing subscriber.
    fn emit(&self, level: LogLevel, message: &str) {
        let check = self.check_name.as_str();
        match level {
            LogLevel::Trace => tracing::trace!(check, "{}", message),
            LogLevel::Debug => tracing::debug!(check, "{}", message),
            LogLevel::Info => tracing::info!(check, "{}", message),
            LogLevel::Warn => tracing::warn!(check, "{}", message),
            LogLevel::Error => tracing::error!(check, "{}", message),
        }
    }

    /// Append a line to the log file (if any).
    fn write_file(&self, message: &str) {
        if let Some(ref mut writer) = *self.file_writer.lock() {
            let line = if self.config.show_timestamps {
                format!("[{}] {}", Local::now().format("%H:%M:%S"), message)
            } else {
                message.to_string()
            };
            let _ = writeln!(writer, "{}", line);
        }
    }
}

impl Drop for CheckLogger {
    fn drop(&mut self) {
        self.close();
    }
}

/// Sanitize a string to be safe for use as a filename.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            _ => c,
        })
        .collect()
}
