//! Error types for external tool invocation.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating or running an external tool.
///
/// All of these are fatal for a check.
#[derive(Error, Debug)]
pub enum ToolError {
    /// The input file does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The tool could not be located.
    #[error("Required tool '{tool}' not found")]
    ToolUnavailable { tool: String },

    /// The tool could not be started or produced no usable output.
    #[error("{tool} execution failed: {message}")]
    InvocationFailed { tool: String, message: String },

    /// The tool ran but exited abnormally.
    #[error("{tool} failed with exit code {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },
}

impl ToolError {
    /// Create a tool unavailable error.
    pub fn unavailable(tool: impl Into<String>) -> Self {
        Self::ToolUnavailable { tool: tool.into() }
    }

    /// Create an invocation failed error.
    pub fn invocation_failed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvocationFailed {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Create a command failed error.
    pub fn command_failed(
        tool: impl Into<String>,
        exit_code: i32,
        message: impl Into<String>,
    ) -> Self {
        Self::CommandFailed {
            tool: tool.into(),
            exit_code,
            message: message.into(),
        }
    }

    /// Captured tool output attached to this error, if any.
    pub fn tool_output(&self) -> Option<&str> {
        match self {
            ToolError::CommandFailed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
