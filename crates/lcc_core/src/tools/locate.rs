//! Executable lookup.

use std::env;
use std::path::{Path, PathBuf};

use super::errors::{ToolError, ToolResult};

/// Search `PATH` for an executable.
pub fn find_in_path(tool: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    search_dirs(tool, env::split_paths(&path_var))
}

fn search_dirs(tool: &str, dirs: impl IntoIterator<Item = PathBuf>) -> Option<PathBuf> {
    for dir in dirs {
        let full = dir.join(tool);
        if full.is_file() {
            return Some(full);
        }
        #[cfg(windows)]
        {
            let exe = dir.join(format!("{tool}.exe"));
            if exe.is_file() {
                return Some(exe);
            }
        }
    }
    None
}

/// Resolve a tool from an optional configured path, falling back to `PATH`.
///
/// A configured path that does not point at a file is an error rather
/// than a silent fallback.
pub fn resolve_tool(tool: &str, configured: Option<&Path>) -> ToolResult<PathBuf> {
    match configured {
        Some(path) if path.is_file() => Ok(path.to_path_buf()),
        Some(path) => {
            tracing::debug!("Configured {} path {} does not exist", tool, path.display());
            Err(ToolError::unavailable(tool))
        }
        None => find_in_path(tool).ok_or_else(|| ToolError::unavailable(tool)),
    }
}
