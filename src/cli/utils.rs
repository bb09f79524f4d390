//! Workspace discovery
//!
//! A helpdesk workspace is a directory containing a `.helpdesk` folder,
//! found by walking up from the starting directory like version-control
//! tools do.

use crate::error::{HelpdeskError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Name of the workspace state directory
pub const WORKSPACE_DIR: &str = ".helpdesk";

/// Find the workspace root at or above the given directory
///
/// Starts from `start` (or the current directory when absent) and walks up
/// until a `.helpdesk` directory is found. Fails with
/// `WorkspaceNotInitialized` when the walk reaches the filesystem root.
pub fn find_workspace_root(start: Option<&str>) -> Result<PathBuf> {
    let start_dir = match start {
        Some(dir) => PathBuf::from(dir),
        None => env::current_dir()?,
    };

    let mut dir: &Path = &start_dir;
    loop {
        if dir.join(WORKSPACE_DIR).is_dir() {
            return Ok(dir.to_path_buf());
        }
        match dir.parent() {
            Some(parent) => dir = parent,
            None => return Err(HelpdeskError::WorkspaceNotInitialized),
        }
    }
}

/// The state directory inside a workspace root
#[must_use]
pub fn workspace_dir(root: &Path) -> PathBuf {
    root.join(WORKSPACE_DIR)
}
