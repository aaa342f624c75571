//! Error types for groupsync
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`
//! and renders them through its UI layer.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for groupsync operations
pub type GroupSyncResult<T> = Result<T, GroupSyncError>;

/// Main error type for groupsync operations
///
/// Every variant is fatal: the process reports one error and terminates.
#[derive(Error, Debug)]
pub enum GroupSyncError {
    /// Project container missing or unreadable
    #[error("project not found: {path}")]
    ProjectNotFound { path: PathBuf },

    /// Project container exists but its document does not parse
    #[error("project could not be read: {path}: {message}")]
    MalformedProject { path: PathBuf, message: String },

    /// One or more requested target names had no match
    #[error("project targets not found: {}", missing.join(", "))]
    TargetsNotFound { missing: Vec<String> },

    /// Group path does not resolve within the project tree
    #[error("project group not found: {path}")]
    GroupNotFound { path: String },

    /// Filesystem directory argument does not exist
    #[error("file system path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Filter does not compile as a glob pattern
    #[error("invalid file filter '{pattern}': {message}")]
    InvalidFilter { pattern: String, message: String },

    /// Configuration file does not parse
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Persisting the project document failed
    #[error("project could not be saved: {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GroupSyncError {
    /// Path displayed for errors that carry one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            GroupSyncError::ProjectNotFound { path }
            | GroupSyncError::MalformedProject { path, .. }
            | GroupSyncError::PathNotFound { path }
            | GroupSyncError::SaveFailed { path, .. } => Some(path),
            GroupSyncError::InvalidConfig { file, .. } => Some(file),
            _ => None,
        }
    }
}
