//! groupsync - keep a project group's file references in sync with a
//! directory on disk.
//!
//! groupsync opens a project container, diffs one group's file entries
//! against the files actually present in a directory, adds references for
//! new files to every requested target's sources phase, detaches references
//! whose files are gone, and saves the document only when something changed.

pub mod config;
pub mod discover;
pub mod error;
pub mod filter;
pub mod fs;
pub mod project;
pub mod sync;

// Re-exports for convenience
pub use config::{ColorMode, Config, ConfigWarning, Verbosity};
pub use discover::discover_project;
pub use error::{GroupSyncError, GroupSyncResult};
pub use filter::Filter;
pub use fs::{FileSystem, LocalFileSystem};
pub use project::Project;
pub use sync::{plan_sync, sync_group, SyncOptions, SyncPlan, SyncReport, SyncRequest};
