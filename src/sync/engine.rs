//! Sync engine: the full lifecycle of one reconciliation run.
//!
//! 1. Resolve: targets, then group, then the filesystem directory
//! 2. Plan: diff the group's filtered entries against the listing
//! 3. Apply: create references for additions, detach references for
//!    removals
//! 4. Save: write the document back, only when something changed

use std::path::PathBuf;

use crate::error::{GroupSyncError, GroupSyncResult};
use crate::filter::Filter;
use crate::fs::{list_filesystem_files, FileSystem};
use crate::project::Project;
use crate::sync::plan::plan_sync;

/// What to reconcile: which targets, which group, against which directory.
#[derive(Debug, Clone)]
pub struct SyncRequest {
    /// Comma-separated target names.
    pub targets: String,

    /// Slash-separated group path.
    pub group: String,

    /// Directory whose listing the group should mirror.
    pub dir: PathBuf,

    /// Filter applied to both sides.
    pub filter: Filter,
}

/// Options for a sync run.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Plan and report without mutating or saving.
    pub dry_run: bool,
}

/// What a sync run did (or, under dry run, would do).
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    pub added: Vec<String>,
    pub removed: Vec<String>,

    /// Whether the run was a preview that left the document alone.
    pub dry_run: bool,

    /// Whether the document was written back.
    pub saved: bool,
}

impl SyncReport {
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty()
    }
}

/// Reconcile the group's file references with the directory listing.
///
/// New references land in the group and in the first sources phase of every
/// requested target; stale references are detached wherever they appear.
/// The document is saved only when the plan is non-empty.
pub fn sync_group<FS: FileSystem + ?Sized>(
    project: &mut Project,
    request: &SyncRequest,
    fs: &FS,
    options: SyncOptions,
) -> GroupSyncResult<SyncReport> {
    let target_indices = project.resolve_targets(&request.targets)?;

    let group = project
        .group(&request.group)
        .ok_or_else(|| GroupSyncError::GroupNotFound {
            path: request.group.clone(),
        })?;
    let group_names: Vec<String> = group
        .files()
        .filter(|file| request.filter.matches_entry(&file.path))
        .map(|file| file.path.clone())
        .collect();

    let fs_names = list_filesystem_files(fs, &request.dir, &request.filter)?;

    let plan = plan_sync(&group_names, &fs_names);

    if options.dry_run {
        return Ok(SyncReport {
            added: plan.to_add,
            removed: plan.to_remove,
            dry_run: true,
            saved: false,
        });
    }

    for name in &plan.to_add {
        let id = project.add_file(&request.group, name)?;
        for &target in &target_indices {
            project.attach_to_sources_phase(target, id);
        }
    }

    for name in &plan.to_remove {
        // A stale entry with no project-wide match is skipped silently.
        project.remove_file_by_basename(name);
    }

    let saved = !plan.is_empty();
    if saved {
        project.save()?;
    }

    Ok(SyncReport {
        added: plan.to_add,
        removed: plan.to_remove,
        dry_run: false,
        saved,
    })
}
