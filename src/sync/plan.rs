//! Pure sync planning: diff group entries against a directory listing.
//!
//! Planning never touches the project or the disk; the engine applies the
//! plan afterwards.

use std::collections::HashSet;

/// Result of planning a sync: which names to add and which to remove.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    /// Present on disk, absent from the group.
    pub to_add: Vec<String>,

    /// Present in the group, gone from disk.
    pub to_remove: Vec<String>,
}

impl SyncPlan {
    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }

    /// Total additions and removals.
    pub fn total_changes(&self) -> usize {
        self.to_add.len() + self.to_remove.len()
    }
}

/// Diff two name collections into a plan.
///
/// `to_add` is the filesystem side minus the group side; `to_remove` is the
/// reverse. Names present on both sides stay untouched. Duplicates collapse
/// to one entry and input order is preserved.
pub fn plan_sync(group_names: &[String], fs_names: &[String]) -> SyncPlan {
    let group_set: HashSet<&str> = group_names.iter().map(String::as_str).collect();
    let fs_set: HashSet<&str> = fs_names.iter().map(String::as_str).collect();

    SyncPlan {
        to_add: difference(fs_names, &group_set),
        to_remove: difference(group_names, &fs_set),
    }
}

/// Names not contained in `other`, deduplicated, in input order.
fn difference(names: &[String], other: &HashSet<&str>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .iter()
        .filter(|name| !other.contains(name.as_str()) && seen.insert(name.as_str()))
        .cloned()
        .collect()
}
