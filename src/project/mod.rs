//! Project document handling: open and save a container, resolve targets
//! and groups, and mutate the reference graph.

mod objects;

pub use objects::{
    BuildFile, BuildPhase, BuildPhaseKind, FileReference, Group, GroupChild, ObjectId, Target,
    SOURCE_TREE_GROUP,
};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GroupSyncError, GroupSyncResult};

/// File name of the document inside a container directory.
pub const DOCUMENT_NAME: &str = "project.json";

/// Extension of a project container directory.
pub const CONTAINER_EXTENSION: &str = "codeproj";

/// A project document.
///
/// Opened from a `.codeproj` container (or a bare `.json` document) and
/// saved back explicitly; nothing touches disk between the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,

    #[serde(default)]
    pub targets: Vec<Target>,

    pub root_group: Group,

    /// Where the document was opened from. Absent for in-memory projects,
    /// which cannot be saved without an explicit destination.
    #[serde(skip)]
    document_path: Option<PathBuf>,
}

impl Project {
    /// New empty in-memory project.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            targets: Vec::new(),
            root_group: Group::new(""),
            document_path: None,
        }
    }

    /// Append a target, for chained construction.
    pub fn with_target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Append a top-level group, for chained construction.
    pub fn with_group(mut self, group: Group) -> Self {
        self.root_group.children.push(GroupChild::Group(group));
        self
    }

    /// Resolve the document path inside `path`.
    ///
    /// Accepts either a container directory or a direct path to a `.json`
    /// document.
    fn document_path_for(path: &Path) -> PathBuf {
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            path.to_path_buf()
        } else {
            path.join(DOCUMENT_NAME)
        }
    }

    /// Open a project from a container path.
    pub fn open(path: &Path) -> GroupSyncResult<Self> {
        let document = Self::document_path_for(path);
        let content =
            fs::read_to_string(&document).map_err(|_| GroupSyncError::ProjectNotFound {
                path: path.to_path_buf(),
            })?;

        let mut project: Self =
            serde_json::from_str(&content).map_err(|e| GroupSyncError::MalformedProject {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        project.document_path = Some(document);
        Ok(project)
    }

    /// Where this project will be saved, if it was opened from disk.
    pub fn document_path(&self) -> Option<&Path> {
        self.document_path.as_deref()
    }

    /// Persist the document back to where it was opened from.
    pub fn save(&self) -> GroupSyncResult<()> {
        let Some(document) = &self.document_path else {
            return Err(GroupSyncError::SaveFailed {
                path: PathBuf::new(),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "project has no document path",
                ),
            });
        };
        self.save_to(document)
    }

    /// Serialize to `document`, writing through a temporary file in the
    /// same directory so the previous document is replaced atomically.
    pub fn save_to(&self, document: &Path) -> GroupSyncResult<()> {
        let save_failed = |source: std::io::Error| GroupSyncError::SaveFailed {
            path: document.to_path_buf(),
            source,
        };

        let mut content = serde_json::to_string_pretty(self).map_err(|e| {
            save_failed(std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        })?;
        content.push('\n');

        let dir = document.parent().unwrap_or(Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(save_failed)?;
        tmp.write_all(content.as_bytes()).map_err(save_failed)?;
        tmp.persist(document).map_err(|e| save_failed(e.error))?;
        Ok(())
    }

    /// Resolve a slash-separated group path against the project tree.
    ///
    /// Components match group names exactly; empty components are skipped.
    /// The empty path resolves to nothing rather than the root.
    pub fn group(&self, path: &str) -> Option<&Group> {
        let mut components = path.split('/').filter(|c| !c.is_empty());
        let mut current = self.root_group.subgroup(components.next()?)?;
        for component in components {
            current = current.subgroup(component)?;
        }
        Some(current)
    }

    pub fn group_mut(&mut self, path: &str) -> Option<&mut Group> {
        let mut components = path.split('/').filter(|c| !c.is_empty());
        let mut current = self.root_group.subgroup_mut(components.next()?)?;
        for component in components {
            current = current.subgroup_mut(component)?;
        }
        Some(current)
    }

    /// Resolve comma-separated target names, case-insensitively.
    ///
    /// Returned indices follow request order, and a name that repeats
    /// resolves repeatedly. Unmatched names are collected and reported
    /// together.
    pub fn resolve_targets(&self, names: &str) -> GroupSyncResult<Vec<usize>> {
        let mut found = Vec::new();
        let mut missing = Vec::new();

        for name in names.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match self
                .targets
                .iter()
                .position(|target| target.name.eq_ignore_ascii_case(name))
            {
                Some(index) => found.push(index),
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(GroupSyncError::TargetsNotFound { missing });
        }
        Ok(found)
    }

    /// All file references in the tree, depth-first in document order.
    pub fn file_references(&self) -> Vec<&FileReference> {
        fn walk<'a>(group: &'a Group, out: &mut Vec<&'a FileReference>) {
            for child in &group.children {
                match child {
                    GroupChild::File(file) => out.push(file),
                    GroupChild::Group(sub) => walk(sub, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(&self.root_group, &mut out);
        out
    }

    /// Create a new file reference named `name` inside `group_path`,
    /// returning its id so build phases can wrap it.
    pub fn add_file(&mut self, group_path: &str, name: &str) -> GroupSyncResult<ObjectId> {
        let group = self
            .group_mut(group_path)
            .ok_or_else(|| GroupSyncError::GroupNotFound {
                path: group_path.to_string(),
            })?;

        let file = FileReference::new(name);
        let id = file.id;
        group.children.push(GroupChild::File(file));
        Ok(id)
    }

    /// Append a build-file wrapper for `id` to the target's first sources
    /// phase. Targets without one are left untouched.
    pub fn attach_to_sources_phase(&mut self, target_index: usize, id: ObjectId) {
        if let Some(phase) = self
            .targets
            .get_mut(target_index)
            .and_then(Target::sources_phase_mut)
        {
            phase.files.push(BuildFile { file_ref: id });
        }
    }

    /// Detach the first file reference (project-wide, document order) whose
    /// basename matches, cascading through every build phase that wrapped
    /// it. Returns whether a reference was removed.
    pub fn remove_file_by_basename(&mut self, name: &str) -> bool {
        let Some(id) = self
            .file_references()
            .into_iter()
            .find(|file| file.basename() == name)
            .map(|file| file.id)
        else {
            return false;
        };
        self.remove_file_reference(id)
    }

    /// Detach a file reference by id, cascading through build phases.
    pub fn remove_file_reference(&mut self, id: ObjectId) -> bool {
        fn detach(group: &mut Group, id: ObjectId) -> bool {
            let before = group.children.len();
            group
                .children
                .retain(|child| !matches!(child, GroupChild::File(file) if file.id == id));
            if group.children.len() != before {
                return true;
            }
            group.children.iter_mut().any(|child| match child {
                GroupChild::Group(sub) => detach(sub, id),
                GroupChild::File(_) => false,
            })
        }

        if !detach(&mut self.root_group, id) {
            return false;
        }
        for target in &mut self.targets {
            for phase in &mut target.build_phases {
                phase.files.retain(|build_file| build_file.file_ref != id);
            }
        }
        true
    }
}
