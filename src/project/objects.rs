//! Object graph of a project document.
//!
//! A document is a tree of groups holding file references, plus a flat list
//! of targets whose build phases wrap references by id. Group membership
//! says nothing about the filesystem; references can point at files that no
//! longer exist, which is exactly the drift syncing repairs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source-tree marker for references created relative to their group.
pub const SOURCE_TREE_GROUP: &str = "<group>";

/// Identity of a file reference within a document.
///
/// Build-file wrappers point at references by id, so detaching a reference
/// can cascade through every build phase that mentions it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(Uuid);

impl ObjectId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A file reference: a leaf in the group tree pointing at a relative path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReference {
    pub id: ObjectId,

    /// Path relative to the source tree, usually a bare file name.
    pub path: String,

    /// Where `path` is anchored.
    pub source_tree: String,
}

impl FileReference {
    /// New reference the way the synchronizer creates them: `path` is the
    /// bare file name, anchored to the enclosing group.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            id: ObjectId::new(),
            path: path.into(),
            source_tree: SOURCE_TREE_GROUP.to_string(),
        }
    }

    /// Final component of `path`.
    pub fn basename(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

/// A build-file wrapper associating a file reference with a build phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildFile {
    pub file_ref: ObjectId,
}

/// Kind of build phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildPhaseKind {
    Sources,
    Resources,
    Frameworks,
}

/// An ordered list of build-file wrappers of one kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildPhase {
    pub kind: BuildPhaseKind,

    #[serde(default)]
    pub files: Vec<BuildFile>,
}

impl BuildPhase {
    pub fn new(kind: BuildPhaseKind) -> Self {
        Self {
            kind,
            files: Vec::new(),
        }
    }
}

/// A named build target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,

    #[serde(default)]
    pub build_phases: Vec<BuildPhase>,
}

impl Target {
    /// New target with an empty sources phase.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            build_phases: vec![BuildPhase::new(BuildPhaseKind::Sources)],
        }
    }

    /// New target with no build phases at all. Such targets are skipped
    /// when new references are attached.
    pub fn without_phases(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            build_phases: Vec::new(),
        }
    }

    /// First sources phase, if the target has one.
    pub fn sources_phase(&self) -> Option<&BuildPhase> {
        self.build_phases
            .iter()
            .find(|phase| phase.kind == BuildPhaseKind::Sources)
    }

    pub fn sources_phase_mut(&mut self) -> Option<&mut BuildPhase> {
        self.build_phases
            .iter_mut()
            .find(|phase| phase.kind == BuildPhaseKind::Sources)
    }
}

/// Child of a group: either a nested group or a file reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GroupChild {
    Group(Group),
    File(FileReference),
}

/// A logical folder in the project tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,

    #[serde(default)]
    pub children: Vec<GroupChild>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a file reference, for chained construction.
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.children.push(GroupChild::File(FileReference::new(path)));
        self
    }

    /// Append a nested group, for chained construction.
    pub fn with_group(mut self, group: Group) -> Self {
        self.children.push(GroupChild::Group(group));
        self
    }

    /// Immediate file children, in document order.
    pub fn files(&self) -> impl Iterator<Item = &FileReference> {
        self.children.iter().filter_map(|child| match child {
            GroupChild::File(file) => Some(file),
            GroupChild::Group(_) => None,
        })
    }

    /// Immediate sub-group by exact name.
    pub fn subgroup(&self, name: &str) -> Option<&Group> {
        self.children.iter().find_map(|child| match child {
            GroupChild::Group(group) if group.name == name => Some(group),
            _ => None,
        })
    }

    pub fn subgroup_mut(&mut self, name: &str) -> Option<&mut Group> {
        self.children.iter_mut().find_map(|child| match child {
            GroupChild::Group(group) if group.name == name => Some(group),
            _ => None,
        })
    }
}
