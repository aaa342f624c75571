//! File system access used by the synchronizer.
//!
//! The engine only needs existence checks and flat directory listings; the
//! trait keeps it testable without touching disk.

use std::path::Path;

use globset::Glob;

use crate::error::{GroupSyncError, GroupSyncResult};
use crate::filter::Filter;

/// Abstract file system interface.
pub trait FileSystem {
    /// Whether `path` exists and is a directory.
    fn dir_exists(&self, path: &Path) -> bool;

    /// Entry names (files and directories alike) directly under `path`.
    fn list_dir(&self, path: &Path) -> GroupSyncResult<Vec<String>>;
}

/// File system backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn dir_exists(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn list_dir(&self, path: &Path) -> GroupSyncResult<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

/// List the entry names under `dir` matching `filter`, sorted by name.
///
/// Dotfiles are skipped unless the pattern itself starts with a dot, the
/// way shell globs behave. Fails with `PathNotFound` when `dir` does not
/// exist and `InvalidFilter` when the pattern does not compile as a glob.
pub fn list_filesystem_files<FS: FileSystem + ?Sized>(
    fs: &FS,
    dir: &Path,
    filter: &Filter,
) -> GroupSyncResult<Vec<String>> {
    if !fs.dir_exists(dir) {
        return Err(GroupSyncError::PathNotFound {
            path: dir.to_path_buf(),
        });
    }

    let glob = Glob::new(filter.pattern())
        .map_err(|e| GroupSyncError::InvalidFilter {
            pattern: filter.pattern().to_string(),
            message: e.to_string(),
        })?
        .compile_matcher();
    let match_hidden = filter.pattern().starts_with('.');

    let mut names: Vec<String> = fs
        .list_dir(dir)?
        .into_iter()
        .filter(|name| match_hidden || !name.starts_with('.'))
        .filter(|name| glob.is_match(name))
        .collect();
    names.sort();
    Ok(names)
}

/// Mock file system for testing.
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockFileSystem {
    dirs: std::sync::Arc<
        std::sync::Mutex<std::collections::HashMap<std::path::PathBuf, Vec<String>>>,
    >,
}

#[cfg(test)]
impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: &str, entries: &[&str]) {
        let mut dirs = self.dirs.lock().unwrap();
        dirs.insert(
            std::path::PathBuf::from(path),
            entries.iter().map(|s| s.to_string()).collect(),
        );
    }
}

#[cfg(test)]
impl FileSystem for MockFileSystem {
    fn dir_exists(&self, path: &Path) -> bool {
        self.dirs.lock().unwrap().contains_key(path)
    }

    fn list_dir(&self, path: &Path) -> GroupSyncResult<Vec<String>> {
        let dirs = self.dirs.lock().unwrap();
        dirs.get(path).cloned().ok_or_else(|| {
            GroupSyncError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "directory not found",
            ))
        })
    }
}
