//! Locating a project container when the CLI is given none.

use std::path::{Path, PathBuf};

use crate::project::CONTAINER_EXTENSION;

/// First `.codeproj` directory under `dir`, by name order.
///
/// Name order keeps repeated runs deterministic when a directory holds
/// more than one container. Plain files with the extension are ignored.
pub fn discover_project(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;

    let mut candidates: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some(CONTAINER_EXTENSION))
        .collect();
    candidates.sort();
    candidates.into_iter().next()
}
