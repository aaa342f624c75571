//! Configuration module for groupsync
//!
//! Implements the configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GROUPSYNC_*)
//! 3. Project config (./groupsync.toml)
//! 4. User config (~/.config/groupsync/config.toml)
//! 5. Built-in defaults (lowest priority)

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GroupSyncError, GroupSyncResult};

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_NAME: &str = "groupsync.toml";

/// Sync parameter defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncSection {
    /// Target names new references are attached to.
    #[serde(default)]
    pub targets: Vec<String>,

    /// Slash-separated group path inside the project.
    #[serde(default)]
    pub group: Option<String>,

    /// Directory to mirror. Defaults to the group path.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Glob filter applied to both sides of the diff.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for SyncSection {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
            group: None,
            dir: None,
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "*".to_string()
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputSection {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

/// When to colorize output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub sync: SyncSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> GroupSyncResult<Self> {
        let (config, _warnings) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> GroupSyncResult<(Self, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Self = serde_ignored::deserialize(deserializer, |path| {
            unknown_paths.push(path.to_string());
        })
        .map_err(|e| GroupSyncError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|path_str| {
                let key = path_str
                    .split('.')
                    .last()
                    .unwrap_or(path_str.as_str())
                    .to_string();
                ConfigWarning {
                    key: key.clone(),
                    file: path.to_path_buf(),
                    line: find_line_number(&content, &key),
                    suggestion: suggest_key(&key),
                }
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(working_dir: &Path) -> GroupSyncResult<Self> {
        Ok(Self::load_or_default_with_warnings(working_dir)?.0)
    }

    /// Like `load_or_default`, also surfacing warnings from the file used.
    ///
    /// Only a missing file falls through to the next source. A file that
    /// exists but does not parse is an error.
    pub fn load_or_default_with_warnings(
        working_dir: &Path,
    ) -> GroupSyncResult<(Self, Vec<ConfigWarning>)> {
        // Try project config first
        let project_config = working_dir.join(PROJECT_CONFIG_NAME);
        if project_config.exists() {
            let (config, warnings) = Self::load_with_warnings(&project_config)?;
            return Ok((config.with_env_overrides(), warnings));
        }

        // Try user config
        if let Some(user_config_dir) = dirs_config_dir() {
            let user_config = user_config_dir.join("groupsync/config.toml");
            if user_config.exists() {
                let (config, warnings) = Self::load_with_warnings(&user_config)?;
                return Ok((config.with_env_overrides(), warnings));
            }
        }

        // Return defaults with env overrides
        Ok((Self::default().with_env_overrides(), Vec::new()))
    }

    /// Apply environment variable overrides (GROUPSYNC_* prefix)
    pub fn with_env_overrides(mut self) -> Self {
        // GROUPSYNC_TARGETS (comma-separated)
        if let Ok(targets) = std::env::var("GROUPSYNC_TARGETS") {
            let parsed: Vec<String> = targets
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect();
            if !parsed.is_empty() {
                self.sync.targets = parsed;
            }
        }

        // GROUPSYNC_GROUP
        if let Ok(group) = std::env::var("GROUPSYNC_GROUP") {
            if !group.is_empty() {
                self.sync.group = Some(group);
            }
        }

        // GROUPSYNC_DIR
        if let Ok(dir) = std::env::var("GROUPSYNC_DIR") {
            if !dir.is_empty() {
                self.sync.dir = Some(PathBuf::from(dir));
            }
        }

        // GROUPSYNC_FILTER
        if let Ok(filter) = std::env::var("GROUPSYNC_FILTER") {
            if !filter.is_empty() {
                self.sync.filter = filter;
            }
        }

        // GROUPSYNC_VERBOSITY
        if let Ok(verbosity) = std::env::var("GROUPSYNC_VERBOSITY") {
            self.output.verbosity = match verbosity.to_lowercase().as_str() {
                "quiet" => Verbosity::Quiet,
                "verbose" => Verbosity::Verbose,
                _ => Verbosity::Normal,
            };
        }

        // GROUPSYNC_COLOR
        if let Ok(color) = std::env::var("GROUPSYNC_COLOR") {
            self.output.color = match color.to_lowercase().as_str() {
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                _ => ColorMode::Auto,
            };
        }

        self
    }
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "sync",
        "targets",
        "group",
        "dir",
        "filter",
        "output",
        "verbosity",
        "color",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = std::cmp::min(
                std::cmp::min(prev[j + 1] + 1, curr[j] + 1),
                prev[j] + cost,
            );
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
