use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// When to colorize output.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// groupsync - keep a project group's file references in sync with a directory
#[derive(Parser, Debug)]
#[command(name = "groupsync")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Run 'groupsync' without a project path to pick up a .codeproj in the current directory. \
Defaults for targets, group, dir, and filter can live in groupsync.toml."
)]
pub struct Cli {
    /// Path to the .codeproj container
    pub project: Option<PathBuf>,

    /// Comma-separated target names new file references are attached to
    #[arg(short, long)]
    pub targets: Option<String>,

    /// Slash-separated group path inside the project
    #[arg(short, long)]
    pub group: Option<String>,

    /// Directory to mirror (defaults to the group path)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Glob filter applied to both the group and the directory
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Plan and report without modifying the project
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// List each added and removed file
    #[arg(short, long)]
    pub verbose: bool,

    /// When to colorize output
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,
}
