//! The sync command: reconcile a project group with a directory on disk.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};

use groupsync::config::{ColorMode, Config, ConfigWarning, Verbosity};
use groupsync::{
    discover_project, sync_group, Filter, LocalFileSystem, Project, SyncOptions, SyncRequest,
};

use crate::cli::{Cli, ColorWhen};
use crate::ui;
use crate::ui::text::ColoredText;

pub fn run(cli: &Cli) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default_with_warnings(&working_dir)?;

    for warning in &warnings {
        print_config_warning(warning);
    }

    let color_mode = match cli.color {
        Some(ColorWhen::Always) => ColorMode::Always,
        Some(ColorWhen::Never) => ColorMode::Never,
        Some(ColorWhen::Auto) => ColorMode::Auto,
        None => config.output.color,
    };
    let supports_color =
        ui::terminal::resolve_color(color_mode, ui::terminal::detect_capabilities());

    let verbosity = if cli.verbose {
        Verbosity::Verbose
    } else {
        config.output.verbosity
    };

    let Some(project_path) = resolve_project_path(cli, &working_dir, supports_color) else {
        // Declined or failed discovery ends the run without an error.
        return Ok(());
    };

    let targets = match &cli.targets {
        Some(targets) => targets.clone(),
        None if !config.sync.targets.is_empty() => config.sync.targets.join(","),
        None => bail!("no targets specified; pass --targets or set sync.targets in groupsync.toml"),
    };

    let group = match cli.group.clone().or_else(|| config.sync.group.clone()) {
        Some(group) => group,
        None => bail!("no group specified; pass --group or set sync.group in groupsync.toml"),
    };

    let dir = cli
        .dir
        .clone()
        .or_else(|| config.sync.dir.clone())
        .unwrap_or_else(|| PathBuf::from(&group));

    let filter = Filter::new(
        cli.filter
            .clone()
            .unwrap_or_else(|| config.sync.filter.clone()),
    );

    let mut project = Project::open(&project_path)?;

    let request = SyncRequest {
        targets,
        group,
        dir,
        filter,
    };
    let options = SyncOptions {
        dry_run: cli.dry_run,
    };
    let report = sync_group(&mut project, &request, &LocalFileSystem, options)?;

    if verbosity != Verbosity::Quiet {
        let verbose = verbosity >= Verbosity::Verbose;
        print!(
            "{}",
            ui::views::sync::render_report(&report, verbose, supports_color)
        );
    }

    Ok(())
}

/// The project path from the CLI, or a discovered container the user
/// confirms. `None` means no container was settled on and the run should
/// stop quietly.
fn resolve_project_path(cli: &Cli, working_dir: &Path, supports_color: bool) -> Option<PathBuf> {
    if let Some(project) = &cli.project {
        return Some(project.clone());
    }

    print!("\nYou need to provide the path of the .codeproj folder.\n");

    if let Some(found) = discover_project(working_dir) {
        let name = found
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| found.display().to_string());
        let question = format!(
            "Found {}.\nUse that? (Y/n): ",
            ColoredText::warning(name).render(supports_color)
        );
        if ui::prompt::confirm(&question) {
            return Some(found);
        }
    }

    print!("No .codeproj folder specified.\n");
    None
}

fn print_config_warning(warning: &ConfigWarning) {
    let mut message = format!(
        "[WARN] unknown configuration key '{}' in {}",
        warning.key,
        warning.file.display()
    );
    if let Some(line) = warning.line {
        message.push_str(&format!(":{}", line));
    }
    if let Some(suggestion) = &warning.suggestion {
        message.push_str(&format!(" (did you mean '{}'?)", suggestion));
    }
    eprintln!("{}", message);
}
