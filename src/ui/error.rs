use groupsync::GroupSyncError;

use crate::ui::text::ColoredText;

/// Render a fatal error: a bold red header, then a yellow description with
/// the offending value in bold.
pub fn format_groupsync_error(err: &GroupSyncError) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_groupsync_error_with(err, caps.supports_color)
}

fn format_groupsync_error_with(err: &GroupSyncError, supports_color: bool) -> String {
    let (description, value) = match err {
        GroupSyncError::ProjectNotFound { path } => (
            "Project not found:".to_string(),
            Some(path.display().to_string()),
        ),
        GroupSyncError::TargetsNotFound { missing } => (
            "Project targets not found:".to_string(),
            Some(missing.join(", ")),
        ),
        GroupSyncError::GroupNotFound { path } => {
            ("Project group not found:".to_string(), Some(path.clone()))
        }
        GroupSyncError::PathNotFound { path } => (
            "File system path not found:".to_string(),
            Some(path.display().to_string()),
        ),
        GroupSyncError::MalformedProject { path, message } => (
            "Project could not be read:".to_string(),
            Some(format!("{} ({})", path.display(), message)),
        ),
        GroupSyncError::InvalidFilter { pattern, message } => (
            "Invalid file filter:".to_string(),
            Some(format!("{} ({})", pattern, message)),
        ),
        GroupSyncError::SaveFailed { path, source } => (
            "Project could not be saved:".to_string(),
            Some(format!("{} ({})", path.display(), source)),
        ),
        GroupSyncError::InvalidConfig { file, message } => (
            "Invalid configuration:".to_string(),
            Some(format!("{} ({})", file.display(), message)),
        ),
        other => (other.to_string(), None),
    };

    render_error(&description, value.as_deref(), supports_color)
}

fn render_error(description: &str, value: Option<&str>, supports_color: bool) -> String {
    let mut out = String::new();
    out.push_str(&ColoredText::error("Error!\n").bold().render(supports_color));
    out.push_str(&ColoredText::warning(format!("{} ", description)).render(supports_color));
    match value {
        Some(value) => {
            out.push_str(&ColoredText::warning(value).bold().render(supports_color));
            out.push_str("\n\n");
        }
        None => out.push('\n'),
    }
    out
}

pub fn format_error(err: &anyhow::Error) -> String {
    if let Some(sync_err) = err.downcast_ref::<GroupSyncError>() {
        return format_groupsync_error(sync_err);
    }

    let caps = crate::ui::terminal::detect_capabilities();
    render_error(&err.to_string(), None, caps.supports_color)
}

pub fn print_error(err: &anyhow::Error) {
    eprint!("{}", format_error(err));
}
