//! Rendering of sync results.

use groupsync::SyncReport;

use crate::ui::text::ColoredText;

/// Render the closing banner for a sync run.
///
/// A dry run always closes with the preview notice, whatever the plan
/// held. Otherwise the trailing section announces the save, or that the
/// project was left untouched.
pub fn render_report(report: &SyncReport, verbose: bool, supports_color: bool) -> String {
    let mut out = String::new();

    out.push_str("\n--------------------");

    out.push_str("\nAdded ");
    out.push_str(
        &ColoredText::plain(report.added.len().to_string())
            .bold()
            .render(supports_color),
    );
    out.push_str(" files.");
    if verbose {
        for name in &report.added {
            out.push_str("\n  ");
            out.push_str(&ColoredText::success(format!("+ {}", name)).render(supports_color));
        }
    }

    out.push_str("\nRemoved ");
    out.push_str(
        &ColoredText::plain(report.removed.len().to_string())
            .bold()
            .render(supports_color),
    );
    out.push_str(" files.");
    if verbose {
        for name in &report.removed {
            out.push_str("\n  ");
            out.push_str(&ColoredText::error(format!("- {}", name)).render(supports_color));
        }
    }

    out.push_str("\n--------------------\n");

    if report.dry_run {
        out.push_str("\nDry run; project left unchanged.\n");
    } else if report.saved {
        out.push_str("\nSaving project...");
    } else {
        out.push_str("\nNo changes were made to the project.\n");
    }

    out.push_str("\nDone!\n\n");
    out
}
