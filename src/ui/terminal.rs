use is_terminal::IsTerminal;

use groupsync::ColorMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stdout().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();

    let supports_color = is_tty && !term_is_dumb && !no_color;

    TerminalCapabilities {
        is_tty,
        supports_color,
    }
}

/// Resolve the configured color mode against detected capabilities.
pub fn resolve_color(mode: ColorMode, caps: TerminalCapabilities) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => caps.supports_color,
    }
}
