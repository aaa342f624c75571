use crossterm::style::Color;

/// Design tokens for the groupsync CLI.
///
/// All color in the output must be sourced from this module.
pub mod colors {
    use super::Color;

    /// Added files
    pub const SUCCESS: Color = Color::Green;
    /// Removed files and the error header
    pub const ERROR: Color = Color::Red;
    /// Error descriptions and highlighted names
    pub const WARNING: Color = Color::Yellow;
}
