//! Terminal UI for the groupsync binary: styled text, capability
//! detection, error rendering, prompts, and result views.

pub mod error;
pub mod prompt;
pub mod terminal;
pub mod text;
pub mod theme;
pub mod views;
