//! File filter applied to both sides of a sync.
//!
//! The raw pattern is used verbatim as a glob against directory listings.
//! Group entries are matched differently: the pattern is reduced to a bare
//! suffix by stripping every non-word character, and an entry matches when
//! its case-folded name ends with that suffix. `*` reduces to the empty
//! suffix and therefore matches every entry.

/// A file filter, carrying both the raw glob pattern and its reduced
/// suffix form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pattern: String,
    suffix: String,
}

impl Filter {
    pub fn new(pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let suffix = pattern
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        Self { pattern, suffix }
    }

    /// The raw glob pattern, for directory matching.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The reduced suffix, for group entry matching.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Whether a group entry name matches the reduced suffix.
    ///
    /// Only the candidate is case-folded; the suffix keeps the pattern's
    /// original case, so an upper-case pattern matches nothing.
    pub fn matches_entry(&self, name: &str) -> bool {
        name.to_lowercase().ends_with(&self.suffix)
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::new("*")
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.pattern)
    }
}
