//! Build options shared by member builders and writers.
//!
//! Options are passed explicitly through the build context so no component
//! depends on ambient process-wide state.

/// Per-run rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Suppress descriptive doc comments in member sections.
    pub no_comments: bool,
    /// Document private members in addition to public ones.
    pub include_private: bool,
}
