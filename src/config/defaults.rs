//! Default values for configuration fields.
//!
//! Used by serde for missing keys and by `educe` for `Default` impls, so a
//! site with no `nicheatlas.toml` at all still gets a complete config.

// ============================================================================
// [base] Section Defaults
// ============================================================================

pub mod base {
    pub fn title() -> String {
        "NicheAtlas".into()
    }

    pub fn description() -> String {
        "Practical guides, expert insights and evergreen ideas.".into()
    }

    pub fn url() -> Option<String> {
        None
    }

    pub fn language() -> String {
        "EN".into()
    }
}

// ============================================================================
// [content] Section Defaults
// ============================================================================

pub mod content {
    use std::path::PathBuf;

    pub fn catalog() -> Option<PathBuf> {
        None
    }

    pub fn related_posts() -> usize {
        3
    }

    pub fn home_secondary() -> usize {
        3
    }
}

// ============================================================================
// [serve] Section Defaults
// ============================================================================

pub mod serve {
    pub fn interface() -> String {
        "127.0.0.1".into()
    }

    pub fn port() -> u16 {
        3000
    }
}
