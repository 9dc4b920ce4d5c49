//! Descriptors for pages with no catalog data behind them.

use serde::Serialize;

/// Title and summary of a static page. The body is the renderer's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaticPage {
    pub title: &'static str,
    pub summary: &'static str,
}

pub static ABOUT: StaticPage = StaticPage {
    title: "Our Mission",
    summary: "The internet is full of noise. NicheAtlas publishes evergreen, \
              fact-checked and deeply practical guides that don't expire after a week.",
};

pub static CONTACT: StaticPage = StaticPage {
    title: "Contact NicheAtlas",
    summary: "Topic suggestions, business inquiries or just saying hi: \
              reach us at hello@nicheatlas.com.",
};

pub static PRIVACY: StaticPage = StaticPage {
    title: "Privacy Policy",
    summary: "How NicheAtlas collects, uses and protects your information \
              when you visit the site.",
};
