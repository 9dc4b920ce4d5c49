//! `[base]` section configuration.
//!
//! Site identity shared by every page.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[base]` section in nicheatlas.toml.
///
/// # Example
/// ```toml
/// [base]
/// title = "NicheAtlas"
/// description = "Professional guides for real life."
/// url = "https://nicheatlas.com"
/// language = "EN"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct BaseConfig {
    /// Site title.
    #[serde(default = "defaults::base::title")]
    #[educe(Default = defaults::base::title())]
    pub title: String,

    /// One-line site description for meta tags.
    #[serde(default = "defaults::base::description")]
    #[educe(Default = defaults::base::description())]
    pub description: String,

    /// Public URL of the site. Overridden by `serve` with the bound address.
    #[serde(default = "defaults::base::url")]
    #[educe(Default = defaults::base::url())]
    pub url: Option<String>,

    /// Default content language code (e.g. "EN", "DE").
    #[serde(default = "defaults::base::language")]
    #[educe(Default = defaults::base::language())]
    pub language: String,
}
