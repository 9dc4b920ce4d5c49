//! `[content]` section configuration.
//!
//! Where the catalog comes from and how long the generated lists are.

use super::defaults;
use crate::content::{CatalogError, ContentStore};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `[content]` section in nicheatlas.toml.
///
/// # Example
/// ```toml
/// [content]
/// catalog = "catalog.json"   # omit to use the built-in catalog
/// related_posts = 3
/// home_secondary = 3
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// JSON catalog file, relative to the site root.
    #[serde(default = "defaults::content::catalog")]
    #[educe(Default = defaults::content::catalog())]
    pub catalog: Option<PathBuf>,

    /// Number of "read next" posts on a post page.
    #[serde(default = "defaults::content::related_posts")]
    #[educe(Default = defaults::content::related_posts())]
    pub related_posts: usize,

    /// Number of posts next to the featured one on the home page.
    #[serde(default = "defaults::content::home_secondary")]
    #[educe(Default = defaults::content::home_secondary())]
    pub home_secondary: usize,
}

impl ContentConfig {
    /// Load and validate the configured catalog.
    pub fn open_store(&self) -> Result<ContentStore, CatalogError> {
        match &self.catalog {
            Some(path) => ContentStore::from_path(path),
            None => ContentStore::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::SiteConfig;
    use std::path::Path;

    #[test]
    fn test_content_config_defaults() {
        let config: SiteConfig = toml::from_str("").unwrap();

        assert_eq!(config.content.catalog, None);
        assert_eq!(config.content.related_posts, 3);
        assert_eq!(config.content.home_secondary, 3);
    }

    #[test]
    fn test_content_config_override() {
        let config = r#"
            [content]
            catalog = "data/catalog.json"
            related_posts = 5
        "#;
        let config: SiteConfig = toml::from_str(config).unwrap();

        assert_eq!(
            config.content.catalog.as_deref(),
            Some(Path::new("data/catalog.json"))
        );
        assert_eq!(config.content.related_posts, 5);
        assert_eq!(config.content.home_secondary, 3);
    }

    #[test]
    fn test_open_builtin_store() {
        let config = SiteConfig::default();
        let store = config.content.open_store().unwrap();
        assert_eq!(store.posts().len(), 40);
    }

    #[test]
    fn test_unknown_field_rejection() {
        let result: Result<SiteConfig, _> = toml::from_str("[content]\nposts = 4");
        assert!(result.is_err());
    }
}
