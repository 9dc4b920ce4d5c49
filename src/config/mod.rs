//! Site configuration management for `nicheatlas.toml`.
//!
//! # Sections
//!
//! | Section     | Purpose                                       |
//! |-------------|-----------------------------------------------|
//! | `[base]`    | Site identity (title, url, default language)  |
//! | `[content]` | Catalog source and list sizes                 |
//! | `[serve]`   | Development server (interface, port)          |
//! | `[extra]`   | User-defined custom fields                    |
//!
//! The file is optional: without it every field takes its default and the
//! built-in catalog is served.
//!
//! # Example
//!
//! ```toml
//! [base]
//! title = "NicheAtlas"
//! url = "https://nicheatlas.com"
//!
//! [content]
//! catalog = "catalog.json"
//! related_posts = 4
//!
//! [serve]
//! port = 8080
//!
//! [extra]
//! newsletter_provider = "buttondown"
//! ```

mod base;
mod content;
pub mod defaults;
mod error;
mod handle;
mod serve;

pub use base::BaseConfig;
pub use content::ContentConfig;
pub use error::ConfigError;
pub use handle::{cfg, init_config};
pub use serve::ServeConfig;

use crate::cli::{Cli, Commands};
use crate::content::Language;
use anyhow::{Result, bail};
use educe::Educe;
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// Root Configuration
// ============================================================================

/// Root configuration structure representing nicheatlas.toml
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity
    #[serde(default)]
    pub base: BaseConfig,

    /// Catalog and list sizes
    #[serde(default)]
    pub content: ContentConfig,

    /// Development server settings
    #[serde(default)]
    pub serve: ServeConfig,

    /// User-defined extra fields
    #[serde(default)]
    pub extra: HashMap<String, toml::Value>,
}

impl SiteConfig {
    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(content).map_err(ConfigError::from)?;
        Ok(config)
    }

    /// Load configuration from file path
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        Self::from_str(&content)
    }

    /// Load, apply CLI overrides and validate.
    ///
    /// A missing config file is not an error; defaults are used instead.
    pub fn load(cli: &Cli) -> Result<Self> {
        let root = cli.root.as_deref().unwrap_or(Path::new("./"));
        let config_path = root.join(&cli.config);

        let mut config = if config_path.exists() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };
        config.update_with_cli(cli);
        config.validate()?;

        Ok(config)
    }

    /// Update configuration with CLI arguments
    pub fn update_with_cli(&mut self, cli: &Cli) {
        let root = Self::normalize_path(cli.root.as_deref().unwrap_or(Path::new("./")));

        if let Some(catalog) = &self.content.catalog {
            self.content.catalog = Some(Self::normalize_path(&root.join(catalog)));
        }

        if let Commands::Serve { interface, port } = &cli.command {
            Self::update_option(&mut self.serve.interface, interface.as_ref());
            Self::update_option(&mut self.serve.port, port.as_ref());
            self.base.url = Some(format!(
                "http://{}:{}",
                self.serve.interface, self.serve.port
            ));
        }
    }

    /// Update config option if CLI value is provided
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Normalize a path to absolute, using canonicalize if the path exists
    fn normalize_path(path: &Path) -> PathBuf {
        path.canonicalize().unwrap_or_else(|_| {
            if path.is_absolute() {
                path.to_path_buf()
            } else {
                std::env::current_dir()
                    .map(|cwd| cwd.join(path))
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        })
    }

    /// Default content language as a typed code.
    ///
    /// Marks the selected entry of the navigation language switcher.
    pub fn language(&self) -> Result<Language> {
        Ok(self.base.language.parse()?)
    }

    /// Validate field values
    pub fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.base.url
            && !base_url.starts_with("http")
        {
            bail!(ConfigError::Validation(
                "[base.url] must start with http:// or https://".into()
            ));
        }

        if self.base.language.parse::<Language>().is_err() {
            bail!(ConfigError::Validation(format!(
                "[base.language] `{}` is not a supported language",
                self.base.language
            )));
        }

        if self.content.related_posts == 0 {
            bail!(ConfigError::Validation(
                "[content.related_posts] must be at least 1".into()
            ));
        }

        if self.content.home_secondary == 0 {
            bail!(ConfigError::Validation(
                "[content.home_secondary] must be at least 1".into()
            ));
        }

        match &self.content.catalog {
            Some(path) if !path.exists() => bail!(ConfigError::Validation(format!(
                "[content.catalog] `{}` not found",
                path.display()
            ))),
            Some(path) if !path.is_file() => bail!(ConfigError::Validation(format!(
                "[content.catalog] `{}` is not a file",
                path.display()
            ))),
            _ => {}
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("nicheatlas").chain(args.iter().copied()))
    }

    #[test]
    fn test_from_str() {
        let config = SiteConfig::from_str(
            r#"
            [base]
            title = "My Atlas"
            [content]
            home_secondary = 6
        "#,
        )
        .unwrap();

        assert_eq!(config.base.title, "My Atlas");
        assert_eq!(config.content.home_secondary, 6);
        assert_eq!(config.content.related_posts, 3);
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[base\ntitle = \"x\"");
        let err = result.unwrap_err();
        assert!(err.downcast_ref::<ConfigError>().is_some());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(SiteConfig::from_str("[build]\nminify = true").is_err());
    }

    #[test]
    fn test_default_is_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.language().unwrap(), Language::En);
    }

    #[test]
    fn test_validate_url() {
        let mut config = SiteConfig::default();
        config.base.url = Some("nicheatlas.com".into());
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[base.url]"));

        config.base.url = Some("https://nicheatlas.com".into());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_language() {
        let mut config = SiteConfig::default();
        config.base.language = "de".into();
        assert!(config.validate().is_ok());
        assert_eq!(config.language().unwrap(), Language::De);

        config.base.language = "PT".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_counts() {
        let mut config = SiteConfig::default();
        config.content.related_posts = 0;
        assert!(config.validate().is_err());

        let mut config = SiteConfig::default();
        config.content.home_secondary = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_missing_catalog() {
        let mut config = SiteConfig::default();
        config.content.catalog = Some(PathBuf::from("/definitely/not/catalog.json"));
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("[content.catalog]"));
    }

    #[test]
    fn test_load_without_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().to_str().unwrap();
        let config = SiteConfig::load(&cli(&["-r", root, "routes"])).unwrap();

        assert_eq!(config.base.title, "NicheAtlas");
        assert_eq!(config.content.catalog, None);
        assert!(config.base.url.is_none());
    }

    #[test]
    fn test_load_resolves_catalog_against_root() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("catalog.json"), "{}").unwrap();
        let mut file = fs::File::create(dir.path().join("site.toml")).unwrap();
        writeln!(file, "[content]\ncatalog = \"catalog.json\"").unwrap();

        let root = dir.path().to_str().unwrap();
        let config = SiteConfig::load(&cli(&["-r", root, "-C", "site.toml", "check"])).unwrap();

        let catalog = config.content.catalog.as_deref().unwrap();
        assert!(catalog.is_absolute());
        assert!(catalog.ends_with("catalog.json"));
        assert!(config.content.open_store().unwrap().posts().is_empty());
    }

    #[test]
    fn test_serve_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("nicheatlas.toml"), "[serve]\nport = 4000").unwrap();

        let root = dir.path().to_str().unwrap();
        let config = SiteConfig::load(&cli(&["-r", root, "serve", "-p", "4100"])).unwrap();

        assert_eq!(config.serve.port, 4100);
        assert_eq!(config.serve.interface, "127.0.0.1");
        assert_eq!(config.base.url.as_deref(), Some("http://127.0.0.1:4100"));
    }

    #[test]
    fn test_extra_fields() {
        let config = r#"
            [extra]
            newsletter_provider = "buttondown"
            subscribers = 50000
            [extra.social]
            telegram = "@nicheatlas"
        "#;
        let config = SiteConfig::from_str(config).unwrap();

        assert_eq!(
            config.extra.get("newsletter_provider").and_then(|v| v.as_str()),
            Some("buttondown")
        );
        assert_eq!(
            config.extra.get("subscribers").and_then(|v| v.as_integer()),
            Some(50000)
        );
        let social = config.extra.get("social").and_then(|v| v.as_table()).unwrap();
        assert_eq!(
            social.get("telegram").and_then(|v| v.as_str()),
            Some("@nicheatlas")
        );
    }
}
