//! Navigation model handed to the presentation shell.
//!
//! Every href is rendered from a [`Route`], so the shell can only ever link
//! to paths the resolver understands.
//!
//! ```text
//! site       title · description · url  (from `[base]`, plus `[extra]`)
//! header     Start Here · Best Of · Shop · Newsletter
//! mega menu  pillar ─┬─ /category/{slug}
//!                    └─ /category/{slug}/{sub}  (one per subcategory)
//! footer     Pillars (first four) · Explore · Legal
//! languages  EN · DE · IT · …  (`[base.language]` marked selected)
//! ```

use serde::Serialize;
use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::content::Language;
use crate::query::Query;
use crate::route::Route;

/// Pillars listed in the footer.
const FOOTER_PILLARS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    fn new(label: impl Into<String>, route: &Route) -> Self {
        Self {
            label: label.into(),
            href: route.path(),
        }
    }
}

/// One pillar column of the mega menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuPillar {
    pub icon: String,
    pub link: Link,
    pub subcategories: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

impl LanguageOption {
    fn new(language: Language, selected: Option<Language>) -> Self {
        Self {
            code: language.code(),
            label: language.label(),
            selected: selected == Some(language),
        }
    }
}

/// Site identity shown in the header and footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Brand {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// `[extra]` fields, passed through untouched
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, toml::Value>,
}

impl From<&SiteConfig> for Brand {
    fn from(config: &SiteConfig) -> Self {
        Self {
            title: config.base.title.clone(),
            description: config.base.description.clone(),
            url: config.base.url.clone(),
            extra: config
                .extra
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }
}

/// Site-wide navigation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Navigation {
    pub site: Brand,
    pub header: Vec<Link>,
    pub mega_menu: Vec<MenuPillar>,
    pub footer: Vec<FooterColumn>,
    pub languages: Vec<LanguageOption>,
}

impl Navigation {
    pub fn build(query: Query<'_>, config: &SiteConfig) -> Self {
        let header = vec![
            Link::new("Start Here", &Route::StartHere),
            Link::new("Best Of", &Route::BestOf),
            Link::new("Shop", &Route::Shop),
            Link::new("Newsletter", &Route::Newsletter),
        ];

        let mega_menu = query
            .categories_all()
            .iter()
            .map(|category| MenuPillar {
                icon: category.icon.clone(),
                link: Link::new(&category.name, &Route::category(&category.slug)),
                subcategories: category
                    .subcategories
                    .iter()
                    .map(|sub| {
                        Link::new(sub, &Route::subcategory(&category.slug, slug::slugify(sub)))
                    })
                    .collect(),
            })
            .collect();

        let footer = vec![
            FooterColumn {
                title: "Pillars",
                links: query
                    .categories_all()
                    .iter()
                    .take(FOOTER_PILLARS)
                    .map(|c| Link::new(&c.name, &Route::category(&c.slug)))
                    .collect(),
            },
            FooterColumn {
                title: "Explore",
                links: vec![
                    Link::new("Start Here", &Route::StartHere),
                    Link::new("Best Of", &Route::BestOf),
                    Link::new("Digital Store", &Route::Shop),
                    Link::new("About Us", &Route::About),
                    Link::new("Contact", &Route::Contact),
                ],
            },
            FooterColumn {
                title: "Legal",
                links: vec![Link::new("Privacy Policy", &Route::Privacy)],
            },
        ];

        let selected = config.language().ok();
        let languages = query
            .languages()
            .iter()
            .map(|&language| LanguageOption::new(language, selected))
            .collect();

        Self {
            site: Brand::from(config),
            header,
            mega_menu,
            footer,
            languages,
        }
    }

    /// Every link in the model, in display order.
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        let menu = self
            .mega_menu
            .iter()
            .flat_map(|pillar| std::iter::once(&pillar.link).chain(&pillar.subcategories));
        let footer = self.footer.iter().flat_map(|column| &column.links);

        self.header.iter().chain(menu).chain(footer)
    }
}
