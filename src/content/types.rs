//! Catalog entity types.
//!
//! Every entity is plain owned data. Once a [`Catalog`] has been validated into a
//! [`ContentStore`](super::ContentStore) nothing mutates it again, so view-models
//! borrow these records instead of cloning them.

use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, fmt, str::FromStr};
use thiserror::Error;

/// A top-level content pillar, e.g. "Money & Work".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    /// Stable key referenced by [`Post::category`].
    pub id: String,

    /// Display name.
    pub name: String,

    /// URL-unique identifier used in `/category/:slug`.
    pub slug: String,

    /// Emoji shown next to the name.
    pub icon: String,

    /// One-line pitch for the pillar.
    pub description: String,

    /// Ordered subcategory names (e.g. "Side Hustles").
    pub subcategories: Vec<String>,
}

impl Category {
    /// Find the subcategory whose slugified name matches `sub`.
    ///
    /// Matching is done on slugified forms, so `Software`, `software` and
    /// `side-hustles` (for "Side Hustles") all resolve to the canonical name.
    pub fn subcategory(&self, sub: &str) -> Option<&str> {
        let wanted = slug::slugify(sub);
        self.subcategories
            .iter()
            .find(|name| slug::slugify(name) == wanted)
            .map(String::as_str)
    }
}

/// A single article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub excerpt: String,

    /// Raw markup-like body. Opaque to the core; the renderer formats it.
    pub content: String,

    pub cover_image: String,

    /// Owning [`Category::id`].
    pub category: String,

    /// One of the owning category's subcategories.
    pub subcategory: String,

    pub author: String,

    /// Publication date, `YYYY-MM-DD`.
    pub date: String,

    /// Last revision date, `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,

    pub reading_time: String,

    #[serde(default)]
    pub tags: BTreeSet<String>,

    pub language: Language,

    #[serde(default)]
    pub is_premium: bool,
}

impl Post {
    /// Date shown as "Last Updated": the revision date when there is one.
    pub fn last_updated(&self) -> &str {
        self.updated_date.as_deref().unwrap_or(&self.date)
    }
}

/// Kind of digital product sold in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    #[serde(rename = "PDF")]
    Pdf,
    Template,
    Bundle,
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pdf => "PDF",
            Self::Template => "Template",
            Self::Bundle => "Bundle",
        })
    }
}

/// A downloadable product in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DigitalProduct {
    pub id: String,
    pub name: String,
    pub description: String,

    /// Price in dollars. Never negative.
    pub price: f64,

    pub image: String,

    #[serde(rename = "type")]
    pub kind: ProductKind,
}

/// A curated, ordered list of posts (backs the "Best Of" page).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub description: String,

    /// [`Post::id`]s in display order.
    pub posts: Vec<String>,
}

// ============================================================================
// Language
// ============================================================================

/// Supported content locales.
///
/// Only used to tag content and to drive the language switcher; there is no
/// translation logic behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    En,
    De,
    It,
    Es,
    Fr,
    Ru,
    Hu,
    Ro,
    Sk,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported language code `{0}`")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// All supported languages in switcher order.
    pub const ALL: [Self; 9] = [
        Self::En,
        Self::De,
        Self::It,
        Self::Es,
        Self::Fr,
        Self::Ru,
        Self::Hu,
        Self::Ro,
        Self::Sk,
    ];

    /// Upper-case locale code, e.g. `"EN"`.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "EN",
            Self::De => "DE",
            Self::It => "IT",
            Self::Es => "ES",
            Self::Fr => "FR",
            Self::Ru => "RU",
            Self::Hu => "HU",
            Self::Ro => "RO",
            Self::Sk => "SK",
        }
    }

    /// Native display name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::De => "Deutsch",
            Self::It => "Italiano",
            Self::Es => "Español",
            Self::Fr => "Français",
            Self::Ru => "Русский",
            Self::Hu => "Magyar",
            Self::Ro => "Română",
            Self::Sk => "Slovenčina",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Raw, not yet validated content tables.
///
/// This is the content authoring interface: the built-in seed produces one,
/// and so does a JSON catalog file. Turn it into a
/// [`ContentStore`](super::ContentStore) to validate it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub posts: Vec<Post>,

    #[serde(default)]
    pub products: Vec<DigitalProduct>,

    #[serde(default)]
    pub collections: Vec<Collection>,
}
