//! View Assembler: `Route` + [`Query`](crate::query::Query) → [`ViewModel`].
//!
//! # Pages
//!
//! | Route        | View                                            |
//! |--------------|-------------------------------------------------|
//! | `home`       | featured post, secondary posts, all pillars     |
//! | `post`       | post, parent category, related posts            |
//! | `category`   | category, optional subcategory, its posts       |
//! | `shop`       | all products                                    |
//! | `startHere`  | all pillars                                     |
//! | `newsletter` | all pillars as interests                        |
//! | `bestOf`     | collections with their posts                    |
//! | `about`…     | static page descriptor                          |
//! | `admin`      | shell marker, no data                           |
//! | `notFound`   | not-found marker                                |
//!
//! View-models borrow from the store. They are cheap to build, serialize
//! straight to JSON and are never cached.

mod assemble;
mod pages;

pub use assemble::{AssembleOptions, Assembler};
pub use pages::StaticPage;

use serde::Serialize;

use crate::content::{Category, Collection, DigitalProduct, Post};
use crate::route::PageId;

/// Page-ready data for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", content = "data", rename_all = "camelCase")]
pub enum ViewModel<'a> {
    Home(HomeView<'a>),
    Post(PostView<'a>),
    Category(CategoryView<'a>),
    Shop(ShopView<'a>),
    StartHere(StartHereView<'a>),
    Newsletter(NewsletterView<'a>),
    BestOf(BestOfView<'a>),
    About(&'static StaticPage),
    Contact(&'static StaticPage),
    Privacy(&'static StaticPage),
    Admin,
    NotFound,
}

impl ViewModel<'_> {
    pub const fn page(&self) -> PageId {
        match self {
            Self::Home(_) => PageId::Home,
            Self::Post(_) => PageId::Post,
            Self::Category(_) => PageId::Category,
            Self::Shop(_) => PageId::Shop,
            Self::StartHere(_) => PageId::StartHere,
            Self::Newsletter(_) => PageId::Newsletter,
            Self::BestOf(_) => PageId::BestOf,
            Self::About(_) => PageId::About,
            Self::Contact(_) => PageId::Contact,
            Self::Privacy(_) => PageId::Privacy,
            Self::Admin => PageId::Admin,
            Self::NotFound => PageId::NotFound,
        }
    }

    #[inline]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeView<'a> {
    /// First post of the store; `None` only for an empty catalog.
    pub featured: Option<&'a Post>,
    pub secondary: Vec<&'a Post>,
    pub categories: &'a [Category],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostView<'a> {
    pub post: &'a Post,
    pub category: &'a Category,
    pub related: Vec<&'a Post>,
    pub last_updated: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryView<'a> {
    pub category: &'a Category,

    /// Canonical subcategory name when the route narrowed to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<&'a str>,

    pub posts: Vec<&'a Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShopView<'a> {
    pub products: &'a [DigitalProduct],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StartHereView<'a> {
    pub categories: &'a [Category],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsletterView<'a> {
    pub interests: &'a [Category],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestOfView<'a> {
    pub collections: Vec<CollectionView<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionView<'a> {
    pub collection: &'a Collection,
    pub posts: Vec<&'a Post>,
}
