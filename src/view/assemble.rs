//! Route → view-model assembly.
//!
//! Any reference that does not resolve (unknown post or category slug, a
//! subcategory the category doesn't list) yields [`ViewModel::NotFound`].
//! Nothing here panics or mutates the store.

use super::{
    BestOfView, CategoryView, CollectionView, HomeView, NewsletterView, PostView, ShopView,
    StartHereView, ViewModel, pages,
};
use crate::config::{ContentConfig, defaults};
use crate::query::Query;
use crate::route::Route;

/// Tunables for list sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssembleOptions {
    /// Number of "read next" posts on a post page.
    pub related_posts: usize,

    /// Number of posts shown next to the featured one on the home page.
    pub home_secondary: usize,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            related_posts: defaults::content::related_posts(),
            home_secondary: defaults::content::home_secondary(),
        }
    }
}

impl From<&ContentConfig> for AssembleOptions {
    fn from(config: &ContentConfig) -> Self {
        Self {
            related_posts: config.related_posts,
            home_secondary: config.home_secondary,
        }
    }
}

/// Builds view-models over one store.
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    query: Query<'a>,
    options: AssembleOptions,
}

impl<'a> Assembler<'a> {
    pub const fn new(query: Query<'a>, options: AssembleOptions) -> Self {
        Self { query, options }
    }

    /// Assemble the view for `route`.
    pub fn assemble(&self, route: &Route) -> ViewModel<'a> {
        match route {
            Route::Home => self.home(),
            Route::Post { slug } => self.post(slug).unwrap_or(ViewModel::NotFound),
            Route::Category { slug, sub } => self
                .category(slug, sub.as_deref())
                .unwrap_or(ViewModel::NotFound),
            Route::Shop => ViewModel::Shop(ShopView {
                products: self.query.products_all(),
            }),
            Route::StartHere => ViewModel::StartHere(StartHereView {
                categories: self.query.categories_all(),
            }),
            Route::Newsletter => ViewModel::Newsletter(NewsletterView {
                interests: self.query.categories_all(),
            }),
            Route::BestOf => self.best_of(),
            Route::About => ViewModel::About(&pages::ABOUT),
            Route::Contact => ViewModel::Contact(&pages::CONTACT),
            Route::Privacy => ViewModel::Privacy(&pages::PRIVACY),
            Route::Admin => ViewModel::Admin,
            Route::NotFound => ViewModel::NotFound,
        }
    }

    fn home(&self) -> ViewModel<'a> {
        let mut posts = self.query.posts_all().iter();
        let featured = posts.next();
        let secondary = posts.take(self.options.home_secondary).collect();

        ViewModel::Home(HomeView {
            featured,
            secondary,
            categories: self.query.categories_all(),
        })
    }

    fn post(&self, slug: &str) -> Option<ViewModel<'a>> {
        let post = self.query.find_post_by_slug(slug)?;
        let category = self.query.find_category_by_id(&post.category)?;

        Some(ViewModel::Post(PostView {
            post,
            category,
            related: self.query.related_posts(post, self.options.related_posts),
            last_updated: post.last_updated(),
        }))
    }

    fn category(&self, slug: &str, sub: Option<&str>) -> Option<ViewModel<'a>> {
        let category = self.query.find_category_by_slug(slug)?;

        let view = match sub {
            None => CategoryView {
                category,
                subcategory: None,
                posts: self.query.posts_by_category(&category.id),
            },
            Some(sub) => {
                let name = category.subcategory(sub)?;
                CategoryView {
                    category,
                    subcategory: Some(name),
                    posts: self.query.posts_by_subcategory(&category.id, name),
                }
            }
        };
        Some(ViewModel::Category(view))
    }

    fn best_of(&self) -> ViewModel<'a> {
        let collections = self
            .query
            .collections_all()
            .iter()
            .map(|collection| CollectionView {
                collection,
                posts: self.query.collection_posts(collection),
            })
            .collect();

        ViewModel::BestOf(BestOfView { collections })
    }
}

// ============================================================================
// Tests
// ============================================================================
