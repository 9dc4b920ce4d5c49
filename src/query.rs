//! Query Layer: pure lookups over the [`ContentStore`].
//!
//! Every function here is total and side-effect free. "Not found" is a normal
//! outcome and comes back as `None` (or an empty list); deciding what to show
//! instead is the caller's business.
//!
//! Ordering is always store insertion order. Nothing here sorts implicitly.

use crate::content::{Category, Collection, ContentStore, DigitalProduct, Language, Post};

/// Read-only view over a content store.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    store: &'a ContentStore,
}

impl<'a> Query<'a> {
    pub const fn new(store: &'a ContentStore) -> Self {
        Self { store }
    }

    // ------------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------------

    pub fn categories_all(&self) -> &'a [Category] {
        self.store.categories()
    }

    pub fn find_category_by_slug(&self, slug: &str) -> Option<&'a Category> {
        self.store.categories().iter().find(|c| c.slug == slug)
    }

    pub fn find_category_by_id(&self, id: &str) -> Option<&'a Category> {
        self.store.categories().iter().find(|c| c.id == id)
    }

    // ------------------------------------------------------------------------
    // Posts
    // ------------------------------------------------------------------------

    pub fn posts_all(&self) -> &'a [Post] {
        self.store.posts()
    }

    pub fn find_post_by_slug(&self, slug: &str) -> Option<&'a Post> {
        self.store.posts().iter().find(|p| p.slug == slug)
    }

    /// Posts of one category, in store order.
    pub fn posts_by_category(&self, category_id: &str) -> Vec<&'a Post> {
        self.store
            .posts()
            .iter()
            .filter(|p| p.category == category_id)
            .collect()
    }

    /// Posts of one category narrowed to a subcategory.
    ///
    /// `sub` is compared in slugified form, so URL segments like
    /// `side-hustles` match "Side Hustles".
    pub fn posts_by_subcategory(&self, category_id: &str, sub: &str) -> Vec<&'a Post> {
        let wanted = slug::slugify(sub);
        self.store
            .posts()
            .iter()
            .filter(|p| p.category == category_id && slug::slugify(&p.subcategory) == wanted)
            .collect()
    }

    /// Up to `n` posts to read next, never including `post` itself.
    ///
    /// Same-category posts come first in store order, then the rest of the
    /// store in global order.
    pub fn related_posts(&self, post: &Post, n: usize) -> Vec<&'a Post> {
        let others = || self.store.posts().iter().filter(|p| p.id != post.id);
        let same = others().filter(|p| p.category == post.category);
        let rest = others().filter(|p| p.category != post.category);

        same.chain(rest).take(n).collect()
    }

    // ------------------------------------------------------------------------
    // Shop, collections, languages
    // ------------------------------------------------------------------------

    pub fn products_all(&self) -> &'a [DigitalProduct] {
        self.store.products()
    }

    pub fn collections_all(&self) -> &'a [Collection] {
        self.store.collections()
    }

    /// Posts of a collection in the collection's own order.
    pub fn collection_posts(&self, collection: &Collection) -> Vec<&'a Post> {
        collection
            .posts
            .iter()
            .filter_map(|id| self.store.posts().iter().find(|p| &p.id == id))
            .collect()
    }

    pub fn languages(&self) -> &'static [Language] {
        self.store.languages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn store() -> ContentStore {
        ContentStore::builtin().unwrap()
    }

    #[test]
    fn test_find_post_by_slug_for_every_post() {
        let store = store();
        let query = Query::new(&store);

        for post in query.posts_all() {
            assert_eq!(query.find_post_by_slug(&post.slug), Some(post));
        }
        assert_eq!(query.find_post_by_slug("post-slug-40"), None);
        assert_eq!(query.find_post_by_slug(""), None);
    }

    #[test]
    fn test_find_category() {
        let store = store();
        let query = Query::new(&store);

        let tech = query.find_category_by_slug("tech-ai").unwrap();
        assert_eq!(tech.name, "Tech & AI");
        assert_eq!(query.find_category_by_id("tech"), Some(tech));
        // ids and slugs are different namespaces
        assert_eq!(query.find_category_by_slug("tech"), None);
    }

    #[test]
    fn test_posts_by_category_is_exact_partition() {
        let store = store();
        let query = Query::new(&store);

        let mut seen = HashSet::new();
        for category in query.categories_all() {
            let posts = query.posts_by_category(&category.id);
            assert!(posts.iter().all(|p| p.category == category.id));

            let expected = query
                .posts_all()
                .iter()
                .filter(|p| p.category == category.id)
                .count();
            assert_eq!(posts.len(), expected);

            for post in posts {
                assert!(seen.insert(&post.id), "{} listed twice", post.id);
            }
        }
        assert_eq!(seen.len(), query.posts_all().len());
    }

    #[test]
    fn test_posts_by_category_keeps_store_order() {
        let store = store();
        let query = Query::new(&store);

        let ids: Vec<_> = query
            .posts_by_category("tech")
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["post-1", "post-9", "post-17", "post-25", "post-33"]);
        assert!(query.posts_by_category("unknown").is_empty());
    }

    #[test]
    fn test_posts_by_subcategory() {
        let store = store();
        let query = Query::new(&store);

        assert_eq!(query.posts_by_subcategory("tech", "Software").len(), 5);
        assert_eq!(query.posts_by_subcategory("tech", "software").len(), 5);
        assert_eq!(query.posts_by_subcategory("money", "side-hustles").len(), 5);
        assert!(query.posts_by_subcategory("tech", "Hardware").is_empty());
        assert!(query.posts_by_subcategory("money", "Software").is_empty());
    }

    #[test]
    fn test_related_posts_excludes_self_and_respects_limit() {
        let store = store();
        let query = Query::new(&store);

        for post in query.posts_all() {
            for n in [0, 1, 3, 10, 100] {
                let related = query.related_posts(post, n);
                assert!(related.len() <= n);
                assert!(related.iter().all(|p| p.id != post.id));
                assert_eq!(related, query.related_posts(post, n));
            }
        }
    }

    #[test]
    fn test_related_posts_prefers_same_category() {
        let store = store();
        let query = Query::new(&store);
        let post = query.find_post_by_slug("post-slug-5").unwrap();

        let ids: Vec<_> = query
            .related_posts(post, 3)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["post-13", "post-21", "post-29"]);
    }

    #[test]
    fn test_related_posts_falls_back_to_global_order() {
        let store = store();
        let query = Query::new(&store);
        let post = query.find_post_by_slug("post-slug-0").unwrap();

        // 4 other money posts, then the global list from the top
        let ids: Vec<_> = query
            .related_posts(post, 6)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(
            ids,
            ["post-8", "post-16", "post-24", "post-32", "post-1", "post-2"]
        );
    }

    #[test]
    fn test_related_posts_caps_at_store_size() {
        let store = store();
        let query = Query::new(&store);
        let post = &query.posts_all()[0];

        assert_eq!(query.related_posts(post, 1000).len(), 39);
    }

    #[test]
    fn test_collection_posts_keep_collection_order() {
        let store = store();
        let query = Query::new(&store);
        let premium = &query.collections_all()[1];

        let ids: Vec<_> = query
            .collection_posts(premium)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["post-10", "post-20", "post-30"]);
    }

    #[test]
    fn test_products_all() {
        let store = store();
        let query = Query::new(&store);
        let prices: Vec<f64> = query.products_all().iter().map(|p| p.price).collect();
        assert_eq!(prices, [19.99, 49.0, 29.99]);
    }
}
