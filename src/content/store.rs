//! Validated, read-only content store.
//!
//! A [`ContentStore`] can only be obtained through [`ContentStore::new`] (or one
//! of the loaders built on it), which checks the whole catalog once. Everything
//! downstream relies on the invariants established here and never re-checks
//! them per request.

use std::{collections::HashSet, fs, path::Path};

use chrono::NaiveDate;

use super::{
    error::CatalogError,
    seed,
    types::{Catalog, Category, Collection, DigitalProduct, Language, Post},
};

/// Date format used by `date` and `updated_date`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Immutable content tables.
///
/// Guaranteed invariants:
/// - category ids and slugs, post ids and slugs, product ids, collection ids
///   and slugs are unique
/// - every slug is URL-safe
/// - subcategory names slugify to non-empty forms, unique within their category
/// - every post points at an existing category and one of its subcategories
/// - every date parses as `YYYY-MM-DD`
/// - every price is finite and non-negative
/// - every collection entry points at an existing post
#[derive(Debug, Clone)]
pub struct ContentStore {
    catalog: Catalog,
}

impl ContentStore {
    /// Validate `catalog` and freeze it into a store.
    pub fn new(catalog: Catalog) -> Result<Self, CatalogError> {
        validate(&catalog)?;
        Ok(Self { catalog })
    }

    /// Store backed by the compiled seed catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(seed::catalog())
    }

    /// Parse a JSON catalog and validate it.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(content)?;
        Self::new(catalog)
    }

    /// Load a JSON catalog file and validate it.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content =
            fs::read_to_string(path).map_err(|err| CatalogError::Io(path.to_path_buf(), err))?;
        Self::from_json(&content)
    }

    pub fn categories(&self) -> &[Category] {
        &self.catalog.categories
    }

    pub fn posts(&self) -> &[Post] {
        &self.catalog.posts
    }

    pub fn products(&self) -> &[DigitalProduct] {
        &self.catalog.products
    }

    pub fn collections(&self) -> &[Collection] {
        &self.catalog.collections
    }

    /// Supported languages, in switcher order.
    pub fn languages(&self) -> &'static [Language] {
        &Language::ALL
    }
}

// ============================================================================
// Validation
// ============================================================================

fn validate(catalog: &Catalog) -> Result<(), CatalogError> {
    unique_ids("category", catalog.categories.iter().map(|c| c.id.as_str()))?;
    unique_slugs("category", catalog.categories.iter().map(|c| c.slug.as_str()))?;
    unique_ids("post", catalog.posts.iter().map(|p| p.id.as_str()))?;
    unique_slugs("post", catalog.posts.iter().map(|p| p.slug.as_str()))?;
    unique_ids("product", catalog.products.iter().map(|p| p.id.as_str()))?;
    unique_ids("collection", catalog.collections.iter().map(|c| c.id.as_str()))?;
    unique_slugs(
        "collection",
        catalog.collections.iter().map(|c| c.slug.as_str()),
    )?;

    for category in &catalog.categories {
        validate_subcategories(category)?;
    }

    for post in &catalog.posts {
        validate_post(post, &catalog.categories)?;
    }

    for product in &catalog.products {
        if !product.price.is_finite() || product.price < 0.0 {
            return Err(CatalogError::InvalidPrice {
                product: product.id.clone(),
                price: product.price,
            });
        }
    }

    let post_ids: HashSet<&str> = catalog.posts.iter().map(|p| p.id.as_str()).collect();
    for collection in &catalog.collections {
        if let Some(missing) = collection
            .posts
            .iter()
            .find(|id| !post_ids.contains(id.as_str()))
        {
            return Err(CatalogError::UnknownPost {
                collection: collection.id.clone(),
                post: missing.clone(),
            });
        }
    }

    Ok(())
}

/// Subcategories are addressed by their slugified name.
fn validate_subcategories(category: &Category) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for name in &category.subcategories {
        let slug = slug::slugify(name);
        if slug.is_empty() {
            return Err(CatalogError::InvalidSubcategory {
                category: category.id.clone(),
                subcategory: name.clone(),
            });
        }
        if !seen.insert(slug.clone()) {
            return Err(CatalogError::DuplicateSubcategory {
                category: category.id.clone(),
                slug,
            });
        }
    }
    Ok(())
}

fn validate_post(post: &Post, categories: &[Category]) -> Result<(), CatalogError> {
    let category = categories
        .iter()
        .find(|c| c.id == post.category)
        .ok_or_else(|| CatalogError::UnknownCategory {
            post: post.id.clone(),
            category: post.category.clone(),
        })?;

    if !category.subcategories.contains(&post.subcategory) {
        return Err(CatalogError::UnknownSubcategory {
            post: post.id.clone(),
            category: category.id.clone(),
            subcategory: post.subcategory.clone(),
        });
    }

    for date in std::iter::once(&post.date).chain(post.updated_date.as_ref()) {
        if NaiveDate::parse_from_str(date, DATE_FORMAT).is_err() {
            return Err(CatalogError::InvalidDate {
                post: post.id.clone(),
                date: date.clone(),
            });
        }
    }

    Ok(())
}

fn unique_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

fn unique_slugs<'a>(
    kind: &'static str,
    slugs: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for value in slugs {
        // Slugs must be fixed points of slugification
        if value.is_empty() || slug::slugify(value) != value {
            return Err(CatalogError::InvalidSlug {
                kind,
                slug: value.to_owned(),
            });
        }
        if !seen.insert(value) {
            return Err(CatalogError::DuplicateSlug {
                kind,
                slug: value.to_owned(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn seed() -> Catalog {
        seed::catalog()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let store = ContentStore::builtin().unwrap();
        assert_eq!(store.categories().len(), 8);
        assert_eq!(store.posts().len(), 40);
        assert_eq!(store.products().len(), 3);
        assert_eq!(store.languages().len(), 9);
    }

    #[test]
    fn test_dangling_category_rejected() {
        let mut catalog = seed();
        catalog.posts[3].category = "gardening".into();

        let err = ContentStore::new(catalog).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownCategory { ref post, ref category }
                if post == "post-3" && category == "gardening"
        ));
    }

    #[test]
    fn test_unlisted_subcategory_rejected() {
        let mut catalog = seed();
        catalog.posts[1].subcategory = "Gadgets".into();

        let err = ContentStore::new(catalog).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSubcategory { .. }));
    }

    #[test]
    fn test_colliding_subcategories_rejected() {
        let mut catalog = seed();
        catalog.categories[0].subcategories.push("side-hustles".into());

        let err = ContentStore::new(catalog).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateSubcategory { ref category, ref slug }
                if category == "money" && slug == "side-hustles"
        ));
    }

    #[test]
    fn test_subcategory_without_url_form_rejected() {
        for name in ["&", "--", ""] {
            let mut catalog = seed();
            catalog.categories[1].subcategories.push(name.into());

            let err = ContentStore::new(catalog).unwrap_err();
            assert!(
                matches!(err, CatalogError::InvalidSubcategory { ref subcategory, .. } if subcategory == name),
                "{name:?}"
            );
        }
    }

    #[test]
    fn test_duplicate_post_slug_rejected() {
        let mut catalog = seed();
        catalog.posts[2].slug = "post-slug-1".into();

        let err = ContentStore::new(catalog).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateSlug { kind: "post", ref slug } if slug == "post-slug-1"
        ));
    }

    #[test]
    fn test_duplicate_category_id_rejected() {
        let mut catalog = seed();
        catalog.categories[1].id = "money".into();

        let err = ContentStore::new(catalog).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "category", .. }));
    }

    #[test]
    fn test_unsafe_slug_rejected() {
        let mut catalog = seed();
        catalog.categories[0].slug = "Money & Work".into();

        let err = ContentStore::new(catalog).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSlug { kind: "category", .. }));
    }

    #[test]
    fn test_invalid_dates_rejected() {
        let mut catalog = seed();
        catalog.posts[0].updated_date = Some("June 2024".into());
        assert!(matches!(
            ContentStore::new(catalog).unwrap_err(),
            CatalogError::InvalidDate { .. }
        ));

        let mut catalog = seed();
        catalog.posts[0].date = "2024-13-01".into();
        assert!(matches!(
            ContentStore::new(catalog).unwrap_err(),
            CatalogError::InvalidDate { .. }
        ));
    }

    #[test]
    fn test_negative_and_nan_prices_rejected() {
        let mut catalog = seed();
        catalog.products[0].price = -1.0;
        assert!(matches!(
            ContentStore::new(catalog).unwrap_err(),
            CatalogError::InvalidPrice { .. }
        ));

        let mut catalog = seed();
        catalog.products[2].price = f64::NAN;
        assert!(matches!(
            ContentStore::new(catalog).unwrap_err(),
            CatalogError::InvalidPrice { .. }
        ));
    }

    #[test]
    fn test_free_product_allowed() {
        let mut catalog = seed();
        catalog.products[0].price = 0.0;
        assert!(ContentStore::new(catalog).is_ok());
    }

    #[test]
    fn test_collection_with_unknown_post_rejected() {
        let mut catalog = seed();
        catalog.collections[0].posts.push("post-99".into());

        let err = ContentStore::new(catalog).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::UnknownPost { ref post, .. } if post == "post-99"
        ));
    }

    #[test]
    fn test_empty_catalog_is_valid() {
        let store = ContentStore::new(Catalog::default()).unwrap();
        assert!(store.posts().is_empty());
        assert!(store.categories().is_empty());
    }

    #[test]
    fn test_from_json_round_trip_of_seed() {
        let json = serde_json::to_string(&seed()).unwrap();
        let store = ContentStore::from_json(&json).unwrap();
        assert_eq!(store.posts(), seed().posts.as_slice());
    }

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let result = ContentStore::from_json(r#"{ "categories": [], "authors": [] }"#);
        assert!(matches!(result, Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "categories": [{{
                    "id": "food", "name": "Food & Cooking", "slug": "food-cooking",
                    "icon": "🍳", "description": "Recipes.",
                    "subcategories": ["Recipes"]
                }}],
                "products": [{{
                    "id": "p9", "name": "Cookbook", "description": "PDF",
                    "price": 5.5, "image": "", "type": "PDF"
                }}]
            }}"#
        )
        .unwrap();

        let store = ContentStore::from_path(file.path()).unwrap();
        assert_eq!(store.categories()[0].name, "Food & Cooking");
        assert_eq!(store.products()[0].price, 5.5);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = ContentStore::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(..)));
    }
}
