//! Catalog validation errors.
//!
//! All of these are startup-time failures: a store that constructed
//! successfully never produces them again.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a catalog is rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading catalog `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Catalog file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("duplicate {kind} id `{id}`")]
    DuplicateId { kind: &'static str, id: String },

    #[error("duplicate {kind} slug `{slug}`")]
    DuplicateSlug { kind: &'static str, slug: String },

    #[error("{kind} slug `{slug}` is not URL-safe")]
    InvalidSlug { kind: &'static str, slug: String },

    #[error("category `{category}` lists subcategory `{subcategory}` with no URL form")]
    InvalidSubcategory {
        category: String,
        subcategory: String,
    },

    #[error("category `{category}` lists subcategories that share the URL form `{slug}`")]
    DuplicateSubcategory { category: String, slug: String },

    #[error("post `{post}` references unknown category `{category}`")]
    UnknownCategory { post: String, category: String },

    #[error("post `{post}` uses subcategory `{subcategory}` which category `{category}` does not list")]
    UnknownSubcategory {
        post: String,
        category: String,
        subcategory: String,
    },

    #[error("post `{post}` has invalid date `{date}` (expected YYYY-MM-DD)")]
    InvalidDate { post: String, date: String },

    #[error("product `{product}` has invalid price {price}")]
    InvalidPrice { product: String, price: f64 },

    #[error("collection `{collection}` references unknown post `{post}`")]
    UnknownPost { collection: String, post: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_catalog_error_display() {
        let io_err = CatalogError::Io(
            PathBuf::from("catalog.json"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("catalog.json"));

        let dangling = CatalogError::UnknownCategory {
            post: "post-1".into(),
            category: "nope".into(),
        };
        assert_eq!(
            dangling.to_string(),
            "post `post-1` references unknown category `nope`"
        );
    }
}
