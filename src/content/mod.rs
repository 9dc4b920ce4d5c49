//! Content Store: the fixed catalogs behind every page.
//!
//! # Layout
//!
//! | Module  | Role                                              |
//! |---------|---------------------------------------------------|
//! | `types` | Entities (`Category`, `Post`, `DigitalProduct`…)  |
//! | `seed`  | Built-in catalog compiled into the binary         |
//! | `store` | Validation and the read-only `ContentStore`       |
//! | `error` | `CatalogError`, raised only at startup            |
//!
//! Consumers never read the store directly for page data; they go through
//! [`crate::query::Query`], which is the only contract the rest of the crate
//! depends on. Swapping the backing catalog (seed table, JSON file, a CMS
//! export) needs no change above that layer.

mod error;
pub mod seed;
mod store;
mod types;

pub use error::CatalogError;
pub use store::ContentStore;
pub use types::{
    Catalog, Category, Collection, DigitalProduct, Language, Post, ProductKind, UnknownLanguage,
};
