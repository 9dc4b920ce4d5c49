//! Route Resolver: path string → typed [`Route`].
//!
//! # Route Table
//!
//! | Pattern                | Page         | Params    |
//! |------------------------|--------------|-----------|
//! | `/`                    | `home`       |           |
//! | `/start-here`          | `startHere`  |           |
//! | `/best-of`             | `bestOf`     |           |
//! | `/shop`                | `shop`       |           |
//! | `/newsletter`          | `newsletter` |           |
//! | `/about`               | `about`      |           |
//! | `/contact`             | `contact`    |           |
//! | `/privacy`             | `privacy`    |           |
//! | `/category/:slug`      | `category`   | slug      |
//! | `/category/:slug/:sub` | `category`   | slug, sub |
//! | `/post/:slug`          | `post`       | slug      |
//! | `/admin*`              | `admin`      |           |
//! | anything else          | `notFound`   |           |
//!
//! # Resolution
//!
//! ```text
//! "#/category/tech-ai/"
//!      │ strip client-side marker, one trailing slash
//!      ▼
//! "/category/tech-ai" ── starts with /admin? ──► Admin
//!      │ split into segments
//!      ▼
//! ["category", "tech-ai"] ── every matching pattern, most literals wins ──► Category
//!      │ nothing matched / malformed
//!      ▼
//!   NotFound
//! ```
//!
//! [`resolve`] is total: it never panics and every input maps to some route.
//! Params are bound as plain strings; checking that they point at real
//! content is the view assembler's job.

use serde::Serialize;
use std::{cmp::Reverse, fmt};

/// Marker prefix used by client-side (hash) routing, e.g. `#/shop`.
const CLIENT_ROUTE_MARKER: char = '#';

/// Prefix that switches to the admin shell.
const ADMIN_PREFIX: &str = "/admin";

// ============================================================================
// Page Identifiers
// ============================================================================

/// Identifier of a page, independent of its params.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PageId {
    Home,
    StartHere,
    BestOf,
    Shop,
    Newsletter,
    About,
    Contact,
    Privacy,
    Category,
    Post,
    Admin,
    NotFound,
}

impl PageId {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::StartHere => "startHere",
            Self::BestOf => "bestOf",
            Self::Shop => "shop",
            Self::Newsletter => "newsletter",
            Self::About => "about",
            Self::Contact => "contact",
            Self::Privacy => "privacy",
            Self::Category => "category",
            Self::Post => "post",
            Self::Admin => "admin",
            Self::NotFound => "notFound",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

// ============================================================================
// Route
// ============================================================================

/// A resolved navigation target carrying exactly the params its page needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "page", rename_all = "camelCase")]
pub enum Route {
    Home,
    StartHere,
    BestOf,
    Shop,
    Newsletter,
    About,
    Contact,
    Privacy,
    Category {
        slug: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        sub: Option<String>,
    },
    Post {
        slug: String,
    },
    Admin,
    NotFound,
}

impl Route {
    pub fn category(slug: impl Into<String>) -> Self {
        Self::Category {
            slug: slug.into(),
            sub: None,
        }
    }

    pub fn subcategory(slug: impl Into<String>, sub: impl Into<String>) -> Self {
        Self::Category {
            slug: slug.into(),
            sub: Some(sub.into()),
        }
    }

    pub fn post(slug: impl Into<String>) -> Self {
        Self::Post { slug: slug.into() }
    }

    pub const fn page(&self) -> PageId {
        match self {
            Self::Home => PageId::Home,
            Self::StartHere => PageId::StartHere,
            Self::BestOf => PageId::BestOf,
            Self::Shop => PageId::Shop,
            Self::Newsletter => PageId::Newsletter,
            Self::About => PageId::About,
            Self::Contact => PageId::Contact,
            Self::Privacy => PageId::Privacy,
            Self::Category { .. } => PageId::Category,
            Self::Post { .. } => PageId::Post,
            Self::Admin => PageId::Admin,
            Self::NotFound => PageId::NotFound,
        }
    }

    /// Path params as `(name, value)` pairs, in pattern order.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Category { slug, sub } => {
                let mut params = vec![("slug", slug.as_str())];
                if let Some(sub) = sub {
                    params.push(("sub", sub.as_str()));
                }
                params
            }
            Self::Post { slug } => vec![("slug", slug.as_str())],
            _ => Vec::new(),
        }
    }

    /// Canonical path for this route.
    ///
    /// `resolve(&route.path()) == route` holds whenever every param is a
    /// non-empty single path segment. `NotFound` has no path of its own and
    /// renders as `/404`, which resolves back to `NotFound`.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".into(),
            Self::StartHere => "/start-here".into(),
            Self::BestOf => "/best-of".into(),
            Self::Shop => "/shop".into(),
            Self::Newsletter => "/newsletter".into(),
            Self::About => "/about".into(),
            Self::Contact => "/contact".into(),
            Self::Privacy => "/privacy".into(),
            Self::Category { slug, sub: None } => format!("/category/{slug}"),
            Self::Category {
                slug,
                sub: Some(sub),
            } => format!("/category/{slug}/{sub}"),
            Self::Post { slug } => format!("/post/{slug}"),
            Self::Admin => ADMIN_PREFIX.into(),
            Self::NotFound => "/404".into(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.page())?;
        for (name, value) in self.params() {
            write!(f, " {name}={value}")?;
        }
        Ok(())
    }
}

// ============================================================================
// Pattern Table
// ============================================================================

/// One segment of a route pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

/// An entry of the route table.
#[derive(Debug, Clone, Copy)]
pub struct RoutePattern {
    /// Human-readable pattern, e.g. `/category/:slug`.
    pub pattern: &'static str,
    pub page: PageId,
    segments: &'static [Segment],
}

impl RoutePattern {
    const fn new(pattern: &'static str, page: PageId, segments: &'static [Segment]) -> Self {
        Self {
            pattern,
            page,
            segments,
        }
    }

    /// Names of the params this pattern binds.
    pub fn param_names(&self) -> Vec<&'static str> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Param(name) => Some(*name),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    fn literal_count(&self) -> usize {
        self.segments
            .iter()
            .filter(|s| matches!(s, Segment::Literal(_)))
            .count()
    }

    /// Bind `parts` against this pattern, or `None` if they don't fit.
    fn bind<'p>(&self, parts: &[&'p str]) -> Option<Vec<(&'static str, &'p str)>> {
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Vec::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) if literal == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push((*name, *part)),
            }
        }
        Some(params)
    }
}

use Segment::{Literal, Param};

/// Segment-matched routes. `/admin*` is a prefix rule handled before these.
pub const ROUTE_TABLE: &[RoutePattern] = &[
    RoutePattern::new("/", PageId::Home, &[]),
    RoutePattern::new("/start-here", PageId::StartHere, &[Literal("start-here")]),
    RoutePattern::new("/best-of", PageId::BestOf, &[Literal("best-of")]),
    RoutePattern::new("/shop", PageId::Shop, &[Literal("shop")]),
    RoutePattern::new("/newsletter", PageId::Newsletter, &[Literal("newsletter")]),
    RoutePattern::new("/about", PageId::About, &[Literal("about")]),
    RoutePattern::new("/contact", PageId::Contact, &[Literal("contact")]),
    RoutePattern::new("/privacy", PageId::Privacy, &[Literal("privacy")]),
    RoutePattern::new(
        "/category/:slug",
        PageId::Category,
        &[Literal("category"), Param("slug")],
    ),
    RoutePattern::new(
        "/category/:slug/:sub",
        PageId::Category,
        &[Literal("category"), Param("slug"), Param("sub")],
    ),
    RoutePattern::new("/post/:slug", PageId::Post, &[Literal("post"), Param("slug")]),
];

/// Display form of the admin prefix rule, for listings.
pub const ADMIN_PATTERN: &str = "/admin*";

// ============================================================================
// Resolution
// ============================================================================

/// Resolve a navigation path to its route. Total; never panics.
pub fn resolve(path: &str) -> Route {
    resolve_with(ROUTE_TABLE, path)
}

fn resolve_with(table: &[RoutePattern], path: &str) -> Route {
    let Some(path) = normalize(path) else {
        return Route::NotFound;
    };

    if path.starts_with(ADMIN_PREFIX) {
        return Route::Admin;
    }

    let parts: Vec<&str> = if path == "/" {
        Vec::new()
    } else {
        path[1..].split('/').collect()
    };
    if parts.iter().any(|part| part.is_empty()) {
        return Route::NotFound;
    }

    best_match(table, &parts).map_or(Route::NotFound, |(page, params)| {
        build_route(page, &params)
    })
}

/// Strip the client-side marker and one trailing slash.
///
/// Returns `None` for paths that are not rooted, and for `//`, whose only
/// segment is empty.
fn normalize(path: &str) -> Option<&str> {
    let path = path.strip_prefix(CLIENT_ROUTE_MARKER).unwrap_or(path);
    if path.is_empty() || path == "/" {
        return Some("/");
    }
    if !path.starts_with('/') {
        return None;
    }
    match path.strip_suffix('/') {
        Some("/") => None,
        Some(trimmed) => Some(trimmed),
        None => Some(path),
    }
}

/// Pick the matching pattern with the most literal segments.
///
/// Ties go to the earlier table entry.
fn best_match<'p>(
    table: &[RoutePattern],
    parts: &[&'p str],
) -> Option<(PageId, Vec<(&'static str, &'p str)>)> {
    table
        .iter()
        .enumerate()
        .filter_map(|(index, pattern)| {
            pattern
                .bind(parts)
                .map(|params| (pattern.literal_count(), Reverse(index), pattern.page, params))
        })
        .max_by_key(|(literals, index, ..)| (*literals, *index))
        .map(|(_, _, page, params)| (page, params))
}

fn build_route(page: PageId, params: &[(&'static str, &str)]) -> Route {
    let param = |name: &str| {
        params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_owned())
    };

    match page {
        PageId::Home => Route::Home,
        PageId::StartHere => Route::StartHere,
        PageId::BestOf => Route::BestOf,
        PageId::Shop => Route::Shop,
        PageId::Newsletter => Route::Newsletter,
        PageId::About => Route::About,
        PageId::Contact => Route::Contact,
        PageId::Privacy => Route::Privacy,
        PageId::Category => match param("slug") {
            Some(slug) => Route::Category {
                slug,
                sub: param("sub"),
            },
            None => Route::NotFound,
        },
        PageId::Post => param("slug").map_or(Route::NotFound, |slug| Route::Post { slug }),
        PageId::Admin => Route::Admin,
        PageId::NotFound => Route::NotFound,
    }
}

// ============================================================================
// Tests
// ============================================================================
