//! NicheAtlas - resolve paths, inspect the catalog and serve view-models.

use anyhow::{Context, Result};
use clap::Parser;
use nicheatlas::{
    cli::{Cli, Commands},
    config::{SiteConfig, cfg, init_config},
    content::ContentStore,
    log,
    nav::Navigation,
    query::Query,
    route::{ADMIN_PATTERN, PageId, ROUTE_TABLE, Route, resolve},
    serve::serve_site,
    view::{AssembleOptions, Assembler, ViewModel},
};
use serde::Serialize;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = SiteConfig::load(&cli)?;
    let store = config
        .content
        .open_store()
        .context("Failed to load content catalog")?;
    let options = AssembleOptions::from(&config.content);
    init_config(config);

    match &cli.command {
        Commands::Resolve { path } => resolve_path(&store, options, path),
        Commands::Routes => {
            route_rows().iter().for_each(|row| println!("{row}"));
            Ok(())
        }
        Commands::Check => {
            catalog_summary(&store)
                .iter()
                .for_each(|line| log!("content"; "{line}"));
            Ok(())
        }
        Commands::Nav => {
            println!("{}", nav_json(&store, &cfg())?);
            Ok(())
        }
        Commands::Serve { .. } => serve_site(&store),
    }
}

/// Route and view-model printed by `resolve`.
#[derive(Serialize)]
struct Resolved<'a> {
    route: Route,
    view: ViewModel<'a>,
}

/// Print the route and view-model for one path.
///
/// Stdout carries only the JSON document; a missing page is reported on stderr.
fn resolve_path(store: &ContentStore, options: AssembleOptions, path: &str) -> Result<()> {
    let (json, found) = render_resolved(store, options, path)?;
    if !found {
        log!("error"; "no page for `{}`", path);
    }
    println!("{json}");
    Ok(())
}

fn render_resolved(
    store: &ContentStore,
    options: AssembleOptions,
    path: &str,
) -> Result<(String, bool)> {
    let route = resolve(path);
    let view = Assembler::new(Query::new(store), options).assemble(&route);
    let found = !view.is_not_found();
    let json = to_json(&Resolved { route, view })?;

    Ok((json, found))
}

/// One line per route: the table, then the admin prefix and the fallback.
fn route_rows() -> Vec<String> {
    ROUTE_TABLE
        .iter()
        .map(|entry| (entry.pattern, entry.page, entry.param_names().join(", ")))
        .chain([
            (ADMIN_PATTERN, PageId::Admin, String::new()),
            ("*", PageId::NotFound, String::new()),
        ])
        .map(|(pattern, page, params)| {
            format!("{pattern:<24} {page:<12} {params}")
                .trim_end()
                .to_owned()
        })
        .collect()
}

fn catalog_summary(store: &ContentStore) -> Vec<String> {
    vec![
        format!("{} categories", store.categories().len()),
        format!("{} posts", store.posts().len()),
        format!("{} products", store.products().len()),
        format!("{} collections", store.collections().len()),
        "catalog ok".to_owned(),
    ]
}

fn nav_json(store: &ContentStore, config: &SiteConfig) -> Result<String> {
    to_json(&Navigation::build(Query::new(store), config))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(path: &str) -> (serde_json::Value, bool) {
        let store = ContentStore::builtin().unwrap();
        let (json, found) = render_resolved(&store, AssembleOptions::default(), path).unwrap();
        (serde_json::from_str(&json).unwrap(), found)
    }

    // ========================================================================
    // resolve
    // ========================================================================

    #[test]
    fn test_resolve_output_is_json() {
        let (json, found) = resolved("#/category/tech-ai");

        assert!(found);
        assert_eq!(json["route"]["page"], "category");
        assert_eq!(json["route"]["slug"], "tech-ai");
        assert_eq!(json["view"]["page"], "category");
    }

    #[test]
    fn test_resolve_missing_page_is_still_json() {
        let (json, found) = resolved("/nope");

        assert!(!found);
        assert_eq!(json["route"]["page"], "notFound");
        assert_eq!(json["view"]["page"], "notFound");
    }

    #[test]
    fn test_resolve_output_has_no_escape_codes() {
        let store = ContentStore::builtin().unwrap();
        let (json, _) = render_resolved(&store, AssembleOptions::default(), "//").unwrap();

        assert!(json.starts_with('{'));
        assert!(!json.contains('\u{1b}'));
    }

    // ========================================================================
    // routes / check / nav
    // ========================================================================

    #[test]
    fn test_route_rows() {
        let rows = route_rows();

        assert_eq!(rows.len(), ROUTE_TABLE.len() + 2);
        assert_eq!(rows.len(), 13);
        assert!(rows[0].starts_with('/'));
        assert!(rows[rows.len() - 2].starts_with(ADMIN_PATTERN));
        assert!(rows[rows.len() - 1].starts_with('*'));
        assert!(rows.iter().any(|r| r.contains("slug, sub")));
    }

    #[test]
    fn test_catalog_summary() {
        let store = ContentStore::builtin().unwrap();
        let lines = catalog_summary(&store);

        assert_eq!(
            lines,
            [
                "8 categories",
                "40 posts",
                "3 products",
                "2 collections",
                "catalog ok"
            ]
        );
    }

    #[test]
    fn test_nav_output_is_json() {
        let store = ContentStore::builtin().unwrap();
        let json = nav_json(&store, &SiteConfig::default()).unwrap();
        let nav: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(nav["site"]["title"], "NicheAtlas");
        assert_eq!(nav["header"].as_array().unwrap().len(), 4);
    }
}
