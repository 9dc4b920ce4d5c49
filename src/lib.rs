//! NicheAtlas - route resolution and view assembly for a content site.
//!
//! # Pipeline
//!
//! ```text
//! path ──► route::resolve ──► Route ──► view::Assembler ──► ViewModel ──► JSON
//!                                            │
//!                                       query::Query
//!                                            │
//!                                    content::ContentStore
//! ```
//!
//! | Module    | Role                                              |
//! |-----------|---------------------------------------------------|
//! | `content` | Validated, read-only catalog (seed or JSON file)  |
//! | `query`   | Pure lookups over the store                       |
//! | `route`   | Path → `Route`, and `Route` → canonical path      |
//! | `view`    | `Route` → page-ready view-model                   |
//! | `nav`     | Header, mega menu, footer and language links      |
//! | `config`  | `nicheatlas.toml` loading and global handle       |
//! | `serve`   | Development HTTP server                           |

pub mod cli;
pub mod config;
pub mod content;
pub mod logger;
pub mod nav;
pub mod query;
pub mod route;
pub mod serve;
pub mod view;
