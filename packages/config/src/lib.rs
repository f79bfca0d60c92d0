//! # Sitecraft Config
//!
//! The document model for a config-driven website: a `SiteConfig` tree of
//! global settings and pages, where every page is an ordered list of
//! prop-configured sections.
//!
//! This crate is pure data. Mutation lives in `sitecraft-editor`, rendering
//! in `sitecraft-renderer`.

pub mod default_site;
pub mod routes;
pub mod site;

pub use default_site::default_site_config;
pub use routes::{flatten_pages, normalize_path, RoutedPage};
pub use site::*;
