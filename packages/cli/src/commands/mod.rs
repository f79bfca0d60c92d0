pub mod export_html;
pub mod export_json;
pub mod pages;

pub use export_html::ExportHtmlArgs;
pub use export_json::ExportJsonArgs;
pub use pages::PagesArgs;

use sitecraft_config::SiteConfig;
use sitecraft_editor::{FileStore, SiteStore};
use std::path::Path;

/// Load a site config through the persistence collaborator: a missing or
/// malformed file falls back to the built-in default site.
pub fn load_config(path: &Path) -> SiteConfig {
    FileStore::new(path).load()
}
