//! Route flattening for the routing collaborator.
//!
//! The page tree is walked in document order, composing each page's path with
//! its ancestors'. The router consumes the flat list; the core does not match
//! request paths. Duplicate paths are not rejected here, so a router matching
//! in list order resolves collisions first-match.

use crate::site::{PageConfig, SiteConfig};

/// One routable page: stable id, composed absolute path, and the page itself.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutedPage<'a> {
    pub id: &'a str,
    pub path: String,
    pub page: &'a PageConfig,
}

/// Flatten the page tree into `(id, absolute path, page)` entries in
/// document order. Parents precede their children.
pub fn flatten_pages(config: &SiteConfig) -> Vec<RoutedPage<'_>> {
    let mut routes = Vec::new();
    for page in &config.site.pages {
        collect(page, "", &mut routes);
    }
    routes
}

fn collect<'a>(page: &'a PageConfig, parent_path: &str, out: &mut Vec<RoutedPage<'a>>) {
    let path = normalize_path(parent_path, &page.path);
    out.push(RoutedPage {
        id: &page.id,
        path: path.clone(),
        page,
    });

    if let Some(children) = &page.children {
        for child in children {
            collect(child, &path, out);
        }
    }
}

/// Compose a child path with its parent path.
///
/// A child path beginning with `/` is absolute and wins outright; otherwise
/// it is appended to the parent with runs of separators collapsed.
pub fn normalize_path(parent_path: &str, child_path: &str) -> String {
    if child_path.starts_with('/') {
        return child_path.to_string();
    }

    let base = if parent_path == "/" { "" } else { parent_path };
    let joined = format!("{}/{}", base, child_path);

    // Collapse any accidental "//" runs from empty segments.
    let mut collapsed = String::with_capacity(joined.len());
    let mut last_was_slash = false;
    for ch in joined.chars() {
        if ch == '/' {
            if !last_was_slash {
                collapsed.push(ch);
            }
            last_was_slash = true;
        } else {
            collapsed.push(ch);
            last_was_slash = false;
        }
    }
    collapsed
}
