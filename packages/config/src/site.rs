//! Site configuration tree.
//!
//! These types mirror the JSON interchange format exactly: field names here
//! are the field names on disk. Optional fields are omitted when absent so
//! export → import round-trips are stable.

use serde::{Deserialize, Serialize};

/// Opaque property bag: string keys, arbitrary JSON values.
///
/// Props are never interpreted by the core; they flow through to whichever
/// component renders the section.
pub type PropMap = serde_json::Map<String, serde_json::Value>;

/// Root of the interchange document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: Site,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub global: GlobalConfig,
    pub pages: Vec<PageConfig>,
}

/// Site-wide settings shared by every page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub brand: String,
    pub theme: Theme,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

/// Global layout slots. An absent slot means that region is not rendered.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<LayoutSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<LayoutSlot>,
}

/// One configured layout slot (header or footer).
///
/// A slot cannot hold props without a component: clearing the component
/// removes the whole slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSlot {
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<PropMap>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Stable identity, assigned at creation, never reused.
    pub id: String,
    /// Route string. Relative child paths compose with the parent path.
    pub path: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seo: Option<Seo>,
    pub sections: Vec<SectionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<PageConfig>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PageMetadata>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Seo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Page timestamps, RFC 3339 strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Immutable once set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Refreshed on every mutation touching the page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// One configured component instance placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionConfig {
    /// Unique within its page; the sole identity for reorder and lookup.
    pub key: String,
    /// Component name, resolved by the registry at render time.
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<PropMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PropMap>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: Site {
                global: GlobalConfig {
                    brand: "My Website".to_string(),
                    theme: Theme::Light,
                    layout: LayoutConfig::default(),
                },
                pages: Vec::new(),
            },
        }
    }
}

impl SiteConfig {
    pub fn find_page(&self, page_id: &str) -> Option<&PageConfig> {
        self.site.pages.iter().find(|p| p.id == page_id)
    }

    pub fn find_page_mut(&mut self, page_id: &str) -> Option<&mut PageConfig> {
        self.site.pages.iter_mut().find(|p| p.id == page_id)
    }
}

impl PageConfig {
    pub fn new(id: impl Into<String>, path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            path: path.into(),
            name: name.into(),
            layout: None,
            seo: None,
            sections: Vec::new(),
            children: None,
            metadata: None,
        }
    }

    pub fn find_section(&self, key: &str) -> Option<&SectionConfig> {
        self.sections.iter().find(|s| s.key == key)
    }

    pub fn find_section_mut(&mut self, key: &str) -> Option<&mut SectionConfig> {
        self.sections.iter_mut().find(|s| s.key == key)
    }

    pub fn section_index(&self, key: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.key == key)
    }
}

impl SectionConfig {
    pub fn new(key: impl Into<String>, component: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            component: component.into(),
            props: None,
            style: None,
        }
    }

    pub fn with_props(mut self, props: PropMap) -> Self {
        self.props = Some(props);
        self
    }

    pub fn with_style(mut self, style: PropMap) -> Self {
        self.style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_is_empty_site() {
        let config = SiteConfig::default();
        assert_eq!(config.site.global.brand, "My Website");
        assert_eq!(config.site.global.theme, Theme::Light);
        assert!(config.site.global.layout.header.is_none());
        assert!(config.site.pages.is_empty());
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let metadata = PageMetadata {
            created_at: Some("2024-01-01T09:00:00.000Z".to_string()),
            updated_at: None,
        };

        let value = serde_json::to_value(&metadata).unwrap();
        assert_eq!(value, json!({ "createdAt": "2024-01-01T09:00:00.000Z" }));
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Theme::Light).unwrap(), json!("light"));
        assert_eq!(serde_json::to_value(Theme::Dark).unwrap(), json!("dark"));
    }

    #[test]
    fn test_absent_optionals_are_omitted() {
        let section = SectionConfig::new("hero", "Container");
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value, json!({ "key": "hero", "component": "Container" }));
    }

    #[test]
    fn test_config_round_trip() {
        let mut page = PageConfig::new("home", "/", "Home");
        page.seo = Some(Seo {
            title: Some("Acme Home".to_string()),
            description: None,
        });
        page.sections.push(
            SectionConfig::new("hero", "Container").with_props(
                json!({ "padding": "96px" }).as_object().cloned().unwrap(),
            ),
        );

        let mut config = SiteConfig::default();
        config.site.pages.push(page);

        let text = serde_json::to_string(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
