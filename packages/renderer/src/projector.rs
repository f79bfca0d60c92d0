//! # Render Projector
//!
//! Pure projection of one page (plus global layout slots) into an ordered
//! sequence of renderable units. Document order is rendering order: the
//! projector never reorders, filters or deduplicates sections.

use crate::registry::{resolve_section, ComponentRegistry, Resolution};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitecraft_config::{GlobalConfig, LayoutSlot, PageConfig, SectionConfig};

/// Which region of the page a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotRegion {
    Header,
    Body,
    Footer,
}

/// One renderable unit: a resolved (or placeholder) component with its final
/// property set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderUnit {
    /// Section key for body units, `"header"`/`"footer"` for slot units.
    pub key: String,
    pub region: SlotRegion,
    pub resolution: Resolution,
}

/// Project a page through the registry.
///
/// Emits the header slot first (when configured), then one unit per section
/// in document order, then the footer slot. Slot units receive the site
/// brand as an implicit `brand` prop; an explicit prop of the same name
/// wins.
pub fn project(
    page: &PageConfig,
    global: &GlobalConfig,
    registry: &dyn ComponentRegistry,
) -> Vec<RenderUnit> {
    let mut units = Vec::with_capacity(page.sections.len() + 2);

    if let Some(header) = &global.layout.header {
        units.push(slot_unit("header", SlotRegion::Header, header, global, registry));
    }

    for section in &page.sections {
        units.push(RenderUnit {
            key: section.key.clone(),
            region: SlotRegion::Body,
            resolution: resolve_section(registry, section),
        });
    }

    if let Some(footer) = &global.layout.footer {
        units.push(slot_unit("footer", SlotRegion::Footer, footer, global, registry));
    }

    units
}

fn slot_unit(
    key: &str,
    region: SlotRegion,
    slot: &LayoutSlot,
    global: &GlobalConfig,
    registry: &dyn ComponentRegistry,
) -> RenderUnit {
    // A slot resolves exactly like a section with the same component/props.
    let mut pseudo = SectionConfig::new(key, slot.component.clone());
    pseudo.props = slot.props.clone();

    let resolution = match resolve_section(registry, &pseudo) {
        Resolution::Resolved { component, mut props } => {
            props
                .entry("brand".to_string())
                .or_insert_with(|| Value::String(global.brand.clone()));
            Resolution::Resolved { component, props }
        }
        unresolved => unresolved,
    };

    RenderUnit {
        key: key.to_string(),
        region,
        resolution,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{ComponentCategory, ComponentSpec, StaticRegistry};
    use serde_json::json;
    use sitecraft_config::{PropMap, SiteConfig};

    fn props_of(value: Value) -> PropMap {
        match value {
            Value::Object(map) => map,
            _ => PropMap::new(),
        }
    }

    fn registry() -> StaticRegistry {
        let mut registry = StaticRegistry::new();
        for name in ["Container", "Typography", "Header", "Footer"] {
            registry.register(ComponentSpec::new(name, name, ComponentCategory::Layout));
        }
        registry
    }

    fn page_with_sections(keys: &[(&str, &str)]) -> PageConfig {
        let mut page = PageConfig::new("home", "/", "Home");
        for (key, component) in keys {
            page.sections.push(SectionConfig::new(*key, *component));
        }
        page
    }

    #[test]
    fn test_body_units_follow_document_order() {
        let page = page_with_sections(&[("a", "Container"), ("b", "Typography"), ("c", "Container")]);
        let global = SiteConfig::default().site.global;

        let units = project(&page, &global, &registry());
        let keys: Vec<&str> = units.iter().map(|u| u.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert!(units.iter().all(|u| u.region == SlotRegion::Body));
    }

    #[test]
    fn test_header_prepended_footer_appended() {
        let page = page_with_sections(&[("a", "Container")]);
        let mut global = SiteConfig::default().site.global;
        global.layout.header = Some(LayoutSlot {
            component: "Header".to_string(),
            props: None,
        });
        global.layout.footer = Some(LayoutSlot {
            component: "Footer".to_string(),
            props: None,
        });

        let units = project(&page, &global, &registry());
        let regions: Vec<SlotRegion> = units.iter().map(|u| u.region).collect();
        assert_eq!(
            regions,
            vec![SlotRegion::Header, SlotRegion::Body, SlotRegion::Footer]
        );
    }

    #[test]
    fn test_brand_injected_into_slot_props() {
        let page = page_with_sections(&[]);
        let mut global = SiteConfig::default().site.global;
        global.brand = "Acme Co".to_string();
        global.layout.header = Some(LayoutSlot {
            component: "Header".to_string(),
            props: Some(props_of(json!({ "sticky": true }))),
        });

        let units = project(&page, &global, &registry());
        let Resolution::Resolved { props, .. } = &units[0].resolution else {
            panic!("expected resolved header");
        };
        assert_eq!(props.get("brand"), Some(&json!("Acme Co")));
        assert_eq!(props.get("sticky"), Some(&json!(true)));
    }

    #[test]
    fn test_explicit_brand_prop_wins() {
        let page = page_with_sections(&[]);
        let mut global = SiteConfig::default().site.global;
        global.brand = "Acme Co".to_string();
        global.layout.header = Some(LayoutSlot {
            component: "Header".to_string(),
            props: Some(props_of(json!({ "brand": "Override" }))),
        });

        let units = project(&page, &global, &registry());
        let Resolution::Resolved { props, .. } = &units[0].resolution else {
            panic!("expected resolved header");
        };
        assert_eq!(props.get("brand"), Some(&json!("Override")));
    }

    #[test]
    fn test_unknown_component_yields_placeholder_unit() {
        let page = page_with_sections(&[("weird", "Marquee3D")]);
        let global = SiteConfig::default().site.global;

        let units = project(&page, &global, &registry());
        assert_eq!(
            units[0].resolution,
            Resolution::Unresolved {
                component: "Marquee3D".to_string()
            }
        );
    }

    #[test]
    fn test_projection_is_pure() {
        let page = page_with_sections(&[("a", "Container")]);
        let global = SiteConfig::default().site.global;
        let page_before = page.clone();

        let first = project(&page, &global, &registry());
        let second = project(&page, &global, &registry());

        assert_eq!(first, second);
        assert_eq!(page, page_before);
    }
}
