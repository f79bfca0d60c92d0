//! # Component Registry
//!
//! Lookup from component name to a render-capable spec, plus the default
//! property merge. The core never depends on how a component actually
//! renders; the spec is the capability handle the host maps to its real
//! component library.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sitecraft_config::{PropMap, SectionConfig};
use std::collections::BTreeMap;

/// Palette grouping for a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Basic,
    Layout,
    Form,
    Display,
    Navigation,
}

/// One registered component: identity, palette metadata, and defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    pub name: String,
    pub display_name: String,
    pub category: ComponentCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub default_props: PropMap,
}

impl ComponentSpec {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        category: ComponentCategory,
    ) -> Self {
        let name = name.into();
        Self {
            display_name: display_name.into(),
            category,
            description: None,
            default_props: PropMap::new(),
            name,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_props(mut self, default_props: PropMap) -> Self {
        self.default_props = default_props;
        self
    }
}

/// Lookup capability over a component library.
pub trait ComponentRegistry {
    fn resolve(&self, name: &str) -> Option<&ComponentSpec>;

    fn defaults_for(&self, name: &str) -> PropMap {
        self.resolve(name)
            .map(|spec| spec.default_props.clone())
            .unwrap_or_default()
    }
}

/// Table-backed registry. Iteration order is stable (sorted by name), which
/// keeps palette listings deterministic.
#[derive(Debug, Default, Clone)]
pub struct StaticRegistry {
    components: BTreeMap<String, ComponentSpec>,
}

impl StaticRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, spec: ComponentSpec) {
        self.components.insert(spec.name.clone(), spec);
    }

    /// All registered specs, for palette display.
    pub fn palette(&self) -> impl Iterator<Item = &ComponentSpec> {
        self.components.values()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl ComponentRegistry for StaticRegistry {
    fn resolve(&self, name: &str) -> Option<&ComponentSpec> {
        self.components.get(name)
    }
}

/// Outcome of resolving one section.
///
/// `Unresolved` is not an error: documents routinely reference components
/// that are not registered yet, and the projector renders a visible
/// placeholder for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Resolution {
    Resolved { component: String, props: PropMap },
    Unresolved { component: String },
}

impl Resolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }

    pub fn component(&self) -> &str {
        match self {
            Resolution::Resolved { component, .. } => component,
            Resolution::Unresolved { component } => component,
        }
    }
}

/// Resolve a section against a registry and merge its final property set:
/// declared defaults, overlaid by section props, overlaid by `style` (as a
/// single `style` key) when present. Shallow merge; later layers win.
pub fn resolve_section(registry: &dyn ComponentRegistry, section: &SectionConfig) -> Resolution {
    let Some(spec) = registry.resolve(&section.component) else {
        return Resolution::Unresolved {
            component: section.component.clone(),
        };
    };

    let mut props = spec.default_props.clone();
    if let Some(overrides) = &section.props {
        for (key, value) in overrides {
            props.insert(key.clone(), value.clone());
        }
    }
    if let Some(style) = &section.style {
        props.insert("style".to_string(), Value::Object(style.clone()));
    }

    Resolution::Resolved {
        component: spec.name.clone(),
        props,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn props_of(value: Value) -> PropMap {
        match value {
            Value::Object(map) => map,
            _ => PropMap::new(),
        }
    }

    fn registry_with_button() -> StaticRegistry {
        let mut registry = StaticRegistry::new();
        registry.register(
            ComponentSpec::new("Button", "Button", ComponentCategory::Basic)
                .with_default_props(props_of(json!({
                    "children": "Click me",
                    "variant": "primary",
                    "size": "md"
                }))),
        );
        registry
    }

    #[test]
    fn test_unknown_component_resolves_to_placeholder() {
        let registry = registry_with_button();
        let section = SectionConfig::new("x", "Marquee3D");

        let resolution = resolve_section(&registry, &section);
        assert_eq!(
            resolution,
            Resolution::Unresolved {
                component: "Marquee3D".to_string()
            }
        );
    }

    #[test]
    fn test_section_props_override_defaults() {
        let registry = registry_with_button();
        let section = SectionConfig::new("x", "Button")
            .with_props(props_of(json!({ "variant": "secondary" })));

        let Resolution::Resolved { props, .. } = resolve_section(&registry, &section) else {
            panic!("expected resolved");
        };
        assert_eq!(props.get("variant"), Some(&json!("secondary")));
        // Untouched defaults survive.
        assert_eq!(props.get("size"), Some(&json!("md")));
    }

    #[test]
    fn test_style_layered_last_under_style_key() {
        let registry = registry_with_button();
        let section = SectionConfig::new("x", "Button")
            .with_props(props_of(json!({ "style": "should-lose" })))
            .with_style(props_of(json!({ "margin": "12px" })));

        let Resolution::Resolved { props, .. } = resolve_section(&registry, &section) else {
            panic!("expected resolved");
        };
        assert_eq!(props.get("style"), Some(&json!({ "margin": "12px" })));
    }

    #[test]
    fn test_defaults_for_unknown_name_is_empty() {
        let registry = registry_with_button();
        assert!(registry.defaults_for("Nope").is_empty());
    }

    #[test]
    fn test_palette_is_sorted_by_name() {
        let mut registry = StaticRegistry::new();
        registry.register(ComponentSpec::new("Card", "Card", ComponentCategory::Display));
        registry.register(ComponentSpec::new("Avatar", "Avatar", ComponentCategory::Display));

        let names: Vec<&str> = registry.palette().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Avatar", "Card"]);
    }
}
