//! Built-in component library metadata.
//!
//! The specs here mirror the production UI kit's palette: display names,
//! categories and default props for each component, plus the Header/Footer
//! layout components referenced by global slots. The host application maps
//! these names to real renderers; the core only needs the metadata.

use crate::registry::{ComponentCategory, ComponentSpec, StaticRegistry};
use serde_json::Value;
use sitecraft_config::PropMap;

fn props_of(value: Value) -> PropMap {
    match value {
        Value::Object(map) => map,
        _ => PropMap::new(),
    }
}

/// Registry preloaded with the standard component library.
pub fn builtin_library() -> StaticRegistry {
    let mut registry = StaticRegistry::new();

    registry.register(
        ComponentSpec::new("Button", "Button", ComponentCategory::Basic)
            .with_description("Interactive button component")
            .with_default_props(props_of(serde_json::json!({
                "children": "Click me",
                "variant": "primary",
                "size": "md"
            }))),
    );
    registry.register(
        ComponentSpec::new("Typography", "Text / Heading", ComponentCategory::Basic)
            .with_description("Text and heading component")
            .with_default_props(props_of(serde_json::json!({
                "children": "Sample text",
                "variant": "body1"
            }))),
    );
    registry.register(
        ComponentSpec::new("Card", "Card", ComponentCategory::Display)
            .with_description("Card container component")
            .with_default_props(props_of(serde_json::json!({
                "title": "Card Title",
                "children": "Card content goes here",
                "shadow": true
            }))),
    );
    registry.register(
        ComponentSpec::new("Input", "Input Field", ComponentCategory::Form)
            .with_description("Form input component")
            .with_default_props(props_of(serde_json::json!({
                "placeholder": "Enter text...",
                "type": "text"
            }))),
    );
    registry.register(
        ComponentSpec::new("Row", "Row", ComponentCategory::Layout)
            .with_description("Horizontal layout container"),
    );
    registry.register(
        ComponentSpec::new("Col", "Column", ComponentCategory::Layout)
            .with_description("Vertical layout container"),
    );
    registry.register(
        ComponentSpec::new("Container", "Container", ComponentCategory::Layout)
            .with_description("Page container component"),
    );
    registry.register(
        ComponentSpec::new("Avatar", "Avatar", ComponentCategory::Display)
            .with_description("User avatar component"),
    );
    registry.register(
        ComponentSpec::new("Badge", "Badge", ComponentCategory::Display)
            .with_description("Badge component")
            .with_default_props(props_of(serde_json::json!({ "children": "Badge" }))),
    );
    registry.register(
        ComponentSpec::new("Spinner", "Spinner", ComponentCategory::Display)
            .with_description("Loading spinner"),
    );
    registry.register(
        ComponentSpec::new("Navbar", "Navbar", ComponentCategory::Navigation)
            .with_description("Navigation bar component"),
    );
    registry.register(
        ComponentSpec::new("Accordion", "Accordion", ComponentCategory::Display)
            .with_description("Accordion component"),
    );
    registry.register(
        ComponentSpec::new("Tabs", "Tabs", ComponentCategory::Display)
            .with_description("Tabs component"),
    );
    registry.register(
        ComponentSpec::new("List", "List", ComponentCategory::Display)
            .with_description("List component"),
    );
    registry.register(
        ComponentSpec::new("ListItem", "List Item", ComponentCategory::Display)
            .with_description("List item component"),
    );
    registry.register(
        ComponentSpec::new("Pagination", "Pagination", ComponentCategory::Navigation)
            .with_description("Pagination component"),
    );
    registry.register(
        ComponentSpec::new("Modal", "Modal", ComponentCategory::Display)
            .with_description("Modal dialog component"),
    );
    registry.register(
        ComponentSpec::new("Tooltip", "Tooltip", ComponentCategory::Display)
            .with_description("Tooltip component"),
    );

    // Layout components referenced by global header/footer slots.
    registry.register(
        ComponentSpec::new("Header", "Site Header", ComponentCategory::Navigation)
            .with_description("Global page header"),
    );
    registry.register(
        ComponentSpec::new("Footer", "Site Footer", ComponentCategory::Navigation)
            .with_description("Global page footer"),
    );

    registry
}
