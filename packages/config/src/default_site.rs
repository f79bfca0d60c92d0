//! Built-in starter site.
//!
//! Used whenever no stored document exists or loading fails. The content is
//! the "Acme Co" marketing starter: home (with a nested overview page),
//! contact, and pricing.

use crate::site::{
    GlobalConfig, LayoutConfig, LayoutSlot, PageConfig, PageMetadata, PropMap, SectionConfig, Seo,
    Site, SiteConfig, Theme,
};
use serde_json::{json, Value};

fn props(value: Value) -> PropMap {
    match value {
        Value::Object(map) => map,
        _ => PropMap::new(),
    }
}

fn section(key: &str, component: &str, section_props: Value, style: Value) -> SectionConfig {
    let mut section = SectionConfig::new(key, component).with_props(props(section_props));
    if !style.is_null() {
        section = section.with_style(props(style));
    }
    section
}

/// The built-in default document.
pub fn default_site_config() -> SiteConfig {
    SiteConfig {
        site: Site {
            global: GlobalConfig {
                brand: "Acme Co".to_string(),
                theme: Theme::Light,
                layout: LayoutConfig {
                    header: Some(LayoutSlot {
                        component: "Header".to_string(),
                        props: Some(props(json!({
                            "cta": {
                                "label": "Book a demo",
                                "href": "/contact",
                                "variant": "primary"
                            }
                        }))),
                    }),
                    footer: Some(LayoutSlot {
                        component: "Footer".to_string(),
                        props: Some(props(json!({ "links": ["Privacy", "Terms"] }))),
                    }),
                },
            },
            pages: vec![home_page(), contact_page(), pricing_page()],
        },
    }
}

fn home_page() -> PageConfig {
    let mut page = PageConfig::new("home", "/", "Home");
    page.layout = Some("default".to_string());
    page.metadata = Some(PageMetadata {
        created_at: Some("2024-01-01T09:00:00.000Z".to_string()),
        updated_at: Some("2024-10-01T10:00:00.000Z".to_string()),
    });
    page.seo = Some(Seo {
        title: Some("Acme Home".to_string()),
        description: Some("Welcome to Acme".to_string()),
    });
    page.sections = vec![
        section(
            "hero",
            "Container",
            json!({}),
            json!({ "background": "#F4F6FB", "padding": "96px 24px", "textAlign": "center" }),
        ),
        section(
            "hero-title",
            "Typography",
            json!({ "variant": "h1", "children": "Build faster" }),
            json!({ "marginBottom": "16px" }),
        ),
        section(
            "hero-subtitle",
            "Typography",
            json!({ "variant": "h3", "children": "Ship in weeks, not months" }),
            json!({ "marginBottom": "32px", "color": "#64748b" }),
        ),
        section(
            "hero-button",
            "Button",
            json!({ "children": "Get Started", "variant": "primary", "size": "lg" }),
            json!({ "marginBottom": "96px" }),
        ),
        section(
            "features-title",
            "Typography",
            json!({ "variant": "h2", "children": "Why teams choose Acme" }),
            json!({ "textAlign": "center", "marginBottom": "48px", "padding": "48px 24px 0" }),
        ),
        section(
            "features-grid",
            "Row",
            json!({}),
            json!({ "padding": "0 24px 48px" }),
        ),
        section(
            "feature-1",
            "Card",
            json!({ "title": "Faster go-live", "children": "Launch pages in days." }),
            json!({ "margin": "12px" }),
        ),
        section(
            "feature-2",
            "Card",
            json!({ "title": "Secure", "children": "Enterprise-grade security." }),
            json!({ "margin": "12px" }),
        ),
        section(
            "feature-3",
            "Card",
            json!({ "title": "Flexible", "children": "Compose bespoke sites with reusable sections." }),
            json!({ "margin": "12px" }),
        ),
        section(
            "cta-title",
            "Typography",
            json!({ "variant": "h2", "children": "Launch your next experience" }),
            json!({ "textAlign": "center", "marginBottom": "16px", "padding": "48px 24px 0" }),
        ),
        section(
            "cta-button",
            "Button",
            json!({ "children": "Explore pricing", "variant": "primary", "size": "lg" }),
            json!({ "marginBottom": "48px" }),
        ),
    ];
    page.children = Some(vec![{
        let mut overview = PageConfig::new("home-overview", "overview", "Overview");
        overview.sections = vec![section(
            "overview-content",
            "Typography",
            json!({ "variant": "body1", "children": "Overview content..." }),
            json!({ "padding": "24px" }),
        )];
        overview
    }]);
    page
}

fn contact_page() -> PageConfig {
    let mut page = PageConfig::new("contact", "/contact", "Contact");
    page.layout = Some("form".to_string());
    page.metadata = Some(PageMetadata {
        created_at: Some("2024-01-10T11:00:00.000Z".to_string()),
        updated_at: Some("2024-08-18T08:30:00.000Z".to_string()),
    });
    page.seo = Some(Seo {
        title: Some("Talk with sales".to_string()),
        description: Some("Reach our team using the form".to_string()),
    });
    page.sections = vec![
        section(
            "contact-title",
            "Typography",
            json!({ "variant": "h1", "children": "Let's work together" }),
            json!({ "textAlign": "center", "padding": "48px 24px 24px" }),
        ),
        section(
            "contact-form",
            "Container",
            json!({}),
            json!({ "maxWidth": "600px", "margin": "0 auto", "padding": "24px" }),
        ),
        section(
            "contact-name",
            "Input",
            json!({ "placeholder": "Full name", "type": "text" }),
            json!({ "marginBottom": "16px" }),
        ),
        section(
            "contact-email",
            "Input",
            json!({ "placeholder": "Email", "type": "email" }),
            json!({ "marginBottom": "16px" }),
        ),
        section(
            "contact-message",
            "Input",
            json!({ "placeholder": "Message", "type": "textarea" }),
            json!({ "marginBottom": "24px" }),
        ),
        section(
            "contact-submit",
            "Button",
            json!({ "children": "Send", "variant": "primary" }),
            Value::Null,
        ),
    ];
    page
}

fn pricing_page() -> PageConfig {
    let mut page = PageConfig::new("pricing", "/pricing", "Pricing");
    page.layout = Some("default".to_string());
    page.metadata = Some(PageMetadata {
        created_at: Some("2024-03-22T13:00:00.000Z".to_string()),
        updated_at: Some("2024-09-05T15:15:00.000Z".to_string()),
    });
    page.seo = Some(Seo {
        title: Some("Pricing plans".to_string()),
        description: Some("Plans that scale with your ambition.".to_string()),
    });
    page.sections = vec![
        section(
            "pricing-title",
            "Typography",
            json!({ "variant": "h1", "children": "Pricing for every stage" }),
            json!({ "textAlign": "center", "padding": "48px 24px 16px" }),
        ),
        section(
            "pricing-description",
            "Typography",
            json!({
                "variant": "body1",
                "children": "Choose a plan that matches your velocity. All tiers include collaborative editing and publishing workflows."
            }),
            json!({ "textAlign": "center", "padding": "0 24px 48px", "color": "#64748b" }),
        ),
        section(
            "pricing-button-1",
            "Button",
            json!({ "children": "Start free trial", "variant": "primary" }),
            json!({ "marginRight": "16px" }),
        ),
        section(
            "pricing-button-2",
            "Button",
            json!({ "children": "View enterprise", "variant": "secondary" }),
            Value::Null,
        ),
    ];
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::flatten_pages;

    #[test]
    fn test_default_site_has_three_root_pages() {
        let config = default_site_config();
        assert_eq!(config.site.pages.len(), 3);
        assert_eq!(config.site.global.brand, "Acme Co");
        assert!(config.site.global.layout.header.is_some());
        assert!(config.site.global.layout.footer.is_some());
    }

    #[test]
    fn test_default_site_routes() {
        let config = default_site_config();
        let paths: Vec<String> = flatten_pages(&config).into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/", "/overview", "/contact", "/pricing"]);
    }

    #[test]
    fn test_default_site_round_trips() {
        let config = default_site_config();
        let text = serde_json::to_string_pretty(&config).unwrap();
        let parsed: SiteConfig = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
