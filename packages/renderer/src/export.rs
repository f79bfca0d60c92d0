//! Standalone HTML export for a single page.
//!
//! A rough but viewable projection: one `div` per section carrying the
//! component name as its class, the style map flattened into an inline
//! `style` attribute, and the props embedded as a JSON payload. SEO title
//! and description fall back to the page name and empty string.

use serde_json::Value;
use sitecraft_config::{PropMap, SiteConfig};

/// Render one page (looked up by id in the root page list) as a standalone
/// HTML document. `None` when the page does not exist.
pub fn export_html(config: &SiteConfig, page_id: &str) -> Option<String> {
    let page = config.find_page(page_id)?;

    let title = page
        .seo
        .as_ref()
        .and_then(|seo| seo.title.as_deref())
        .filter(|t| !t.is_empty())
        .unwrap_or(&page.name);
    let description = page
        .seo
        .as_ref()
        .and_then(|seo| seo.description.as_deref())
        .unwrap_or("");

    let mut body = String::new();
    for section in &page.sections {
        let class = section.component.to_lowercase();
        let style_attr = section
            .style
            .as_ref()
            .map(|style| style_string(style))
            .filter(|s| !s.is_empty())
            .map(|s| format!(" style=\"{}\"", s))
            .unwrap_or_default();
        let props_json = section
            .props
            .as_ref()
            .map(|props| Value::Object(props.clone()).to_string())
            .unwrap_or_else(|| "{}".to_string());

        body.push_str(&format!(
            "    <div class=\"{}\"{}>\n      <!-- {} component -->\n      {}\n    </div>\n",
            class, style_attr, section.component, props_json
        ));
    }

    Some(format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20 <meta charset=\"UTF-8\">\n\
         \x20 <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         \x20 <title>{}</title>\n\
         \x20 <meta name=\"description\" content=\"{}\">\n\
         </head>\n\
         <body>\n\
         \x20 <div class=\"page\">\n\
         {}\
         \x20 </div>\n\
         </body>\n\
         </html>\n",
        title, description, body
    ))
}

/// Flatten a style map into an inline style string, converting camelCase
/// property names to kebab-case.
fn style_string(style: &PropMap) -> String {
    style
        .iter()
        .map(|(key, value)| format!("{}: {}", camel_to_kebab(key), value_text(value)))
        .collect::<Vec<_>>()
        .join("; ")
}

fn camel_to_kebab(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sitecraft_config::{PageConfig, SectionConfig, Seo};

    fn props_of(value: Value) -> PropMap {
        match value {
            Value::Object(map) => map,
            _ => PropMap::new(),
        }
    }

    fn config() -> SiteConfig {
        let mut page = PageConfig::new("home", "/", "Home");
        page.seo = Some(Seo {
            title: Some("Acme Home".to_string()),
            description: Some("Welcome".to_string()),
        });
        page.sections.push(
            SectionConfig::new("hero", "Container")
                .with_props(props_of(json!({ "children": "Hi" })))
                .with_style(props_of(json!({ "textAlign": "center", "marginBottom": "16px" }))),
        );
        let mut config = SiteConfig::default();
        config.site.pages.push(page);
        config
    }

    #[test]
    fn test_missing_page_returns_none() {
        assert!(export_html(&config(), "nope").is_none());
    }

    #[test]
    fn test_html_carries_seo_and_sections() {
        let html = export_html(&config(), "home").unwrap();
        assert!(html.contains("<title>Acme Home</title>"));
        assert!(html.contains("content=\"Welcome\""));
        assert!(html.contains("class=\"container\""));
        assert!(html.contains("<!-- Container component -->"));
    }

    #[test]
    fn test_style_keys_converted_to_kebab_case() {
        let html = export_html(&config(), "home").unwrap();
        assert!(html.contains("text-align: center"));
        assert!(html.contains("margin-bottom: 16px"));
    }

    #[test]
    fn test_title_falls_back_to_page_name() {
        let mut config = config();
        config.site.pages[0].seo = None;
        let html = export_html(&config, "home").unwrap();
        assert!(html.contains("<title>Home</title>"));
    }
}
