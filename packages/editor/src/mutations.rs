//! # Document Mutations
//!
//! High-level semantic operations on site configuration documents.
//!
//! ## Design Principles
//!
//! 1. **Intent-preserving**: each mutation represents one user-level edit
//! 2. **Pure**: `apply` takes the current document and returns a complete
//!    replacement; the input is never modified
//! 3. **No partial states**: a returned document is always structurally valid
//! 4. **Missing targets are no-ops**: referencing an absent page id or
//!    section key returns the document unchanged
//!
//! ## Mutation Semantics
//!
//! ### MoveSection
//! - The moved section lands where the target section visually sits: the
//!   insertion index is the target's index before removal, which after
//!   removal places the section exactly at the target's old slot
//! - No-op if either key is missing or both keys are equal
//!
//! ### SetSectionProps / SetSectionStyle
//! - Atomic replacement of the whole map, no deep merge
//!
//! ### Timestamps
//! - Every operation touching a page refreshes that page's `updatedAt`;
//!   `createdAt` is set once at creation and never altered

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use sitecraft_config::{
    LayoutSlot, PageConfig, PageMetadata, PropMap, SectionConfig, Seo, SiteConfig, Theme,
};

/// Template for creating a new section quickly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPreset {
    pub component: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<PropMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<PropMap>,
}

impl SectionPreset {
    pub fn new(component: impl Into<String>) -> Self {
        Self {
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

/// Scalar page fields addressable by [`Mutation::SetPageField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PageField {
    Name,
    Path,
    Layout,
    SeoTitle,
    SeoDescription,
}

/// Global (site-wide) fields addressable by [`Mutation::SetGlobalField`].
///
/// Clearing a slot's component removes the slot entirely, props included: a
/// slot cannot hold props without a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GlobalField {
    Brand(String),
    Theme(Theme),
    HeaderComponent(Option<String>),
    HeaderProps(PropMap),
    FooterComponent(Option<String>),
    FooterProps(PropMap),
}

/// Semantic mutations over a [`SiteConfig`] document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Append a new empty page with a fresh id and default path
    AddPage,

    /// Remove a page from the root page list
    DeletePage { page_id: String },

    /// Deep-copy a page subtree under a fresh id
    DuplicatePage { page_id: String },

    /// Append a section built from a preset
    AddSection {
        page_id: String,
        preset: SectionPreset,
    },

    /// Remove the first section whose key matches
    RemoveSection {
        page_id: String,
        section_key: String,
    },

    /// Reorder: drop the `from` section where the `to` section sits
    MoveSection {
        page_id: String,
        from_key: String,
        to_key: String,
    },

    /// Replace a section's props map wholesale
    SetSectionProps {
        page_id: String,
        section_key: String,
        props: PropMap,
    },

    /// Replace a section's style map wholesale
    SetSectionStyle {
        page_id: String,
        section_key: String,
        style: PropMap,
    },

    /// Replace exactly one scalar page field
    SetPageField {
        page_id: String,
        field: PageField,
        value: String,
    },

    /// Replace a site-wide setting
    SetGlobalField { field: GlobalField },
}

impl Mutation {
    /// Apply this mutation, producing a complete replacement document.
    ///
    /// The input is never modified. Structural no-ops (missing page id or
    /// section key) return a document equal to the input.
    pub fn apply(&self, config: &SiteConfig) -> SiteConfig {
        let mut next = config.clone();

        match self {
            Mutation::AddPage => Self::apply_add_page(&mut next),
            Mutation::DeletePage { page_id } => Self::apply_delete_page(&mut next, page_id),
            Mutation::DuplicatePage { page_id } => Self::apply_duplicate_page(&mut next, page_id),
            Mutation::AddSection { page_id, preset } => {
                Self::apply_add_section(&mut next, page_id, preset)
            }
            Mutation::RemoveSection {
                page_id,
                section_key,
            } => Self::apply_remove_section(&mut next, page_id, section_key),
            Mutation::MoveSection {
                page_id,
                from_key,
                to_key,
            } => Self::apply_move_section(&mut next, page_id, from_key, to_key),
            Mutation::SetSectionProps {
                page_id,
                section_key,
                props,
            } => Self::apply_set_section_map(&mut next, page_id, section_key, props, true),
            Mutation::SetSectionStyle {
                page_id,
                section_key,
                style,
            } => Self::apply_set_section_map(&mut next, page_id, section_key, style, false),
            Mutation::SetPageField {
                page_id,
                field,
                value,
            } => Self::apply_set_page_field(&mut next, page_id, *field, value),
            Mutation::SetGlobalField { field } => Self::apply_set_global_field(&mut next, field),
        }

        next
    }

    fn apply_add_page(config: &mut SiteConfig) {
        let n = config.site.pages.len() + 1;
        let mut page = PageConfig::new(
            format!("page-{}", now_millis()),
            format!("/page-{}", n),
            format!("Page {}", n),
        );
        page.layout = Some("default".to_string());
        page.seo = Some(Seo {
            title: Some(String::new()),
            description: Some(String::new()),
        });
        page.metadata = Some(PageMetadata {
            created_at: Some(now_rfc3339()),
            updated_at: None,
        });
        config.site.pages.push(page);
    }

    fn apply_delete_page(config: &mut SiteConfig, page_id: &str) {
        config.site.pages.retain(|p| p.id != page_id);
    }

    fn apply_duplicate_page(config: &mut SiteConfig, page_id: &str) {
        let Some(source) = config.find_page(page_id) else {
            return;
        };

        let mut copy = source.clone();
        copy.id = format!("page-{}", now_millis());
        copy.name.push_str(" copy");
        copy.path.push_str(" copy");
        copy.metadata = Some(PageMetadata {
            created_at: Some(now_rfc3339()),
            updated_at: None,
        });
        config.site.pages.push(copy);
    }

    fn apply_add_section(config: &mut SiteConfig, page_id: &str, preset: &SectionPreset) {
        let Some(page) = config.find_page_mut(page_id) else {
            return;
        };

        let key = generate_section_key(&preset.component, page.sections.len());
        let mut section = SectionConfig::new(key, preset.component.clone());
        section.props = preset.props.clone();
        section.style = preset.style.clone();
        page.sections.push(section);
        touch(page);
    }

    fn apply_remove_section(config: &mut SiteConfig, page_id: &str, section_key: &str) {
        let Some(page) = config.find_page_mut(page_id) else {
            return;
        };

        let Some(index) = page.section_index(section_key) else {
            return;
        };

        page.sections.remove(index);
        touch(page);
    }

    fn apply_move_section(config: &mut SiteConfig, page_id: &str, from_key: &str, to_key: &str) {
        if from_key == to_key {
            return;
        }

        let Some(page) = config.find_page_mut(page_id) else {
            return;
        };

        let (Some(from_index), Some(to_index)) =
            (page.section_index(from_key), page.section_index(to_key))
        else {
            return;
        };

        // Insert at the target's pre-removal index. When `from` preceded
        // `to`, everything after it has shifted left by one, so this places
        // the moved section exactly where the target visually sat.
        let moved = page.sections.remove(from_index);
        let insert_index = to_index.min(page.sections.len());
        page.sections.insert(insert_index, moved);
        touch(page);
    }

    fn apply_set_section_map(
        config: &mut SiteConfig,
        page_id: &str,
        section_key: &str,
        map: &PropMap,
        is_props: bool,
    ) {
        let Some(page) = config.find_page_mut(page_id) else {
            return;
        };

        let Some(section) = page.find_section_mut(section_key) else {
            return;
        };

        if is_props {
            section.props = Some(map.clone());
        } else {
            section.style = Some(map.clone());
        }
        touch(page);
    }

    fn apply_set_page_field(config: &mut SiteConfig, page_id: &str, field: PageField, value: &str) {
        let Some(page) = config.find_page_mut(page_id) else {
            return;
        };

        match field {
            PageField::Name => page.name = value.to_string(),
            PageField::Path => page.path = value.to_string(),
            PageField::Layout => page.layout = Some(value.to_string()),
            PageField::SeoTitle => {
                page.seo.get_or_insert_with(Seo::default).title = Some(value.to_string());
            }
            PageField::SeoDescription => {
                page.seo.get_or_insert_with(Seo::default).description = Some(value.to_string());
            }
        }
        touch(page);
    }

    fn apply_set_global_field(config: &mut SiteConfig, field: &GlobalField) {
        let global = &mut config.site.global;

        match field {
            GlobalField::Brand(brand) => global.brand = brand.clone(),
            GlobalField::Theme(theme) => global.theme = *theme,
            GlobalField::HeaderComponent(component) => {
                set_slot_component(&mut global.layout.header, component.as_deref());
            }
            GlobalField::HeaderProps(props) => {
                set_slot_props(&mut global.layout.header, props);
            }
            GlobalField::FooterComponent(component) => {
                set_slot_component(&mut global.layout.footer, component.as_deref());
            }
            GlobalField::FooterProps(props) => {
                set_slot_props(&mut global.layout.footer, props);
            }
        }
    }
}

/// Set or clear a layout slot's component. Clearing discards the slot and its
/// props together.
fn set_slot_component(slot: &mut Option<LayoutSlot>, component: Option<&str>) {
    match component {
        None | Some("") => *slot = None,
        Some(name) => match slot {
            Some(existing) => existing.component = name.to_string(),
            None => {
                *slot = Some(LayoutSlot {
                    component: name.to_string(),
                    props: None,
                });
            }
        },
    }
}

/// Replace a slot's props. No-op when the slot has no component.
fn set_slot_props(slot: &mut Option<LayoutSlot>, props: &PropMap) {
    if let Some(existing) = slot {
        existing.props = Some(props.clone());
    }
}

/// Refresh `updatedAt`, preserving `createdAt`.
fn touch(page: &mut PageConfig) {
    let metadata = page.metadata.get_or_insert_with(PageMetadata::default);
    metadata.updated_at = Some(now_rfc3339());
}

/// Section keys combine component name, creation time and positional index,
/// which keeps them unique within a page for a whole editing session.
pub(crate) fn generate_section_key(component: &str, index: usize) -> String {
    format!("{}-{}-{}", component, now_millis(), index)
}

pub(crate) fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
