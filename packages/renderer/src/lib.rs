//! # Sitecraft Renderer
//!
//! Turns a page of abstract `(component, props, style)` sections into an
//! ordered list of renderable units.
//!
//! The registry maps component names to specs (defaults + palette metadata);
//! the projector walks a page through the registry. Unknown component names
//! are an expected mid-edit state and resolve to placeholders, never errors.

pub mod export;
pub mod library;
pub mod projector;
pub mod registry;

pub use export::export_html;
pub use library::builtin_library;
pub use projector::{project, RenderUnit, SlotRegion};
pub use registry::{
    resolve_section, ComponentCategory, ComponentRegistry, ComponentSpec, Resolution,
    StaticRegistry,
};
