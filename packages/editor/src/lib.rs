//! # Sitecraft Editor
//!
//! Editing engine for site configuration documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ config: SiteConfig document model           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: EditSession                         │
//! │  - Mutations (pure: old doc → new doc)      │
//! │  - Snapshot history with undo/redo          │
//! │  - Section clipboard (copy/cut/paste)       │
//! │  - Persistence via SiteStore                │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: page → render units               │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **The document is a value**: every mutation returns a complete
//!    replacement `SiteConfig`; inputs are never mutated in place.
//! 2. **One writer**: all edits flow through an [`EditSession`], invoked
//!    synchronously per user intent.
//! 3. **Snapshots, not inverses**: history stores full document copies, so a
//!    stored snapshot stays valid no matter what happens to the current doc.
//! 4. **Missing targets are no-ops**: a mutation referencing an absent page
//!    or section returns the document unchanged, never an error.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use sitecraft_editor::{EditSession, FileStore, SectionPreset};
//!
//! let mut session = EditSession::new(Box::new(FileStore::new("site.json")));
//!
//! let page_id = session.add_page();
//! session.add_section(&page_id, SectionPreset::new("Button"));
//! session.undo();
//! ```

mod clipboard;
mod errors;
mod history;
mod mutations;
mod session;
mod storage;

pub use clipboard::{Clipboard, ClipboardEntry, ClipboardMode};
pub use errors::EditorError;
pub use history::History;
pub use mutations::{GlobalField, Mutation, PageField, SectionPreset};
pub use session::EditSession;
pub use storage::{FileStore, MemoryStore, SiteStore};

// Re-export the document model for convenience
pub use sitecraft_config::{PropMap, SectionConfig, SiteConfig};
