//! # Edit Session
//!
//! The single writer for a site configuration document.
//!
//! An `EditSession` owns the current document, its snapshot history, the
//! section clipboard, the selection state, and a persistence store. Every
//! user intent becomes one [`Mutation`], applied synchronously: the new
//! document replaces the old one, is recorded for undo, and is handed to the
//! store fire-and-forget. Undo and redo re-persist the snapshot they land on,
//! so a reload during an undone state resumes from the undone state.
//!
//! Sessions are plain values holding an injected store; there is no ambient
//! singleton. Construct one per test with a [`MemoryStore`].

use crate::clipboard::{Clipboard, ClipboardEntry, ClipboardMode};
use crate::errors::EditorError;
use crate::history::History;
use crate::mutations::{GlobalField, Mutation, PageField, SectionPreset};
use crate::storage::SiteStore;
use serde_json::Value;
use sitecraft_config::{PropMap, SectionConfig, SiteConfig};
use tracing::debug;

pub struct EditSession {
    config: SiteConfig,
    history: History,
    clipboard: Clipboard,
    store: Box<dyn SiteStore>,
    selected_page_id: Option<String>,
    selected_section_key: Option<String>,
}

impl EditSession {
    /// Open a session on whatever the store holds (or the built-in default).
    pub fn new(store: Box<dyn SiteStore>) -> Self {
        let config = store.load();
        Self {
            history: History::new(config.clone()),
            config,
            clipboard: Clipboard::new(),
            store,
            selected_page_id: None,
            selected_section_key: None,
        }
    }

    /// Open a session with a bounded undo history.
    pub fn with_history_limit(store: Box<dyn SiteStore>, max_snapshots: usize) -> Self {
        let config = store.load();
        Self {
            history: History::with_max_snapshots(config.clone(), max_snapshots),
            config,
            clipboard: Clipboard::new(),
            store,
            selected_page_id: None,
            selected_section_key: None,
        }
    }

    /// The current document.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Apply one mutation: record the snapshot and persist, unless the
    /// mutation was a structural no-op that left the document unchanged.
    pub fn apply(&mut self, mutation: Mutation) {
        let next = mutation.apply(&self.config);
        self.commit(next);
    }

    fn commit(&mut self, next: SiteConfig) {
        if next == self.config {
            debug!("mutation left document unchanged, not recording");
            return;
        }
        self.config = next;
        self.history.record(self.config.clone());
        self.store.save(&self.config);
    }

    // ── Structural operations ──────────────────────────────────────────

    /// Append a new page and select it. Returns the new page's id.
    pub fn add_page(&mut self) -> String {
        self.apply(Mutation::AddPage);
        // AddPage always appends, so the new page is the last one.
        let id = self
            .config
            .site
            .pages
            .last()
            .map(|p| p.id.clone())
            .unwrap_or_default();
        self.set_selected_page(Some(id.clone()));
        id
    }

    pub fn delete_page(&mut self, page_id: &str) {
        self.apply(Mutation::DeletePage {
            page_id: page_id.to_string(),
        });
        if self.selected_page_id.as_deref() == Some(page_id) {
            self.set_selected_page(None);
        }
    }

    pub fn duplicate_page(&mut self, page_id: &str) {
        self.apply(Mutation::DuplicatePage {
            page_id: page_id.to_string(),
        });
    }

    pub fn add_section(&mut self, page_id: &str, preset: SectionPreset) {
        self.apply(Mutation::AddSection {
            page_id: page_id.to_string(),
            preset,
        });
    }

    pub fn remove_section(&mut self, page_id: &str, section_key: &str) {
        self.apply(Mutation::RemoveSection {
            page_id: page_id.to_string(),
            section_key: section_key.to_string(),
        });
        if self.selected_section_key.as_deref() == Some(section_key) {
            self.selected_section_key = None;
        }
    }

    pub fn move_section(&mut self, page_id: &str, from_key: &str, to_key: &str) {
        self.apply(Mutation::MoveSection {
            page_id: page_id.to_string(),
            from_key: from_key.to_string(),
            to_key: to_key.to_string(),
        });
    }

    pub fn set_page_field(&mut self, page_id: &str, field: PageField, value: &str) {
        self.apply(Mutation::SetPageField {
            page_id: page_id.to_string(),
            field,
            value: value.to_string(),
        });
    }

    pub fn set_global_field(&mut self, field: GlobalField) {
        self.apply(Mutation::SetGlobalField { field });
    }

    // ── Props/style editing surface ────────────────────────────────────

    /// Replace a section's props from raw JSON text.
    ///
    /// Whitespace-only input means the empty map. Malformed input is
    /// rejected without touching the document; the previous valid value
    /// stays in place.
    pub fn set_section_props_json(
        &mut self,
        page_id: &str,
        section_key: &str,
        raw: &str,
    ) -> Result<(), EditorError> {
        let props = parse_prop_map(raw)?;
        self.apply(Mutation::SetSectionProps {
            page_id: page_id.to_string(),
            section_key: section_key.to_string(),
            props,
        });
        Ok(())
    }

    /// Replace a section's style from raw JSON text. Same rules as
    /// [`Self::set_section_props_json`].
    pub fn set_section_style_json(
        &mut self,
        page_id: &str,
        section_key: &str,
        raw: &str,
    ) -> Result<(), EditorError> {
        let style = parse_prop_map(raw)?;
        self.apply(Mutation::SetSectionStyle {
            page_id: page_id.to_string(),
            section_key: section_key.to_string(),
            style,
        });
        Ok(())
    }

    // ── Undo / redo ────────────────────────────────────────────────────

    /// Step back one snapshot and re-persist it. Returns false at the origin.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.config = snapshot.clone();
        self.store.save(&self.config);
        true
    }

    /// Step forward one snapshot and re-persist it. Returns false at the
    /// newest edit.
    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.config = snapshot.clone();
        self.store.save(&self.config);
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ── Clipboard ──────────────────────────────────────────────────────

    /// Copy a section to the clipboard. Returns false if it does not exist.
    pub fn copy_section(&mut self, page_id: &str, section_key: &str) -> bool {
        let Some(section) = self.find_section(page_id, section_key) else {
            return false;
        };
        self.clipboard.store(section, ClipboardMode::Copy);
        true
    }

    /// Cut a section: clipboard it, then remove it as a recorded mutation.
    pub fn cut_section(&mut self, page_id: &str, section_key: &str) -> bool {
        let Some(section) = self.find_section(page_id, section_key) else {
            return false;
        };
        self.clipboard.store(section, ClipboardMode::Cut);
        self.remove_section(page_id, section_key);
        true
    }

    /// Paste the clipboard section onto a page under a fresh key.
    ///
    /// Pasting twice, or into two pages, never collides. A cut entry is
    /// consumed by its first successful paste; a copied entry persists.
    /// Returns the new section's key, or `None` when the clipboard is empty
    /// or the page does not exist.
    pub fn paste_section(&mut self, page_id: &str) -> Option<String> {
        let ClipboardEntry { section, mode } = self.clipboard.peek()?.clone();

        if self.config.find_page(page_id).is_none() {
            return None;
        }

        self.apply(Mutation::AddSection {
            page_id: page_id.to_string(),
            preset: SectionPreset {
                component: section.component.clone(),
                props: section.props.clone(),
                style: section.style.clone(),
            },
        });

        if mode == ClipboardMode::Cut {
            self.clipboard.clear();
        }

        self.config
            .find_page(page_id)
            .and_then(|p| p.sections.last())
            .map(|s| s.key.clone())
    }

    // ── Import / export ────────────────────────────────────────────────

    /// Serialize the current document in interchange format.
    pub fn export_json(&self) -> Result<String, EditorError> {
        serde_json::to_string_pretty(&self.config).map_err(EditorError::Serialize)
    }

    /// Replace the document from interchange-format JSON.
    ///
    /// Rejection is atomic: on parse or shape failure the current document
    /// and history are untouched. On success the import is recorded as an
    /// undoable edit and the first page is selected.
    pub fn import_json(&mut self, raw: &str) -> Result<(), EditorError> {
        let parsed: SiteConfig = serde_json::from_str(raw).map_err(EditorError::InvalidConfig)?;

        let first_page = parsed.site.pages.first().map(|p| p.id.clone());
        self.commit(parsed);
        self.set_selected_page(first_page);
        Ok(())
    }

    // ── Selection ──────────────────────────────────────────────────────

    /// Select a page. Changing pages always clears the section selection.
    pub fn set_selected_page(&mut self, page_id: Option<String>) {
        self.selected_page_id = page_id;
        self.selected_section_key = None;
    }

    pub fn set_selected_section(&mut self, section_key: Option<String>) {
        self.selected_section_key = section_key;
    }

    pub fn selected_page_id(&self) -> Option<&str> {
        self.selected_page_id.as_deref()
    }

    pub fn selected_section_key(&self) -> Option<&str> {
        self.selected_section_key.as_deref()
    }

    fn find_section(&self, page_id: &str, section_key: &str) -> Option<SectionConfig> {
        self.config
            .find_page(page_id)
            .and_then(|p| p.find_section(section_key))
            .cloned()
    }
}

/// Parse raw editor text into a prop map. Empty or whitespace-only text is
/// the empty map; anything else must parse as a JSON object.
fn parse_prop_map(raw: &str) -> Result<PropMap, EditorError> {
    if raw.trim().is_empty() {
        return Ok(PropMap::new());
    }

    let value: Value = serde_json::from_str(raw).map_err(EditorError::InvalidPropsJson)?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(EditorError::PropsNotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use sitecraft_config::{PageConfig, Site, GlobalConfig, LayoutConfig, Theme};

    fn empty_site() -> SiteConfig {
        SiteConfig {
            site: Site {
                global: GlobalConfig {
                    brand: "Test".to_string(),
                    theme: Theme::Light,
                    layout: LayoutConfig::default(),
                },
                pages: vec![PageConfig::new("home", "/", "Home")],
            },
        }
    }

    fn session() -> (EditSession, MemoryStore) {
        let store = MemoryStore::with_config(empty_site());
        let session = EditSession::new(Box::new(store.clone()));
        (session, store)
    }

    #[test]
    fn test_add_page_selects_it() {
        let (mut session, _) = session();
        let id = session.add_page();
        assert_eq!(session.selected_page_id(), Some(id.as_str()));
        assert!(session.config().find_page(&id).is_some());
    }

    #[test]
    fn test_mutations_persist_to_store() {
        let (mut session, store) = session();
        session.add_page();
        assert_eq!(store.save_count(), 1);
        assert_eq!(store.last_saved().as_ref(), Some(session.config()));
    }

    #[test]
    fn test_noop_mutation_not_recorded_or_saved() {
        let (mut session, store) = session();
        session.delete_page("does-not-exist");
        assert_eq!(store.save_count(), 0);
        assert!(!session.can_undo());
    }

    #[test]
    fn test_undo_repersists_snapshot() {
        let (mut session, store) = session();
        session.add_page();
        assert!(session.undo());
        // One save for the edit, one for the undo landing snapshot.
        assert_eq!(store.save_count(), 2);
        assert_eq!(store.last_saved().as_ref(), Some(session.config()));
    }

    #[test]
    fn test_invalid_props_json_rejected_without_mutation() {
        let (mut session, store) = session();
        session.add_section("home", SectionPreset::new("Card"));
        let key = session.config().site.pages[0].sections[0].key.clone();
        let before = session.config().clone();

        let result = session.set_section_props_json("home", &key, "{ nope");
        assert!(matches!(result, Err(EditorError::InvalidPropsJson(_))));
        assert_eq!(session.config(), &before);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_props_must_be_object() {
        let (mut session, _) = session();
        session.add_section("home", SectionPreset::new("Card"));
        let key = session.config().site.pages[0].sections[0].key.clone();

        let result = session.set_section_props_json("home", &key, "[1, 2]");
        assert!(matches!(result, Err(EditorError::PropsNotAnObject)));
    }

    #[test]
    fn test_blank_props_text_means_empty_map() {
        let (mut session, _) = session();
        session.add_section("home", SectionPreset::new("Card"));
        let key = session.config().site.pages[0].sections[0].key.clone();

        session.set_section_props_json("home", &key, "   ").unwrap();
        assert_eq!(
            session.config().site.pages[0].sections[0].props,
            Some(PropMap::new())
        );
    }

    #[test]
    fn test_import_rejects_malformed_atomically() {
        let (mut session, _) = session();
        session.add_page();
        let before = session.config().clone();
        let history_len = session.history().snapshot_count();

        let result = session.import_json("{ \"site\": 42 }");
        assert!(matches!(result, Err(EditorError::InvalidConfig(_))));
        assert_eq!(session.config(), &before);
        assert_eq!(session.history().snapshot_count(), history_len);
    }

    #[test]
    fn test_export_import_round_trip() {
        let (mut session, _) = session();
        session.add_page();

        let exported = session.export_json().unwrap();
        session.import_json(&exported).unwrap();
        assert_eq!(session.export_json().unwrap(), exported);
    }

    #[test]
    fn test_selecting_page_clears_section_selection() {
        let (mut session, _) = session();
        session.set_selected_section(Some("hero".to_string()));
        session.set_selected_page(Some("home".to_string()));
        assert!(session.selected_section_key().is_none());
    }
}
