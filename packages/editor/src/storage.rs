//! # Persistence Collaborator
//!
//! The editor hands the current document to a [`SiteStore`] after every
//! recorded mutation and reads it back at session start. Saves are best
//! effort: a failure is logged, never surfaced, and never touches the
//! in-memory document. A load that fails for any reason falls back to the
//! built-in default site.
//!
//! Every successful save also signals subscribers in the same process, so
//! other readers (a preview window, a router) can re-read the stored
//! document.

use sitecraft_config::{default_site_config, SiteConfig};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use tracing::warn;

pub trait SiteStore {
    /// Retrieve the stored document, or the built-in default when nothing is
    /// stored or retrieval fails.
    fn load(&self) -> SiteConfig;

    /// Persist the document, best effort. Signals subscribers on success.
    fn save(&mut self, config: &SiteConfig);

    /// Subscribe to document-changed notifications. One `()` arrives per
    /// successful save.
    fn subscribe(&mut self) -> Receiver<()>;
}

/// Fan-out for document-changed notifications. Disconnected subscribers are
/// dropped on the next signal.
#[derive(Default)]
struct ChangeSignal {
    subscribers: Vec<Sender<()>>,
}

impl ChangeSignal {
    fn subscribe(&mut self) -> Receiver<()> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }

    fn notify(&mut self) {
        self.subscribers.retain(|tx| tx.send(()).is_ok());
    }
}

/// JSON file on disk.
pub struct FileStore {
    path: PathBuf,
    signal: ChangeSignal,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            signal: ChangeSignal::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SiteStore for FileStore {
    fn load(&self) -> SiteConfig {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return default_site_config();
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read site config, using default");
                return default_site_config();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "stored site config is malformed, using default");
                default_site_config()
            }
        }
    }

    fn save(&mut self, config: &SiteConfig) {
        let serialized = match serde_json::to_string_pretty(config) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(%err, "failed to serialize site config");
                return;
            }
        };

        if let Err(err) = std::fs::write(&self.path, serialized) {
            warn!(path = %self.path.display(), %err, "failed to save site config");
            return;
        }

        self.signal.notify();
    }

    fn subscribe(&mut self) -> Receiver<()> {
        self.signal.subscribe()
    }
}

/// In-memory store. The shared inner state makes it usable as a test double:
/// clone one handle into the session and keep another to inspect saves.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryStoreInner>>,
}

#[derive(Default)]
struct MemoryStoreInner {
    stored: Option<SiteConfig>,
    save_count: usize,
    signal: ChangeSignal,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a document already stored.
    pub fn with_config(config: SiteConfig) -> Self {
        let store = Self::default();
        store.lock().stored = Some(config);
        store
    }

    pub fn last_saved(&self) -> Option<SiteConfig> {
        self.lock().stored.clone()
    }

    pub fn save_count(&self) -> usize {
        self.lock().save_count
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryStoreInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl SiteStore for MemoryStore {
    fn load(&self) -> SiteConfig {
        self.lock().stored.clone().unwrap_or_else(default_site_config)
    }

    fn save(&mut self, config: &SiteConfig) {
        let mut inner = self.lock();
        inner.stored = Some(config.clone());
        inner.save_count += 1;
        inner.signal.notify();
    }

    fn subscribe(&mut self) -> Receiver<()> {
        self.lock().signal.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_load_falls_back_to_default() {
        let store = MemoryStore::new();
        let config = store.load();
        assert_eq!(config, default_site_config());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let mut config = SiteConfig::default();
        config.site.global.brand = "Test".to_string();

        store.save(&config);
        assert_eq!(store.load(), config);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn test_save_signals_subscribers() {
        let mut store = MemoryStore::new();
        let rx = store.subscribe();

        store.save(&SiteConfig::default());
        store.save(&SiteConfig::default());

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_file_store_missing_file_loads_default() {
        let store = FileStore::new("/nonexistent/sitecraft-test.json");
        assert_eq!(store.load(), default_site_config());
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = std::env::temp_dir().join("sitecraft-file-store-test.json");
        let mut store = FileStore::new(&path);

        let mut config = SiteConfig::default();
        config.site.global.brand = "Disk".to_string();
        store.save(&config);

        assert_eq!(store.load(), config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_file_store_malformed_content_loads_default() {
        let path = std::env::temp_dir().join("sitecraft-malformed-test.json");
        std::fs::write(&path, "{ not valid json").unwrap();

        let store = FileStore::new(&path);
        assert_eq!(store.load(), default_site_config());
        let _ = std::fs::remove_file(&path);
    }
}
