//! Section clipboard.
//!
//! Holds at most one section with a copy/cut mode. Clipboard contents are
//! independent of the history cursor: undoing past a cut does not restore
//! what was on the clipboard before.

use sitecraft_config::SectionConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Copy,
    Cut,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClipboardEntry {
    pub section: SectionConfig,
    pub mode: ClipboardMode,
}

#[derive(Debug, Default)]
pub struct Clipboard {
    entry: Option<ClipboardEntry>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self { entry: None }
    }

    /// Store a section, overwriting any existing entry.
    pub fn store(&mut self, section: SectionConfig, mode: ClipboardMode) {
        self.entry = Some(ClipboardEntry { section, mode });
    }

    pub fn peek(&self) -> Option<&ClipboardEntry> {
        self.entry.as_ref()
    }

    pub fn clear(&mut self) {
        self.entry = None;
    }

    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_overwrites() {
        let mut clipboard = Clipboard::new();
        clipboard.store(SectionConfig::new("a", "Card"), ClipboardMode::Copy);
        clipboard.store(SectionConfig::new("b", "Button"), ClipboardMode::Cut);

        let entry = clipboard.peek().unwrap();
        assert_eq!(entry.section.key, "b");
        assert_eq!(entry.mode, ClipboardMode::Cut);
    }

    #[test]
    fn test_clear() {
        let mut clipboard = Clipboard::new();
        clipboard.store(SectionConfig::new("a", "Card"), ClipboardMode::Copy);
        clipboard.clear();
        assert!(clipboard.is_empty());
    }
}
