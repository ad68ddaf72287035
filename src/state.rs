//! Console state management
//!
//! This module defines the `Console` struct, the single owning context for
//! the editor session store and the file browser store. It is constructed
//! once at start-up from persisted snapshots and handed to the views by
//! reference, instead of living in process-wide globals.

use crate::browser::{BrowserSnapshot, FileBrowserStore};
use crate::config::{
    get_config_dir, load_state, save_state, save_state_silent, BROWSER_STATE_FILE,
    EDITOR_STATE_FILE,
};
use crate::editor::{EditorSnapshot, EditorStore};
use crate::error::{Result, ResultExt};
use log::{info, warn};
use std::path::{Path, PathBuf};

/// Editor and file browser state for one console session.
///
/// # Example
///
/// ```ignore
/// let mut console = Console::load();
/// console.editor.open_file("/etc/hosts", "127.0.0.1 localhost");
/// console.save();
/// ```
#[derive(Debug, Clone)]
pub struct Console {
    pub editor: EditorStore,
    pub browser: FileBrowserStore,
    /// Where `save` writes; `None` when no config directory is available
    state_dir: Option<PathBuf>,
}

impl Console {
    /// Fresh state that is never written to disk.
    pub fn in_memory() -> Self {
        Self {
            editor: EditorStore::new(),
            browser: FileBrowserStore::new(),
            state_dir: None,
        }
    }

    /// Load persisted state from the platform config directory.
    ///
    /// Missing or unreadable state falls back to defaults, so this never fails.
    pub fn load() -> Self {
        match get_config_dir() {
            Ok(dir) => Self::load_from(&dir),
            Err(e) => {
                warn!("{}; console state will not be persisted", e);
                Self::in_memory()
            }
        }
    }

    /// Load persisted state from `dir`, falling back to defaults per store.
    pub fn load_from(dir: &Path) -> Self {
        let editor = load_state::<EditorSnapshot>(dir, EDITOR_STATE_FILE)
            .map(Option::unwrap_or_default)
            .unwrap_or_warn_default(EditorSnapshot::default(), "Failed to load editor state");

        // Rehydration repairs whatever came back, including nothing at all.
        let browser = load_state::<BrowserSnapshot>(dir, BROWSER_STATE_FILE)
            .map(Option::unwrap_or_default)
            .unwrap_or_warn_default(BrowserSnapshot::default(), "Failed to load browser state");

        info!("Console state loaded from {}", dir.display());
        Self {
            editor: EditorStore::restore(editor),
            browser: FileBrowserStore::rehydrate(browser),
            state_dir: Some(dir.to_path_buf()),
        }
    }

    pub fn state_dir(&self) -> Option<&Path> {
        self.state_dir.as_deref()
    }

    /// Persist both stores' persisted fields.
    ///
    /// Best effort: failures are logged. Returns `true` if both files were
    /// written.
    pub fn save(&self) -> bool {
        let Some(dir) = self.state_dir.as_deref() else {
            return false;
        };
        let editor_saved = save_state_silent(dir, EDITOR_STATE_FILE, &self.editor.snapshot());
        let browser_saved = save_state_silent(dir, BROWSER_STATE_FILE, &self.browser.snapshot());
        editor_saved && browser_saved
    }

    /// Persist both stores into `dir`, reporting the first failure.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        save_state(dir, EDITOR_STATE_FILE, &self.editor.snapshot())?;
        save_state(dir, BROWSER_STATE_FILE, &self.browser.snapshot())?;
        Ok(())
    }

    /// Whether closing the console would lose unsaved editor content.
    pub fn has_unsaved_changes(&self) -> bool {
        self.editor.has_unsaved_files()
    }

    /// Prepare for shutdown: persist state.
    pub fn shutdown(&self) {
        if self.has_unsaved_changes() {
            warn!(
                "Shutting down with {} unsaved editor tab(s)",
                self.editor.unsaved_tabs().len()
            );
        }
        self.save();
        info!("Console shutdown complete");
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::load()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{Marked, MarkedType, ViewType};
    use crate::config::{EditorSettingsPatch, LineNumbers};
    use crate::ui::testing::RecordingNotifier;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_empty_dir_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let console = Console::load_from(dir.path());

        assert_eq!(console.editor.tab_count(), 0);
        assert_eq!(console.editor.root_path(), "/");
        assert_eq!(console.browser.tabs().len(), 1);
        assert_eq!(console.browser.active_tab().path(), "/opt");
        assert_eq!(console.state_dir(), Some(dir.path()));
    }

    #[test]
    fn test_save_and_reload_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut console = Console::load_from(dir.path());
        let mut notifier = RecordingNotifier::default();

        console.editor.update_settings(EditorSettingsPatch {
            line_numbers: Some(LineNumbers::Relative),
            ..EditorSettingsPatch::default()
        });
        console.editor.set_root_path("/www");
        console.editor.open_file("/www/index.php", "<?php");
        console.browser.create_tab(Some("/etc"), &mut notifier);
        console.browser.toggle_view_type();
        console
            .browser
            .set_clipboard(vec![Marked::new("x", "/x")], MarkedType::Move);
        let active = console.browser.active_tab_id().to_string();
        assert!(console.save());

        let restored = Console::load_from(dir.path());
        assert_eq!(
            restored.editor.settings().line_numbers,
            LineNumbers::Relative
        );
        assert_eq!(restored.editor.root_path(), "/www");
        // Editor tabs are session only
        assert_eq!(restored.editor.tab_count(), 0);
        assert_eq!(restored.browser.tabs().len(), 2);
        assert_eq!(restored.browser.active_tab_id(), active);
        assert_eq!(restored.browser.prefs().view_type, ViewType::Grid);
        assert!(restored.browser.clipboard().is_empty());
    }

    #[test]
    fn test_load_from_corrupted_files_falls_back() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(EDITOR_STATE_FILE), "{ broken").unwrap();
        fs::write(dir.path().join(BROWSER_STATE_FILE), "[1, 2").unwrap();

        let console = Console::load_from(dir.path());
        assert_eq!(console.editor.settings().tab_size, 4);
        assert_eq!(console.browser.tabs().len(), 1);
    }

    #[test]
    fn test_load_from_empty_tab_list_heals() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(BROWSER_STATE_FILE),
            r#"{"tabs": [], "activeTabId": "x", "showHidden": true}"#,
        )
        .unwrap();

        let console = Console::load_from(dir.path());
        let tabs = console.browser.tabs();
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].path(), "/opt");
        assert_eq!(console.browser.active_tab_id(), tabs[0].id());
        assert!(console.browser.prefs().show_hidden);
    }

    #[test]
    fn test_load_from_tabs_without_labels_keeps_state() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(BROWSER_STATE_FILE),
            r#"{"tabs":[{"id":"t1","path":"/data"},{"id":"t2","label":"www","path":"/www"}],"activeTabId":"t2","showHidden":true}"#,
        )
        .unwrap();

        let console = Console::load_from(dir.path());
        assert!(console.save());

        let reloaded = Console::load_from(dir.path());
        let paths: Vec<&str> = reloaded.browser.tabs().iter().map(|t| t.path()).collect();
        assert_eq!(paths, ["/data", "/www"]);
        assert_eq!(reloaded.browser.tabs()[0].label(), "data");
        assert_eq!(reloaded.browser.active_tab_id(), "t2");
        assert!(reloaded.browser.prefs().show_hidden);
    }

    #[test]
    fn test_save_to_writes_both_files() {
        let dir = TempDir::new().unwrap();
        let console = Console::in_memory();
        assert!(!console.save());

        console.save_to(dir.path()).unwrap();
        assert!(dir.path().join(EDITOR_STATE_FILE).exists());
        assert!(dir.path().join(BROWSER_STATE_FILE).exists());
    }

    #[test]
    fn test_has_unsaved_changes() {
        let mut console = Console::in_memory();
        console.editor.open_file("/a", "1");
        assert!(!console.has_unsaved_changes());
        console.editor.update_content("/a", "2");
        assert!(console.has_unsaved_changes());
    }
}
