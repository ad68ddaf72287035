//! Editor session store.
//!
//! Owns the ordered set of open file tabs, the active tab pointer, and the
//! editor preferences. The store performs no I/O: callers fetch and save file
//! content through a `FileService` and report the results here. Every
//! operation on an unknown path is a silent no-op.

use crate::config::{EditorSettings, EditorSettingsPatch};
use crate::editor::tab::{EditorTab, LineEnding};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Root path of the file tree when nothing has been persisted.
pub const DEFAULT_ROOT_PATH: &str = "/";

// ─────────────────────────────────────────────────────────────────────────────
// Persisted View
// ─────────────────────────────────────────────────────────────────────────────

/// The persisted fields of an `EditorStore`.
///
/// Open tabs are deliberately absent: a restored buffer could silently
/// overwrite a file that changed on the server in the meantime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorSnapshot {
    pub settings: EditorSettings,
    pub root_path: String,
}

impl Default for EditorSnapshot {
    fn default() -> Self {
        Self {
            settings: EditorSettings::default(),
            root_path: DEFAULT_ROOT_PATH.to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Store
// ─────────────────────────────────────────────────────────────────────────────

/// Open editor tabs plus editor preferences.
///
/// Invariants: at most one tab per path; `active_tab_path` is `None` iff
/// there are no tabs, and otherwise names a tab in the list.
#[derive(Debug, Clone)]
pub struct EditorStore {
    /// Display order
    tabs: Vec<EditorTab>,
    active_tab_path: Option<String>,
    settings: EditorSettings,
    root_path: String,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// Create an empty store with default settings.
    pub fn new() -> Self {
        Self::restore(EditorSnapshot::default())
    }

    /// Create a store from persisted fields. No tabs are open.
    pub fn restore(snapshot: EditorSnapshot) -> Self {
        debug!("Editor store restored, root path {}", snapshot.root_path);
        Self {
            tabs: Vec::new(),
            active_tab_path: None,
            settings: snapshot.settings,
            root_path: snapshot.root_path,
        }
    }

    /// The persisted fields of this store.
    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            settings: self.settings.clone(),
            root_path: self.root_path.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// All tabs in display order.
    pub fn tabs(&self) -> &[EditorTab] {
        &self.tabs
    }

    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Find the tab for `path`.
    pub fn tab(&self, path: &str) -> Option<&EditorTab> {
        self.tabs.iter().find(|t| t.path == path)
    }

    fn tab_mut(&mut self, path: &str) -> Option<&mut EditorTab> {
        let tab = self.tabs.iter_mut().find(|t| t.path == path);
        if tab.is_none() {
            debug!("No editor tab for {}, ignoring", path);
        }
        tab
    }

    fn position(&self, path: &str) -> Option<usize> {
        self.tabs.iter().position(|t| t.path == path)
    }

    pub fn active_tab_path(&self) -> Option<&str> {
        self.active_tab_path.as_deref()
    }

    pub fn active_tab(&self) -> Option<&EditorTab> {
        self.active_tab_path.as_deref().and_then(|p| self.tab(p))
    }

    /// Index of the active tab in display order.
    pub fn active_tab_index(&self) -> Option<usize> {
        self.active_tab_path.as_deref().and_then(|p| self.position(p))
    }

    /// Whether any open tab has unsaved changes.
    pub fn has_unsaved_files(&self) -> bool {
        self.tabs.iter().any(|t| t.modified)
    }

    /// Tabs with unsaved changes, in display order.
    pub fn unsaved_tabs(&self) -> Vec<&EditorTab> {
        self.tabs.iter().filter(|t| t.modified).collect()
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn root_path(&self) -> &str {
        &self.root_path
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Opening & Closing
    // ─────────────────────────────────────────────────────────────────────────

    /// Open `path` and make it active.
    ///
    /// If the path is already open its tab is activated as-is and `content`
    /// is ignored; use `reload_file` to replace a buffer.
    pub fn open_file(&mut self, path: &str, content: impl Into<String>) -> &EditorTab {
        let index = match self.position(path) {
            Some(index) => {
                debug!("{} already open, switching to it", path);
                index
            }
            None => {
                self.tabs.push(EditorTab::new(path, content));
                info!("Opened editor tab for {}", path);
                self.tabs.len() - 1
            }
        };
        self.active_tab_path = Some(path.to_string());
        &self.tabs[index]
    }

    /// Activate the tab for `path` if it is open.
    pub fn switch_tab(&mut self, path: &str) {
        if self.position(path).is_some() {
            self.active_tab_path = Some(path.to_string());
        }
    }

    /// Close the tab for `path`.
    ///
    /// If it was active, the tab that slides into its index becomes active,
    /// or the new last tab if it was last.
    pub fn close_tab(&mut self, path: &str) {
        let Some(index) = self.position(path) else {
            return;
        };
        self.tabs.remove(index);

        if self.active_tab_path.as_deref() == Some(path) {
            self.active_tab_path = self
                .tabs
                .get(index)
                .or_else(|| self.tabs.last())
                .map(|t| t.path.clone());
        }
        debug!(
            "Closed editor tab {}, active is now {:?}",
            path, self.active_tab_path
        );
    }

    /// Close every tab. Unsaved work must be confirmed by the caller first.
    pub fn close_all_tabs(&mut self) {
        self.tabs.clear();
        self.active_tab_path = None;
    }

    /// Keep only the tab for `path` and activate it.
    ///
    /// When `path` is not open this closes everything.
    pub fn close_other_tabs(&mut self, path: &str) {
        self.tabs.retain(|t| t.path == path);
        self.active_tab_path = self.tabs.first().map(|t| t.path.clone());
    }

    /// Keep only the tabs that are *modified*.
    ///
    /// Despite the name, unmodified tabs are the ones removed. If the active
    /// tab goes, the first remaining tab becomes active.
    pub fn close_saved_tabs(&mut self) {
        self.tabs.retain(|t| t.modified);
        let active_kept = self
            .active_tab_path
            .as_deref()
            .is_some_and(|p| self.position(p).is_some());
        if !active_kept {
            self.active_tab_path = self.tabs.first().map(|t| t.path.clone());
        }
    }

    /// Move the tab at `from` to position `to`.
    pub fn reorder_tabs(&mut self, from: usize, to: usize) {
        if from == to || from >= self.tabs.len() || to >= self.tabs.len() {
            return;
        }
        let tab = self.tabs.remove(from);
        self.tabs.insert(to, tab);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Buffer State
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace a buffer's content and recompute its modified flag.
    pub fn update_content(&mut self, path: &str, content: impl Into<String>) {
        if let Some(tab) = self.tab_mut(path) {
            tab.set_content(content.into());
        }
    }

    /// Record a successful save: the current content becomes the snapshot.
    pub fn mark_saved(&mut self, path: &str) {
        if let Some(tab) = self.tab_mut(path) {
            tab.mark_saved();
            debug!("Marked {} as saved", path);
        }
    }

    /// Replace both buffer and snapshot after the file changed externally.
    pub fn reload_file(&mut self, path: &str, content: impl Into<String>) {
        if let Some(tab) = self.tab_mut(path) {
            tab.reload(content.into());
            debug!("Reloaded {}", path);
        }
    }

    pub fn update_cursor(&mut self, path: &str, line: u32, column: u32) {
        if let Some(tab) = self.tab_mut(path) {
            tab.cursor_line = line;
            tab.cursor_column = column;
        }
    }

    pub fn update_line_ending(&mut self, path: &str, line_ending: LineEnding) {
        if let Some(tab) = self.tab_mut(path) {
            if tab.line_ending != line_ending {
                tab.line_ending = line_ending;
            }
        }
    }

    /// Override the detected language.
    pub fn update_language(&mut self, path: &str, language: impl Into<String>) {
        if let Some(tab) = self.tab_mut(path) {
            tab.language = language.into();
        }
    }

    /// Reflect an outstanding load. Callers must clear it on every outcome.
    pub fn set_loading(&mut self, path: &str, loading: bool) {
        if let Some(tab) = self.tab_mut(path) {
            tab.loading = loading;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Preferences
    // ─────────────────────────────────────────────────────────────────────────

    /// Shallow-merge a partial settings update.
    pub fn update_settings(&mut self, patch: EditorSettingsPatch) {
        self.settings.merge(patch);
    }

    pub fn set_root_path(&mut self, path: impl Into<String>) {
        self.root_path = path.into();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
