//! File browser store.
//!
//! Owns the browsing tabs, the shared view preferences and the shared
//! clipboard. Like the editor store it never calls the file service;
//! unknown ids and out-of-range navigation are silent no-ops.

use crate::browser::clipboard::{Clipboard, Marked, MarkedType};
use crate::browser::prefs::ViewPrefs;
use crate::browser::tab::BrowserTab;
use crate::files::FileListQuery;
use crate::ui::Notifier;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Directory a tab opens at when nothing else is known.
pub const DEFAULT_BROWSER_PATH: &str = "/opt";

/// Maximum number of browsing tabs open at once.
pub const MAX_TABS: usize = 10;

// ─────────────────────────────────────────────────────────────────────────────
// Persisted View
// ─────────────────────────────────────────────────────────────────────────────

/// The persisted fields of a `FileBrowserStore`.
///
/// The clipboard is not part of it: marked sources may be gone by the time
/// the console is reopened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BrowserSnapshot {
    pub tabs: Vec<BrowserTab>,
    pub active_tab_id: String,
    #[serde(flatten)]
    pub prefs: ViewPrefs,
}

// ─────────────────────────────────────────────────────────────────────────────
// File Browser Store
// ─────────────────────────────────────────────────────────────────────────────

/// Browsing tabs plus shared view preferences and clipboard.
///
/// Invariants: between 1 and `MAX_TABS` tabs; `active_tab_id` names one
/// of them.
#[derive(Debug, Clone)]
pub struct FileBrowserStore {
    tabs: Vec<BrowserTab>,
    active_tab_id: String,
    prefs: ViewPrefs,
    clipboard: Clipboard,
}

impl Default for FileBrowserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FileBrowserStore {
    /// Create a store with a single tab at the default path.
    pub fn new() -> Self {
        Self::rehydrate(BrowserSnapshot::default())
    }

    /// Build a store from persisted fields and repair it.
    ///
    /// The clipboard always starts empty. Tabs without any location are
    /// dropped, missing ids and labels are regenerated, duplicate ids keep
    /// their first occurrence, and the list is capped at `MAX_TABS`. An
    /// empty tab list gets one default tab, a dangling active id falls back
    /// to the first tab, and each tab's history is made consistent with its
    /// cursor.
    pub fn rehydrate(snapshot: BrowserSnapshot) -> Self {
        let BrowserSnapshot {
            mut tabs,
            mut active_tab_id,
            prefs,
        } = snapshot;

        tabs.retain(BrowserTab::has_location);
        for tab in &mut tabs {
            tab.repair();
        }

        let mut seen = HashSet::new();
        tabs.retain(|tab| seen.insert(tab.id.clone()));

        if tabs.len() > MAX_TABS {
            warn!(
                "Restored {} browser tabs, keeping the first {}",
                tabs.len(),
                MAX_TABS
            );
            tabs.truncate(MAX_TABS);
        }

        if tabs.is_empty() {
            debug!("No browser tabs restored, opening {}", DEFAULT_BROWSER_PATH);
            tabs.push(BrowserTab::new(DEFAULT_BROWSER_PATH));
        }

        if !tabs.iter().any(|t| t.id == active_tab_id) {
            active_tab_id = tabs[0].id.clone();
        }

        info!("File browser restored with {} tab(s)", tabs.len());
        Self {
            tabs,
            active_tab_id,
            prefs,
            clipboard: Clipboard::default(),
        }
    }

    /// The persisted fields of this store.
    pub fn snapshot(&self) -> BrowserSnapshot {
        BrowserSnapshot {
            tabs: self.tabs.clone(),
            active_tab_id: self.active_tab_id.clone(),
            prefs: self.prefs.clone(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn tabs(&self) -> &[BrowserTab] {
        &self.tabs
    }

    pub fn tab(&self, id: &str) -> Option<&BrowserTab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    fn tab_mut(&mut self, id: &str) -> Option<&mut BrowserTab> {
        let tab = self.tabs.iter_mut().find(|t| t.id == id);
        if tab.is_none() {
            debug!("No browser tab with id {}, ignoring", id);
        }
        tab
    }

    pub fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    pub fn active_tab(&self) -> &BrowserTab {
        self.tab(&self.active_tab_id).unwrap_or(&self.tabs[0])
    }

    pub fn prefs(&self) -> &ViewPrefs {
        &self.prefs
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Sort parameter for listing requests.
    pub fn sort_param(&self) -> String {
        self.prefs.sort_param()
    }

    /// Listing request for tab `id` under the current preferences.
    pub fn list_query(&self, id: &str, page: u32, limit: u32) -> Option<FileListQuery> {
        self.tab(id).map(|tab| FileListQuery {
            path: tab.path.clone(),
            keyword: tab.keyword.clone(),
            sub: tab.sub,
            sort: self.prefs.sort_param(),
            page,
            limit,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Tab Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Open a new tab and activate it.
    ///
    /// The path defaults to the active tab's path. At `MAX_TABS` the
    /// request is refused with a warning and nothing changes.
    pub fn create_tab(
        &mut self,
        path: Option<&str>,
        notifier: &mut dyn Notifier,
    ) -> Option<&BrowserTab> {
        if self.tabs.len() >= MAX_TABS {
            notifier.warning(&format!("A maximum of {} tabs can be open", MAX_TABS));
            return None;
        }

        let path = path
            .map(str::to_string)
            .or_else(|| self.tab(&self.active_tab_id).map(|t| t.path.clone()))
            .unwrap_or_else(|| DEFAULT_BROWSER_PATH.to_string());

        let tab = BrowserTab::new(path);
        debug!("Created browser tab {} at {}", tab.id, tab.path);
        self.active_tab_id = tab.id.clone();
        self.tabs.push(tab);
        self.tabs.last()
    }

    /// Close tab `id`. The last remaining tab cannot be closed.
    pub fn close_tab(&mut self, id: &str) {
        if self.tabs.len() <= 1 {
            debug!("Refusing to close the last browser tab");
            return;
        }
        let Some(index) = self.tabs.iter().position(|t| t.id == id) else {
            return;
        };
        self.tabs.remove(index);

        if self.active_tab_id == id {
            let next = index.min(self.tabs.len() - 1);
            self.active_tab_id = self.tabs[next].id.clone();
        }
    }

    /// Activate tab `id` if it exists.
    pub fn switch_tab(&mut self, id: &str) {
        if self.tab(id).is_some() {
            self.active_tab_id = id.to_string();
        }
    }

    /// Replace the tab order with a drag-and-drop result.
    ///
    /// `tabs` must be a permutation of the current tabs (same ids, each once).
    /// Anything else is rejected with a warning so no tab is silently lost.
    pub fn reorder_tabs(&mut self, tabs: Vec<BrowserTab>) -> bool {
        let current: HashSet<&str> = self.tabs.iter().map(|t| t.id.as_str()).collect();
        let proposed: HashSet<&str> = tabs.iter().map(|t| t.id.as_str()).collect();

        if tabs.len() != self.tabs.len() || proposed.len() != tabs.len() || proposed != current {
            warn!("Ignoring browser tab reorder that is not a permutation of the open tabs");
            return false;
        }

        self.tabs = tabs;
        true
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Navigate tab `id` to `path`, clearing its search and recording history.
    pub fn update_tab_path(&mut self, id: &str, path: &str) {
        if let Some(tab) = self.tab_mut(id) {
            tab.navigate(path);
        }
    }

    /// Record `path` in tab `id`'s history without changing its current path.
    pub fn push_history(&mut self, id: &str, path: &str) {
        if let Some(tab) = self.tab_mut(id) {
            tab.push_history(path);
        }
    }

    pub fn history_back(&mut self, id: &str) {
        if let Some(tab) = self.tab_mut(id) {
            tab.back();
        }
    }

    pub fn history_forward(&mut self, id: &str) {
        if let Some(tab) = self.tab_mut(id) {
            tab.forward();
        }
    }

    /// Set tab `id`'s search filter.
    pub fn set_keyword(&mut self, id: &str, keyword: impl Into<String>, sub: bool) {
        if let Some(tab) = self.tab_mut(id) {
            tab.keyword = keyword.into();
            tab.sub = sub;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Clipboard
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_clipboard(&mut self, marked: Vec<Marked>, marked_type: MarkedType) {
        debug!("Marked {} entries for {:?}", marked.len(), marked_type);
        self.clipboard = Clipboard {
            marked,
            marked_type,
        };
    }

    pub fn clear_clipboard(&mut self) {
        self.clipboard = Clipboard::default();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // View Preferences
    // ─────────────────────────────────────────────────────────────────────────

    pub fn toggle_show_hidden(&mut self) {
        self.prefs.show_hidden = !self.prefs.show_hidden;
    }

    pub fn toggle_view_type(&mut self) {
        self.prefs.view_type = self.prefs.view_type.toggle();
    }

    /// Cycle sorting on `key`: ascending, descending, unsorted.
    pub fn set_sort(&mut self, key: &str) {
        self.prefs.cycle_sort(key);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
