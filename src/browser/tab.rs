//! One independent directory-browsing context with its own history.

use crate::files::dir_label;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A browsing tab.
///
/// Invariant: `history_cursor < history.len()` and, once navigation has
/// settled, `history[history_cursor] == path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowserTab {
    /// Stable for the tab's lifetime. Regenerated on load if missing.
    #[serde(default)]
    pub(crate) id: String,
    /// Derived from `path`, recomputed on load
    #[serde(default)]
    pub(crate) label: String,
    #[serde(default)]
    pub(crate) path: String,
    /// Active search filter
    #[serde(default)]
    pub(crate) keyword: String,
    /// Whether the search includes subdirectories
    #[serde(default)]
    pub(crate) sub: bool,
    #[serde(default)]
    pub(crate) history: Vec<String>,
    #[serde(default)]
    pub(crate) history_cursor: usize,
}

impl BrowserTab {
    /// Create a tab at `path` with a fresh id and a one-entry history.
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            id: Uuid::new_v4().to_string(),
            label: dir_label(&path),
            history: vec![path.clone()],
            history_cursor: 0,
            path,
            keyword: String::new(),
            sub: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn sub(&self) -> bool {
        self.sub
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn history_cursor(&self) -> usize {
        self.history_cursor
    }

    pub fn can_go_back(&self) -> bool {
        self.history_cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_cursor + 1 < self.history.len()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Show `path` without touching history. Clears the search filter.
    fn show(&mut self, path: String) {
        self.label = dir_label(&path);
        self.path = path;
        self.keyword.clear();
        self.sub = false;
    }

    /// Navigate to `path` and record it in history.
    pub(crate) fn navigate(&mut self, path: &str) {
        self.show(path.to_string());
        self.push_history(path);
    }

    /// Record `path` as the newest history entry.
    ///
    /// Consecutive duplicates are skipped. Entries ahead of the cursor are
    /// dropped before appending.
    pub(crate) fn push_history(&mut self, path: &str) {
        if self.history.get(self.history_cursor).map(String::as_str) == Some(path) {
            return;
        }
        self.history.truncate(self.history_cursor + 1);
        self.history.push(path.to_string());
        self.history_cursor = self.history.len() - 1;
    }

    /// Step back one history entry. Returns `false` at the oldest entry.
    pub(crate) fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.history_cursor -= 1;
        self.show(self.history[self.history_cursor].clone());
        true
    }

    /// Step forward one history entry. Returns `false` at the newest entry.
    pub(crate) fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.history_cursor += 1;
        self.show(self.history[self.history_cursor].clone());
        true
    }

    /// Whether a stored tab carries any location at all.
    pub(crate) fn has_location(&self) -> bool {
        !self.path.is_empty() || self.history.iter().any(|p| !p.is_empty())
    }

    /// Restore the history invariants on data that came from storage.
    pub(crate) fn repair(&mut self) {
        if self.id.is_empty() {
            self.id = Uuid::new_v4().to_string();
        }
        if self.history.is_empty() {
            self.history.push(self.path.clone());
            self.history_cursor = 0;
        } else if self.history_cursor >= self.history.len() {
            self.history_cursor = self.history.len() - 1;
        }
        self.path = self.history[self.history_cursor].clone();
        self.label = dir_label(&self.path);
    }
}
