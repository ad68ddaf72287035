//! A single open file in the editor.

use crate::files::{file_name, language_by_path};
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Line Endings
// ─────────────────────────────────────────────────────────────────────────────

/// Line-ending convention of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    /// `Crlf` if the text contains any `\r\n`, else `Lf`.
    pub fn detect(content: &str) -> Self {
        if content.contains("\r\n") {
            LineEnding::Crlf
        } else {
            LineEnding::Lf
        }
    }

    /// Label shown in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            LineEnding::Lf => "LF",
            LineEnding::Crlf => "CRLF",
        }
    }
}

/// Whether two buffers differ once `\r\n` is collapsed to `\n` in both.
pub(crate) fn differs_ignoring_line_endings(a: &str, b: &str) -> bool {
    if a.contains('\r') || b.contains('\r') {
        a.replace("\r\n", "\n") != b.replace("\r\n", "\n")
    } else {
        a != b
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Editor Tab
// ─────────────────────────────────────────────────────────────────────────────

/// Runtime state of one open file.
///
/// `path` is the tab's identity inside an `EditorStore`. Tabs are session
/// only and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorTab {
    pub(crate) path: String,
    pub(crate) name: String,
    pub(crate) content: String,
    /// Last loaded or saved snapshot, only used for the dirty comparison
    pub(crate) original_content: String,
    pub(crate) language: String,
    pub(crate) modified: bool,
    pub(crate) loading: bool,
    pub(crate) line_ending: LineEnding,
    /// 1-based
    pub(crate) cursor_line: u32,
    /// 1-based
    pub(crate) cursor_column: u32,
}

impl EditorTab {
    /// Create a clean tab for `path` holding `content`.
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        let path = path.into();
        let content = content.into();
        Self {
            name: file_name(&path).to_string(),
            language: language_by_path(&path).to_string(),
            line_ending: LineEnding::detect(&content),
            original_content: content.clone(),
            content,
            path,
            modified: false,
            loading: false,
            cursor_line: 1,
            cursor_column: 1,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn original_content(&self) -> &str {
        &self.original_content
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the buffer differs from the saved snapshot, ignoring line endings.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Caret position as (line, column), both 1-based.
    pub fn cursor(&self) -> (u32, u32) {
        (self.cursor_line, self.cursor_column)
    }

    /// Tab title with a `*` suffix when modified.
    pub fn title(&self) -> String {
        if self.modified {
            format!("{}*", self.name)
        } else {
            self.name.clone()
        }
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.modified = differs_ignoring_line_endings(&content, &self.original_content);
        self.content = content;
    }

    pub(crate) fn mark_saved(&mut self) {
        self.original_content = self.content.clone();
        self.modified = false;
    }

    pub(crate) fn reload(&mut self, content: String) {
        self.line_ending = LineEnding::detect(&content);
        self.original_content = content.clone();
        self.content = content;
        self.modified = false;
    }
}
