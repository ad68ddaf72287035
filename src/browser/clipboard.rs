//! Cross-tab clipboard of entries marked for copy or move.

use serde::{Deserialize, Serialize};

/// Pending operation for the marked entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MarkedType {
    #[default]
    Copy,
    Move,
}

/// An entry marked for a pending copy or move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marked {
    /// Entry name; the paste target is `<target dir>/<name>`
    pub name: String,
    /// Absolute source path
    pub source: String,
    pub force: bool,
}

impl Marked {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            force: false,
        }
    }
}

/// Clipboard shared by every browsing tab. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    pub(crate) marked: Vec<Marked>,
    pub(crate) marked_type: MarkedType,
}

impl Clipboard {
    pub fn marked(&self) -> &[Marked] {
        &self.marked
    }

    pub fn marked_type(&self) -> MarkedType {
        self.marked_type
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}
