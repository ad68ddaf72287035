//! View preferences shared by every browsing tab.

use serde::{Deserialize, Serialize};

/// Listing layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    #[default]
    List,
    Grid,
}

impl ViewType {
    /// Toggle between list and grid.
    pub fn toggle(&self) -> Self {
        match self {
            ViewType::List => ViewType::Grid,
            ViewType::Grid => ViewType::List,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Global listing preferences. An empty `sort_key` means unsorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewPrefs {
    pub show_hidden: bool,
    pub view_type: ViewType,
    pub sort_key: String,
    pub sort_order: SortOrder,
}

impl ViewPrefs {
    /// Cycle sorting on `key`: ascending, then descending, then unsorted.
    ///
    /// A different key always starts over at ascending.
    pub fn cycle_sort(&mut self, key: &str) {
        if self.sort_key == key {
            match self.sort_order {
                SortOrder::Asc => self.sort_order = SortOrder::Desc,
                SortOrder::Desc => {
                    self.sort_key.clear();
                    self.sort_order = SortOrder::Asc;
                }
            }
        } else {
            self.sort_key = key.to_string();
            self.sort_order = SortOrder::Asc;
        }
    }

    /// Sort parameter for listing requests: `""`, `"key"` or `"-key"`.
    pub fn sort_param(&self) -> String {
        if self.sort_key.is_empty() {
            return String::new();
        }
        match self.sort_order {
            SortOrder::Asc => self.sort_key.clone(),
            SortOrder::Desc => format!("-{}", self.sort_key),
        }
    }
}
