//! File browser state
//!
//! This module provides the multi-tab directory browser:
//! - Browsing tabs with per-tab back/forward history
//! - View preferences shared by all tabs
//! - A cross-tab clipboard and the paste workflow that consumes it
//! - Listing and deleting through the file service

mod clipboard;
pub mod listing;
pub mod paste;
mod prefs;
mod store;
mod tab;

pub use clipboard::{Clipboard, Marked, MarkedType};
pub use listing::{delete_entries, list_tab};
pub use paste::{paste, PasteOutcome};
pub use prefs::{SortOrder, ViewPrefs, ViewType};
pub use store::{BrowserSnapshot, FileBrowserStore, DEFAULT_BROWSER_PATH, MAX_TABS};
pub use tab::BrowserTab;
