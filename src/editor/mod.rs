//! In-browser editor session
//!
//! This module contains the editor session store (open tabs, dirty
//! tracking, cursor and line-ending bookkeeping, preferences) and the
//! workflows that load and save tab content through the file service.

pub mod session;
mod store;
mod tab;

pub use session::{open_remote, reload_remote, save_all, save_tab};
pub use store::{EditorSnapshot, EditorStore, DEFAULT_ROOT_PATH};
pub use tab::{EditorTab, LineEnding};
