//! Panel Console
//!
//! Client-side state for the file management screens of a server management
//! panel: the in-browser editor session (open tabs, dirty tracking, cursor and
//! line-ending bookkeeping) and the multi-tab file browser (per-tab history,
//! shared view preferences, cross-tab clipboard).
//!
//! The stores never perform I/O. Remote file access goes through the
//! `FileService` trait and user-facing messages through `Notifier`.

pub mod browser;
pub mod config;
pub mod editor;
pub mod error;
pub mod files;
pub mod state;
pub mod ui;

pub use browser::FileBrowserStore;
pub use editor::EditorStore;
pub use error::{Error, Result};
pub use state::Console;
