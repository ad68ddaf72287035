//! File helpers and the remote file service boundary
//!
//! This module provides the pure path helpers shared by both stores
//! (display names, directory labels, language detection) and the traits
//! through which the console talks to the remote file API.

pub mod language;
pub mod paths;
pub mod service;

pub use language::language_by_path;
pub use paths::{dir_label, file_name, join_path};
pub use service::{FileControl, FileEntry, FileListQuery, FileListing, FileService};
