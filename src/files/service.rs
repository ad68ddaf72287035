//! Remote file service boundary.
//!
//! The console never touches the server's filesystem itself. Everything goes
//! through a `FileService`, which the host wires to the panel's HTTP API.
//! The request payload types serialize to the shapes that API expects.

use crate::error::Result;
use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Request / Response Types
// ─────────────────────────────────────────────────────────────────────────────

/// Parameters of a directory listing request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListQuery {
    pub path: String,
    pub keyword: String,
    pub sub: bool,
    /// `""`, `"key"` or `"-key"` (descending)
    pub sort: String,
    pub page: u32,
    pub limit: u32,
}

/// One entry of a directory listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntry {
    pub name: String,
    /// Absolute path on the server
    pub full: String,
    pub size: String,
    pub mode: String,
    pub owner: String,
    pub group: String,
    pub hidden: bool,
    pub symlink: bool,
    pub dir: bool,
    pub modify: String,
}

/// A page of directory entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileListing {
    pub items: Vec<FileEntry>,
    pub total: u64,
}

/// A single copy/move instruction.
///
/// `force` allows the server to overwrite an existing target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileControl {
    pub source: String,
    pub target: String,
    pub force: bool,
}

// ─────────────────────────────────────────────────────────────────────────────
// Service Trait
// ─────────────────────────────────────────────────────────────────────────────

/// Operations the console needs from the remote file API.
///
/// Implementations normalize transport failures into `Error::Service`.
pub trait FileService {
    /// List a directory.
    fn list(&mut self, query: &FileListQuery) -> Result<FileListing>;

    /// Read a file's text content.
    fn content(&mut self, path: &str) -> Result<String>;

    /// Overwrite a file's text content.
    fn save(&mut self, path: &str, content: &str) -> Result<()>;

    /// Check which of `paths` already exist, in order.
    fn exist(&mut self, paths: &[String]) -> Result<Vec<bool>>;

    /// Copy entries on the server.
    fn copy(&mut self, items: &[FileControl]) -> Result<()>;

    /// Move entries on the server.
    fn move_items(&mut self, items: &[FileControl]) -> Result<()>;

    /// Delete a file or directory.
    fn delete(&mut self, path: &str) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory `FileService` used by workflow tests.

    use super::*;
    use crate::error::Error;
    use std::collections::HashMap;

    #[derive(Debug, Default)]
    pub struct MemoryFileService {
        pub files: HashMap<String, String>,
        pub copied: Vec<Vec<FileControl>>,
        pub moved: Vec<Vec<FileControl>>,
        pub saved: Vec<(String, String)>,
        pub exist_calls: usize,
        pub fail_reads: bool,
        pub fail_writes: bool,
    }

    impl MemoryFileService {
        pub fn with_files(files: &[(&str, &str)]) -> Self {
            Self {
                files: files
                    .iter()
                    .map(|(p, c)| (p.to_string(), c.to_string()))
                    .collect(),
                ..Self::default()
            }
        }
    }

    impl FileService for MemoryFileService {
        fn list(&mut self, query: &FileListQuery) -> Result<FileListing> {
            let prefix = format!("{}/", query.path.trim_end_matches('/'));
            let items: Vec<FileEntry> = self
                .files
                .keys()
                .filter(|p| p.starts_with(&prefix))
                .map(|p| FileEntry {
                    name: p[prefix.len()..].to_string(),
                    full: p.clone(),
                    ..FileEntry::default()
                })
                .collect();
            let total = items.len() as u64;
            Ok(FileListing { items, total })
        }

        fn content(&mut self, path: &str) -> Result<String> {
            if self.fail_reads {
                return Err(Error::service("content", "connection reset"));
            }
            self.files
                .get(path)
                .cloned()
                .ok_or_else(|| Error::service("content", format!("{} not found", path)))
        }

        fn save(&mut self, path: &str, content: &str) -> Result<()> {
            if self.fail_writes {
                return Err(Error::service("save", "permission denied"));
            }
            self.files.insert(path.to_string(), content.to_string());
            self.saved.push((path.to_string(), content.to_string()));
            Ok(())
        }

        fn exist(&mut self, paths: &[String]) -> Result<Vec<bool>> {
            self.exist_calls += 1;
            Ok(paths.iter().map(|p| self.files.contains_key(p)).collect())
        }

        fn copy(&mut self, items: &[FileControl]) -> Result<()> {
            if self.fail_writes {
                return Err(Error::service("copy", "permission denied"));
            }
            self.copied.push(items.to_vec());
            Ok(())
        }

        fn move_items(&mut self, items: &[FileControl]) -> Result<()> {
            if self.fail_writes {
                return Err(Error::service("move", "permission denied"));
            }
            self.moved.push(items.to_vec());
            Ok(())
        }

        fn delete(&mut self, path: &str) -> Result<()> {
            self.files.remove(path);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_control_serialization() {
        let item = FileControl {
            source: "/opt/a.txt".to_string(),
            target: "/srv/a.txt".to_string(),
            force: true,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"source":"/opt/a.txt","target":"/srv/a.txt","force":true}"#
        );
    }

    #[test]
    fn test_file_entry_tolerates_missing_fields() {
        let entry: FileEntry = serde_json::from_str(r#"{"name": "etc", "dir": true}"#).unwrap();
        assert_eq!(entry.name, "etc");
        assert!(entry.dir);
        assert!(entry.full.is_empty());
    }
}
