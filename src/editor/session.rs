//! Load and save workflows between the editor store and the file service.
//!
//! These functions sequence the remote calls around the store: they raise the
//! tab's `loading` flag, perform the request, and always lower the flag
//! again whether the request succeeded or not.

use crate::editor::store::EditorStore;
use crate::error::Result;
use crate::files::FileService;
use log::{info, warn};

/// Open `path` in the editor, fetching its content if it is not open yet.
///
/// An already open tab is only activated, so unsaved edits survive. On a
/// failed fetch the freshly created tab stays open, empty and not loading.
pub fn open_remote(
    editor: &mut EditorStore,
    service: &mut dyn FileService,
    path: &str,
) -> Result<()> {
    if editor.tab(path).is_some() {
        editor.switch_tab(path);
        return Ok(());
    }

    editor.open_file(path, String::new());
    fetch_into(editor, service, path)
}

/// Re-read `path` from the server, discarding the in-memory buffer.
pub fn reload_remote(
    editor: &mut EditorStore,
    service: &mut dyn FileService,
    path: &str,
) -> Result<()> {
    if editor.tab(path).is_none() {
        return Ok(());
    }
    fetch_into(editor, service, path)
}

fn fetch_into(editor: &mut EditorStore, service: &mut dyn FileService, path: &str) -> Result<()> {
    editor.set_loading(path, true);
    let result = service.content(path);
    editor.set_loading(path, false);

    match result {
        Ok(content) => {
            editor.reload_file(path, content);
            Ok(())
        }
        Err(e) => {
            warn!("Failed to load {}: {}", path, e);
            Err(e)
        }
    }
}

/// Write the tab's buffer to the server and mark it saved.
///
/// Returns `Ok(false)` if no tab is open for `path`. On failure the tab
/// keeps its modified state.
pub fn save_tab(
    editor: &mut EditorStore,
    service: &mut dyn FileService,
    path: &str,
) -> Result<bool> {
    let Some(tab) = editor.tab(path) else {
        return Ok(false);
    };
    service.save(path, tab.content())?;
    editor.mark_saved(path);
    info!("Saved {}", path);
    Ok(true)
}

/// Save every modified tab, stopping at the first failure.
///
/// Returns the number of files written.
pub fn save_all(editor: &mut EditorStore, service: &mut dyn FileService) -> Result<usize> {
    let dirty: Vec<String> = editor
        .unsaved_tabs()
        .iter()
        .map(|t| t.path().to_string())
        .collect();

    let mut saved = 0;
    for path in &dirty {
        if save_tab(editor, service, path)? {
            saved += 1;
        }
    }
    Ok(saved)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::LineEnding;
    use crate::files::service::testing::MemoryFileService;

    #[test]
    fn test_open_remote_fetches_content() {
        let mut editor = EditorStore::new();
        let mut service = MemoryFileService::with_files(&[("/etc/fstab", "UUID=x /\r\n")]);

        open_remote(&mut editor, &mut service, "/etc/fstab").unwrap();

        let tab = editor.active_tab().unwrap();
        assert_eq!(tab.path(), "/etc/fstab");
        assert_eq!(tab.content(), "UUID=x /\r\n");
        assert_eq!(tab.line_ending(), LineEnding::Crlf);
        assert!(!tab.is_loading());
        assert!(!tab.is_modified());
    }

    #[test]
    fn test_open_remote_keeps_unsaved_buffer() {
        let mut editor = EditorStore::new();
        let mut service = MemoryFileService::with_files(&[("/a", "server"), ("/b", "b")]);
        open_remote(&mut editor, &mut service, "/a").unwrap();
        editor.update_content("/a", "local");
        open_remote(&mut editor, &mut service, "/b").unwrap();

        open_remote(&mut editor, &mut service, "/a").unwrap();
        assert_eq!(editor.active_tab().unwrap().content(), "local");
    }

    #[test]
    fn test_failed_load_clears_loading_flag() {
        let mut editor = EditorStore::new();
        let mut service = MemoryFileService::default();
        service.fail_reads = true;

        assert!(open_remote(&mut editor, &mut service, "/var/log/syslog").is_err());
        let tab = editor.tab("/var/log/syslog").unwrap();
        assert!(!tab.is_loading());
        assert_eq!(tab.content(), "");
    }

    #[test]
    fn test_reload_remote_replaces_buffer() {
        let mut editor = EditorStore::new();
        let mut service = MemoryFileService::with_files(&[("/a", "v1")]);
        open_remote(&mut editor, &mut service, "/a").unwrap();
        editor.update_content("/a", "local");

        service.files.insert("/a".to_string(), "v2".to_string());
        reload_remote(&mut editor, &mut service, "/a").unwrap();
        let tab = editor.tab("/a").unwrap();
        assert_eq!(tab.content(), "v2");
        assert!(!tab.is_modified());

        // Not open: nothing to do
        reload_remote(&mut editor, &mut service, "/other").unwrap();
        assert!(editor.tab("/other").is_none());
    }

    #[test]
    fn test_save_tab_marks_saved() {
        let mut editor = EditorStore::new();
        let mut service = MemoryFileService::default();
        editor.open_file("/a", "v1");
        editor.update_content("/a", "v2");

        assert!(save_tab(&mut editor, &mut service, "/a").unwrap());
        assert!(!editor.tab("/a").unwrap().is_modified());
        assert_eq!(service.saved, vec![("/a".to_string(), "v2".to_string())]);

        assert!(!save_tab(&mut editor, &mut service, "/missing").unwrap());
    }

    #[test]
    fn test_failed_save_keeps_modified() {
        let mut editor = EditorStore::new();
        let mut service = MemoryFileService::default();
        service.fail_writes = true;
        editor.open_file("/a", "v1");
        editor.update_content("/a", "v2");

        assert!(save_tab(&mut editor, &mut service, "/a").is_err());
        assert!(editor.tab("/a").unwrap().is_modified());
    }

    #[test]
    fn test_save_all_writes_only_dirty_tabs() {
        let mut editor = EditorStore::new();
        let mut service = MemoryFileService::default();
        editor.open_file("/a", "a");
        editor.open_file("/b", "b");
        editor.open_file("/c", "c");
        editor.update_content("/a", "a2");
        editor.update_content("/c", "c2");

        assert_eq!(save_all(&mut editor, &mut service).unwrap(), 2);
        assert!(!editor.has_unsaved_files());
        assert_eq!(service.saved.len(), 2);
    }
}
