//! Persisted state files for the console
//!
//! This module loads and saves the persisted views of the editor and file
//! browser stores as JSON files in a platform-specific directory. Callers
//! decide what a missing or unreadable file means; here a missing or empty
//! file is simply `Ok(None)`.

use crate::error::{Error, Result};
use log::{debug, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Application name used for the config directory
const APP_NAME: &str = "panel-console";

/// Persisted editor preferences and root path
pub const EDITOR_STATE_FILE: &str = "editor.json";

/// Persisted file browser tabs and view preferences
pub const BROWSER_STATE_FILE: &str = "file.json";

/// Suffix of the temporary file used during atomic writes
const BACKUP_SUFFIX: &str = ".bak";

// ─────────────────────────────────────────────────────────────────────────────
// Platform-Specific Directory Resolution
// ─────────────────────────────────────────────────────────────────────────────

/// Get the platform-specific state directory for the console.
///
/// - **Windows**: `%APPDATA%\panel-console\`
/// - **macOS**: `~/Library/Application Support/panel-console/`
/// - **Linux**: `~/.config/panel-console/`
///
/// # Errors
///
/// Returns `Error::ConfigDirNotFound` if the platform config directory
/// cannot be determined (e.g. `HOME` is not set).
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

/// Ensure `dir` exists, creating it if necessary.
fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Creating state directory: {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| Error::StateSave {
            path: dir.to_path_buf(),
            source: Box::new(e),
        })?;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Load
// ─────────────────────────────────────────────────────────────────────────────

/// Load a persisted state file from `dir`.
///
/// Returns `Ok(None)` if the file does not exist or is blank.
///
/// # Errors
///
/// - `Error::StateLoad`: the file exists but could not be read
/// - `Error::StateParse`: the file is not valid JSON for `T`
pub fn load_state<T: DeserializeOwned>(dir: &Path, file_name: &str) -> Result<Option<T>> {
    let path = dir.join(file_name);

    if !path.exists() {
        debug!("State file not found at {}", path.display());
        return Ok(None);
    }

    let contents = fs::read_to_string(&path).map_err(|e| Error::StateLoad {
        path: path.clone(),
        source: Box::new(e),
    })?;

    if contents.trim().is_empty() {
        debug!("State file {} is empty", path.display());
        return Ok(None);
    }

    let value = serde_json::from_str(&contents).map_err(|e| {
        warn!("State file at {} contains invalid JSON: {}", path.display(), e);
        Error::StateParse {
            message: format!("Failed to parse {}: {}", file_name, e),
            source: Some(Box::new(e)),
        }
    })?;

    info!("Loaded state from {}", path.display());
    Ok(Some(value))
}

// ─────────────────────────────────────────────────────────────────────────────
// Save
// ─────────────────────────────────────────────────────────────────────────────

/// Save a state value to `dir/file_name`.
///
/// The JSON is first written to a `.bak` sibling which then replaces the
/// target, so a crash mid-write never leaves a truncated state file.
///
/// # Errors
///
/// Returns `Error::StateSave` if the directory, temporary file, or rename fails.
pub fn save_state<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> Result<()> {
    ensure_dir(dir)?;
    let path = dir.join(file_name);
    let backup_path = dir.join(format!("{}{}", file_name, BACKUP_SUFFIX));

    let json = serde_json::to_string_pretty(value).map_err(|e| Error::StateSave {
        path: path.clone(),
        source: Box::new(e),
    })?;

    fs::write(&backup_path, &json).map_err(|e| Error::StateSave {
        path: backup_path.clone(),
        source: Box::new(e),
    })?;

    fs::rename(&backup_path, &path).map_err(|e| Error::StateSave {
        path: path.clone(),
        source: Box::new(e),
    })?;

    debug!("Saved state to {}", path.display());
    Ok(())
}

/// Save a state value, logging instead of returning failures.
///
/// Returns `true` if the save succeeded.
pub fn save_state_silent<T: Serialize>(dir: &Path, file_name: &str, value: &T) -> bool {
    match save_state(dir, file_name, value) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save {}: {}", file_name, e);
            false
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorSettings;
    use tempfile::TempDir;

    #[test]
    fn test_get_config_dir_contains_app_name() {
        // Headless CI may lack a home directory; only check the happy path.
        if let Ok(path) = get_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let loaded: Option<EditorSettings> = load_state(dir.path(), EDITOR_STATE_FILE).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_blank_file_is_none() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(EDITOR_STATE_FILE), "  \n").unwrap();
        let loaded: Option<EditorSettings> = load_state(dir.path(), EDITOR_STATE_FILE).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_corrupted_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(EDITOR_STATE_FILE), "{ nope").unwrap();
        let result: Result<Option<EditorSettings>> = load_state(dir.path(), EDITOR_STATE_FILE);
        assert!(matches!(result, Err(Error::StateParse { .. })));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let settings = EditorSettings {
            tab_size: 2,
            minimap: false,
            ..EditorSettings::default()
        };

        save_state(dir.path(), EDITOR_STATE_FILE, &settings).unwrap();
        let loaded: EditorSettings = load_state(dir.path(), EDITOR_STATE_FILE)
            .unwrap()
            .unwrap();

        assert_eq!(loaded, settings);
        assert!(!dir
            .path()
            .join(format!("{}{}", EDITOR_STATE_FILE, BACKUP_SUFFIX))
            .exists());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        assert!(save_state_silent(&nested, BROWSER_STATE_FILE, &vec![1, 2, 3]));
        assert!(nested.join(BROWSER_STATE_FILE).exists());
    }
}
