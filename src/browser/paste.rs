//! Paste marked clipboard entries into a directory.
//!
//! The paste target is whichever directory the initiating tab is showing.
//! Name clashes at the target are resolved by asking the user once for the
//! whole batch; overwriting is requested per entry via `force`.

use crate::browser::clipboard::MarkedType;
use crate::browser::store::FileBrowserStore;
use crate::error::Result;
use crate::files::{join_path, FileControl, FileService};
use crate::ui::Notifier;
use log::{debug, info};

/// How a paste attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// The clipboard was empty
    NothingMarked,
    /// The user declined to overwrite existing entries; clipboard untouched
    Cancelled,
    /// Entries were copied or moved and the clipboard was cleared
    Pasted { kind: MarkedType, count: usize },
}

impl PasteOutcome {
    /// Whether the directory listing must be refreshed.
    pub fn needs_refresh(&self) -> bool {
        matches!(self, PasteOutcome::Pasted { .. })
    }
}

/// Copy or move the marked entries into `target_dir`.
///
/// Service errors are returned as-is and leave the clipboard untouched.
pub fn paste(
    target_dir: &str,
    browser: &mut FileBrowserStore,
    service: &mut dyn FileService,
    notifier: &mut dyn Notifier,
) -> Result<PasteOutcome> {
    let clipboard = browser.clipboard();
    if clipboard.is_empty() {
        notifier.error("Please mark the files/folders to copy or move first");
        return Ok(PasteOutcome::NothingMarked);
    }
    let kind = clipboard.marked_type();

    let mut items: Vec<FileControl> = clipboard
        .marked()
        .iter()
        .map(|m| FileControl {
            source: m.source.clone(),
            target: join_path(target_dir, &m.name),
            force: false,
        })
        .collect();
    let names: Vec<String> = clipboard.marked().iter().map(|m| m.name.clone()).collect();

    let targets: Vec<String> = items.iter().map(|i| i.target.clone()).collect();
    let exists = service.exist(&targets)?;

    let mut conflicts = Vec::new();
    for ((item, name), exists) in items.iter_mut().zip(&names).zip(exists) {
        if exists {
            item.force = true;
            conflicts.push(name.as_str());
        }
    }

    if !conflicts.is_empty() {
        debug!("Paste into {} clashes with {:?}", target_dir, conflicts);
        let content = format!(
            "There are items with the same name {} Do you want to overwrite?",
            conflicts.join(", ")
        );
        if !notifier.confirm_warning("Warning", &content, "Overwrite", "Cancel") {
            notifier.info("Canceled");
            return Ok(PasteOutcome::Cancelled);
        }
    }

    let success = match kind {
        MarkedType::Copy => {
            service.copy(&items)?;
            "Copied successfully"
        }
        MarkedType::Move => {
            service.move_items(&items)?;
            "Moved successfully"
        }
    };

    browser.clear_clipboard();
    notifier.success(success);
    info!("Pasted {} item(s) into {} ({:?})", items.len(), target_dir, kind);
    Ok(PasteOutcome::Pasted {
        kind,
        count: items.len(),
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
