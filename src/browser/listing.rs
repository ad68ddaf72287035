//! Directory listing and deletion for browsing tabs.

use crate::browser::store::FileBrowserStore;
use crate::error::Result;
use crate::files::{FileListing, FileService};
use crate::ui::Notifier;
use log::{debug, info};

/// Fetch one page of tab `id`'s directory under the current view preferences.
///
/// Returns `Ok(None)` for an unknown tab.
pub fn list_tab(
    browser: &FileBrowserStore,
    service: &mut dyn FileService,
    id: &str,
    page: u32,
    limit: u32,
) -> Result<Option<FileListing>> {
    let Some(query) = browser.list_query(id, page, limit) else {
        return Ok(None);
    };
    debug!("Listing {} (sort '{}', page {})", query.path, query.sort, page);
    service.list(&query).map(Some)
}

/// Delete `paths` after a single confirmation.
///
/// Returns the number of entries deleted; `0` if the user declined. Stops at
/// the first service error.
pub fn delete_entries(
    paths: &[String],
    service: &mut dyn FileService,
    notifier: &mut dyn Notifier,
) -> Result<usize> {
    if paths.is_empty() {
        return Ok(0);
    }

    let content = format!(
        "Are you sure you want to delete {} item(s)? This cannot be undone.",
        paths.len()
    );
    if !notifier.confirm_warning("Warning", &content, "Delete", "Cancel") {
        notifier.info("Canceled");
        return Ok(0);
    }

    for path in paths {
        service.delete(path)?;
    }
    notifier.success("Deleted successfully");
    info!("Deleted {} item(s)", paths.len());
    Ok(paths.len())
}
