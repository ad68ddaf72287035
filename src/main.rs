//! Panel Console - Main Entry Point
//!
//! Loads the persisted console state, reports what was restored, and writes
//! it back in normalized form. Useful for inspecting or repairing the state
//! files outside the browser.
//!
//! An optional directory argument opens an extra browsing tab there before
//! the state is written back.

use log::info;
use panel_console::ui::LogNotifier;
use panel_console::Console;

/// Application name constant.
const APP_NAME: &str = "panel-console";

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    let mut console = Console::load();
    let mut notifier = LogNotifier;

    if let Some(path) = std::env::args().nth(1) {
        if let Some(tab) = console.browser.create_tab(Some(&path), &mut notifier) {
            info!("Opened browsing tab {} at {}", tab.label(), tab.path());
        }
    }

    let settings = console.editor.settings();
    info!(
        "Editor: root {}, tab size {}, font size {}, word wrap {:?}",
        console.editor.root_path(),
        settings.tab_size,
        settings.font_size,
        settings.word_wrap
    );

    let prefs = console.browser.prefs();
    info!(
        "File browser: {} tab(s), view {:?}, hidden files {}, sort '{}'",
        console.browser.tabs().len(),
        prefs.view_type,
        if prefs.show_hidden { "shown" } else { "hidden" },
        console.browser.sort_param()
    );
    for tab in console.browser.tabs() {
        let marker = if tab.id() == console.browser.active_tab_id() {
            "*"
        } else {
            " "
        };
        info!(
            "{} {} ({}, {} history entries)",
            marker,
            tab.label(),
            tab.path(),
            tab.history().len()
        );
    }

    console.shutdown();
}
