//! User-facing surfaces for the console
//!
//! This module contains the notification boundary used for toasts and
//! confirmation dialogs.

mod notify;

pub use notify::{LogNotifier, Notifier};

#[cfg(test)]
pub(crate) use notify::testing;
