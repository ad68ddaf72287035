//! User-facing notification surface.
//!
//! Toasts and confirmation modals are rendered by the host UI. The stores
//! and workflows only need to say what to show, so they talk to this trait.

use log::{error, info, warn};

/// Toasts and confirmation dialogs shown to the user.
pub trait Notifier {
    /// Show a warning toast.
    fn warning(&mut self, message: &str);

    /// Show an error toast.
    fn error(&mut self, message: &str);

    /// Show a success toast.
    fn success(&mut self, message: &str);

    /// Show an informational toast.
    fn info(&mut self, message: &str);

    /// Show a warning modal and return `true` if the positive button was chosen.
    fn confirm_warning(&mut self, title: &str, content: &str, positive: &str, negative: &str)
        -> bool;
}

/// Notifier that writes everything to the log.
///
/// Used by headless hosts. There is nobody to answer a dialog, so every
/// confirmation is declined.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn warning(&mut self, message: &str) {
        warn!("{}", message);
    }

    fn error(&mut self, message: &str) {
        error!("{}", message);
    }

    fn success(&mut self, message: &str) {
        info!("{}", message);
    }

    fn info(&mut self, message: &str) {
        info!("{}", message);
    }

    fn confirm_warning(
        &mut self,
        title: &str,
        content: &str,
        _positive: &str,
        negative: &str,
    ) -> bool {
        warn!("{}: {} [{}]", title, content, negative);
        false
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording notifier for tests.

    use super::Notifier;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Note {
        Warning(String),
        Error(String),
        Success(String),
        Info(String),
        Confirm { title: String, content: String },
    }

    /// Records every call; dialogs answer with `confirm_answer`.
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        pub notes: Vec<Note>,
        pub confirm_answer: bool,
    }

    impl RecordingNotifier {
        pub fn answering(confirm_answer: bool) -> Self {
            Self {
                notes: Vec::new(),
                confirm_answer,
            }
        }

        pub fn warnings(&self) -> usize {
            self.notes
                .iter()
                .filter(|n| matches!(n, Note::Warning(_)))
                .count()
        }
    }

    impl Notifier for RecordingNotifier {
        fn warning(&mut self, message: &str) {
            self.notes.push(Note::Warning(message.to_string()));
        }

        fn error(&mut self, message: &str) {
            self.notes.push(Note::Error(message.to_string()));
        }

        fn success(&mut self, message: &str) {
            self.notes.push(Note::Success(message.to_string()));
        }

        fn info(&mut self, message: &str) {
            self.notes.push(Note::Info(message.to_string()));
        }

        fn confirm_warning(
            &mut self,
            title: &str,
            content: &str,
            _positive: &str,
            _negative: &str,
        ) -> bool {
            self.notes.push(Note::Confirm {
                title: title.to_string(),
                content: content.to_string(),
            });
            self.confirm_answer
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_notifier_declines_confirmation() {
        let mut notifier = LogNotifier;
        assert!(!notifier.confirm_warning("Warning", "Overwrite?", "Overwrite", "Cancel"));
    }
}
