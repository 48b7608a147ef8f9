//! Effect runner — executes side effects behind the ports
//!
//! Clipboard writes and link opens are fire-and-forget: failures are logged
//! at debug level and otherwise swallowed, per the error-handling design.
//! UI-scoped effects are returned to the caller untouched.

use crate::events::PageEffect;
use crate::ports::{clipboard::ClipboardPort, navigator::NavigatorPort};
use std::sync::Arc;
use tracing::debug;

pub struct EffectRunner {
    clipboard: Arc<dyn ClipboardPort>,
    navigator: Arc<dyn NavigatorPort>,
}

impl EffectRunner {
    pub fn new(clipboard: Arc<dyn ClipboardPort>, navigator: Arc<dyn NavigatorPort>) -> Self {
        Self {
            clipboard,
            navigator,
        }
    }

    /// Run platform effects; return the UI-scoped ones for the presenter.
    ///
    /// Clipboard and navigation outcomes are independent: a failed copy never
    /// suppresses the navigation that follows it.
    pub fn run(&self, effects: Vec<PageEffect>) -> Vec<PageEffect> {
        let mut remaining = Vec::new();
        for effect in effects {
            match effect {
                PageEffect::CopyToClipboard(text) => {
                    if let Err(e) = self.clipboard.write(&text) {
                        debug!(error = %e, "clipboard write failed, ignoring");
                    }
                }
                PageEffect::OpenUrl(url) => {
                    if let Err(e) = self.navigator.open(&url) {
                        debug!(url, error = %e, "failed to open link, ignoring");
                    }
                }
                other => remaining.push(other),
            }
        }
        remaining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clipboard::ClipboardError;
    use crate::ports::navigator::NavigateError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Mutex<Vec<String>>,
        fail: bool,
    }

    impl ClipboardPort for RecordingClipboard {
        fn write(&self, text: &str) -> Result<(), ClipboardError> {
            self.writes.lock().unwrap().push(text.to_string());
            if self.fail {
                Err(ClipboardError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingNavigator {
        opened: Mutex<Vec<String>>,
    }

    impl NavigatorPort for RecordingNavigator {
        fn open(&self, url: &str) -> Result<(), NavigateError> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_then_navigate() {
        let clipboard = Arc::new(RecordingClipboard::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let runner = EffectRunner::new(clipboard.clone(), navigator.clone());

        let leftover = runner.run(vec![
            PageEffect::CopyToClipboard("@ivanov".into()),
            PageEffect::OpenUrl("https://t.me/ivanov".into()),
        ]);

        assert!(leftover.is_empty());
        assert_eq!(*clipboard.writes.lock().unwrap(), vec!["@ivanov"]);
        assert_eq!(*navigator.opened.lock().unwrap(), vec!["https://t.me/ivanov"]);
    }

    #[test]
    fn test_navigation_survives_clipboard_failure() {
        let clipboard = Arc::new(RecordingClipboard {
            fail: true,
            ..Default::default()
        });
        let navigator = Arc::new(RecordingNavigator::default());
        let runner = EffectRunner::new(clipboard.clone(), navigator.clone());

        runner.run(vec![
            PageEffect::CopyToClipboard("dev@example.com".into()),
            PageEffect::OpenUrl("mailto:dev@example.com".into()),
        ]);

        // The write was attempted with the exact literal string...
        assert_eq!(*clipboard.writes.lock().unwrap(), vec!["dev@example.com"]);
        // ...and its failure did not stop navigation
        assert_eq!(
            *navigator.opened.lock().unwrap(),
            vec!["mailto:dev@example.com"]
        );
    }

    #[test]
    fn test_ui_effects_pass_through() {
        let runner = EffectRunner::new(
            Arc::new(RecordingClipboard::default()),
            Arc::new(RecordingNavigator::default()),
        );
        let leftover = runner.run(vec![PageEffect::ResetModalScroll]);
        assert_eq!(leftover, vec![PageEffect::ResetModalScroll]);
    }
}
