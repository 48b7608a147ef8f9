//! Navigator port — opens contact links with the platform handler

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavigateError {
    #[error("No handler available to open {0}")]
    NoHandler(String),

    #[error("Failed to open {url}: {reason}")]
    Spawn { url: String, reason: String },
}

/// Open a URL (https or mailto) in the platform's default handler.
///
/// Best-effort: navigation failures are logged, never surfaced as UI errors.
pub trait NavigatorPort: Send + Sync {
    fn open(&self, url: &str) -> Result<(), NavigateError>;
}
