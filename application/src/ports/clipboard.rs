//! Clipboard port — best-effort system clipboard writes

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard is not available on this platform")]
    Unavailable,

    #[error("Clipboard write failed: {0}")]
    Write(String),
}

/// Write a string to the system clipboard.
///
/// Callers treat failures as expected and swallow them; an adapter must
/// never panic or block on a missing clipboard.
pub trait ClipboardPort: Send + Sync {
    fn write(&self, text: &str) -> Result<(), ClipboardError>;
}
