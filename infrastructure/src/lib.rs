//! Infrastructure layer for folio
//!
//! Adapters behind the application ports: catalog sources (built-in and
//! TOML file), configuration loading, the OSC 52 clipboard, the system URL
//! opener, and the crossterm viewport probe.

pub mod catalog;
pub mod clipboard;
pub mod config;
pub mod navigation;
pub mod viewport;

// Re-export commonly used types
pub use catalog::{builtin::BuiltinCatalog, file::FileCatalog};
pub use clipboard::osc52::Osc52Clipboard;
pub use config::{loader::ConfigLoader, FileConfig};
pub use navigation::opener::SystemOpener;
pub use viewport::probe::CrosstermViewportProbe;
