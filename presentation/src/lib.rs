//! Presentation layer for folio
//!
//! This crate renders the single-page catalog as a full-screen terminal UI
//! and hosts the CLI argument definitions.

pub mod cli;
pub mod tui;

// Re-export commonly used types
pub use cli::Cli;
pub use tui::PageApp;
