//! Application layer for folio
//!
//! This crate contains the page controller (use cases), the ports to
//! platform capabilities, and the scroll-lock resource. It knows nothing
//! about terminals or rendering.
//!
//! # Flow
//!
//! ```text
//! input event ──> PageCommand ──> PageController.handle() ──> Vec<PageEffect>
//!                                      │                            │
//!                              SelectionState                 EffectRunner
//!                              (synchronous)              (clipboard, links)
//! ```
//!
//! Selection changes are applied synchronously with the triggering command;
//! effects are best-effort side channels that never block state.

pub mod config;
pub mod controller;
pub mod effects;
pub mod events;
pub mod ports;
pub mod scroll_lock;

// Re-export commonly used types
pub use config::{CellMetrics, PageConfig, SplashTiming};
pub use controller::PageController;
pub use effects::EffectRunner;
pub use events::{PageCommand, PageEffect};
pub use ports::{
    catalog_source::{CatalogSourceError, CatalogSourcePort},
    clipboard::{ClipboardError, ClipboardPort},
    navigator::{NavigateError, NavigatorPort},
    viewport_telemetry::{ViewportSample, ViewportTelemetryPort},
};
pub use scroll_lock::{PageChrome, ScrollLock, ScrollLockGuard};
