//! Domain layer for folio
//!
//! This crate contains the core entities and value objects for the service
//! catalog page. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! A static, ordered list of [`ServiceRecord`]s plus one [`ContactInfo`]
//! value. Defined once at startup and never mutated afterwards.
//!
//! ## Selection
//!
//! [`SelectionState`] holds the currently chosen service, if any. The detail
//! modal is open exactly when a selection exists; there is never more than
//! one selection at a time.
//!
//! ## Viewport
//!
//! [`ViewportClass`] splits the world into Phone and Desktop at a width
//! breakpoint. [`PanelGeometry`] computes where the modal panel sits and how
//! tall it may grow for each class.

pub mod catalog;
pub mod core;
pub mod selection;
pub mod viewport;

// Re-export commonly used types
pub use catalog::{
    contact::ContactInfo,
    entities::{Catalog, ServiceIcon, ServiceId, ServiceRecord, HOW_WE_WORK, PRICE_NOTE},
};
pub use core::error::DomainError;
pub use selection::SelectionState;
pub use viewport::{
    geometry::{LayoutTuning, PanelAnchor, PanelGeometry},
    ViewportClass, ViewportSize,
};
