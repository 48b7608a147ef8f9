//! Ports — interfaces to platform capabilities
//!
//! Infrastructure provides the adapters; the application layer only sees
//! these traits. All of them degrade gracefully: a missing or failing
//! capability reduces functionality, it never takes the page down.

pub mod catalog_source;
pub mod clipboard;
pub mod navigator;
pub mod viewport_telemetry;
