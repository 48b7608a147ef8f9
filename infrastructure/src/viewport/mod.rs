//! Viewport telemetry adapters

pub mod probe;
