//! Clipboard adapters

pub mod osc52;
