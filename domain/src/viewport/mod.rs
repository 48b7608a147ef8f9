//! Viewport classification and modal panel geometry

pub mod geometry;

use serde::{Deserialize, Serialize};

pub use geometry::{LayoutTuning, PanelAnchor, PanelGeometry};

/// Viewport dimensions in logical units (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Phone vs desktop, derived from viewport width.
///
/// Recomputed on every viewport change while the page lives; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Phone,
    Desktop,
}

impl ViewportClass {
    /// Classify a viewport width against the breakpoint.
    ///
    /// Width exactly at the breakpoint counts as desktop.
    pub fn classify(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::Phone
        } else {
            Self::Desktop
        }
    }

    pub fn is_phone(&self) -> bool {
        matches!(self, Self::Phone)
    }
}
