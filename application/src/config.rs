//! Page configuration assembled at startup
//!
//! Raw TOML shapes live in the infrastructure config module; these are the
//! resolved values the page actually runs with.

use folio_domain::{LayoutTuning, ViewportSize};

/// Preloader timing: minimum visible delay, fallback ceiling, fade length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplashTiming {
    /// Flicker guard: splash stays at least this long even on instant loads
    pub min_visible_ms: u64,
    /// Fallback ceiling: splash hides after this even without a load signal
    pub max_wait_ms: u64,
    /// Fade-then-detach duration
    pub fade_ms: u64,
}

impl Default for SplashTiming {
    fn default() -> Self {
        Self {
            min_visible_ms: 450,
            max_wait_ms: 2500,
            fade_ms: 240,
        }
    }
}

/// Conversion between terminal cells and logical units.
///
/// Used when the terminal does not report pixel dimensions, so the layout
/// tuning constants keep their meaning on a cell-only fallback.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width_px: f32,
    pub height_px: f32,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            width_px: 8.0,
            height_px: 16.0,
        }
    }
}

impl CellMetrics {
    /// Estimate a logical viewport size from a cell grid
    pub fn size_from_cells(&self, columns: u16, rows: u16) -> ViewportSize {
        ViewportSize::new(
            f32::from(columns) * self.width_px,
            f32::from(rows) * self.height_px,
        )
    }

    /// Convert a logical height back into rows (rounded down, at least 1)
    pub fn rows_from_height(&self, height: f32) -> u16 {
        ((height / self.height_px) as u16).max(1)
    }
}

/// Resolved page configuration
#[derive(Debug, Clone, Default)]
pub struct PageConfig {
    pub layout: LayoutTuning,
    pub splash: SplashTiming,
    pub cell: CellMetrics,
}
