//! Modal panel geometry — bottom sheet vs centered popup
//!
//! All values are logical units. The tuning constants are presentation
//! decisions, so they live in a config-overridable struct rather than as
//! hard-coded invariants.

use super::{ViewportClass, ViewportSize};
use serde::{Deserialize, Serialize};

/// Layout tuning constants with product defaults.
///
/// | Field              | Default | Meaning                                   |
/// |--------------------|---------|-------------------------------------------|
/// | phone_breakpoint   | 520     | widths below this are Phone               |
/// | sheet_floor        | 420     | minimum usable bottom-sheet height        |
/// | sheet_max_frac     | 0.92    | sheet height ceiling vs visible height    |
/// | sheet_margin       | 12      | sheet must stay this far from the top     |
/// | desktop_max_width  | 960     | centered panel width cap                  |
/// | desktop_margin     | 24      | vertical margin around the centered panel |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutTuning {
    pub phone_breakpoint: f32,
    pub sheet_floor: f32,
    pub sheet_max_frac: f32,
    pub sheet_margin: f32,
    pub desktop_max_width: f32,
    pub desktop_margin: f32,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            phone_breakpoint: 520.0,
            sheet_floor: 420.0,
            sheet_max_frac: 0.92,
            sheet_margin: 12.0,
            desktop_max_width: 960.0,
            desktop_margin: 24.0,
        }
    }
}

impl LayoutTuning {
    /// Bottom-sheet height for a given visible viewport height.
    ///
    /// At least the floor, at most `sheet_max_frac` of the visible height,
    /// and never closer than `sheet_margin` to the top edge. The top-edge cap
    /// wins over the floor on viewports too small to honor both.
    pub fn sheet_height(&self, visible_height: f32) -> f32 {
        (visible_height * self.sheet_max_frac)
            .max(self.sheet_floor)
            .min(visible_height - self.sheet_margin)
    }
}

/// Where the panel is anchored within the backdrop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAnchor {
    /// Phone: glued to the bottom edge, zero outer padding
    Bottom,
    /// Desktop: centered both ways
    Center,
}

/// Resolved panel placement for the current viewport.
///
/// `height` is the fixed sheet height on phone and the height *cap* on
/// desktop (the rendered panel may be shorter if its content fits).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelGeometry {
    pub class: ViewportClass,
    pub anchor: PanelAnchor,
    pub width: f32,
    pub height: f32,
}

impl PanelGeometry {
    /// Compute panel geometry.
    ///
    /// `visible_height` is the visual-viewport height when the platform
    /// exposes one, else the window height (the caller resolves the
    /// fallback).
    pub fn compute(viewport: ViewportSize, visible_height: f32, tuning: &LayoutTuning) -> Self {
        let class = ViewportClass::classify(viewport.width, tuning.phone_breakpoint);
        match class {
            ViewportClass::Phone => Self {
                class,
                anchor: PanelAnchor::Bottom,
                width: viewport.width,
                height: tuning.sheet_height(visible_height),
            },
            ViewportClass::Desktop => Self {
                class,
                anchor: PanelAnchor::Center,
                width: tuning.desktop_max_width.min(viewport.width),
                height: viewport.height - 2.0 * tuning.desktop_margin,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning() -> LayoutTuning {
        LayoutTuning::default()
    }

    #[test]
    fn test_sheet_height_tracks_fraction_on_tall_viewports() {
        let h = tuning().sheet_height(1000.0);
        assert!((h - 920.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sheet_height_honors_floor() {
        // 0.92 * 440 = 404.8 < 420 floor, and 420 <= 440 - 12
        let h = tuning().sheet_height(440.0);
        assert!((h - 420.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_sheet_height_never_crowds_top_edge() {
        // On a viewport too short for the floor, the 12-unit top margin wins
        let h = tuning().sheet_height(400.0);
        assert!((h - 388.0).abs() < 0.01);
    }

    #[test]
    fn test_sheet_height_bounds_over_range() {
        let t = tuning();
        for visible in (450..2200).step_by(7) {
            let v = visible as f32;
            let h = t.sheet_height(v);
            assert!(h >= t.sheet_floor, "height {} under floor at v={}", h, v);
            assert!(
                h <= v * t.sheet_max_frac + 0.001,
                "height {} over fraction cap at v={}",
                h,
                v
            );
            assert!(
                h <= v - t.sheet_margin + 0.001,
                "height {} crowds top edge at v={}",
                h,
                v
            );
        }
    }

    #[test]
    fn test_phone_geometry_is_bottom_anchored_full_width() {
        let g = PanelGeometry::compute(ViewportSize::new(390.0, 844.0), 780.0, &tuning());
        assert_eq!(g.class, ViewportClass::Phone);
        assert_eq!(g.anchor, PanelAnchor::Bottom);
        assert!((g.width - 390.0).abs() < f32::EPSILON);
        // Height derives from the *visible* height, not the window height
        assert!((g.height - 780.0 * 0.92).abs() < 0.01);
    }

    #[test]
    fn test_desktop_geometry_caps_width() {
        let wide = PanelGeometry::compute(ViewportSize::new(1920.0, 1080.0), 1080.0, &tuning());
        assert_eq!(wide.anchor, PanelAnchor::Center);
        assert!((wide.width - 960.0).abs() < f32::EPSILON);

        // Never wider than the viewport itself
        let narrow = PanelGeometry::compute(ViewportSize::new(800.0, 600.0), 600.0, &tuning());
        assert!((narrow.width - 800.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_desktop_geometry_height_margin() {
        let g = PanelGeometry::compute(ViewportSize::new(1280.0, 800.0), 800.0, &tuning());
        assert!((g.height - (800.0 - 48.0)).abs() < f32::EPSILON);
    }
}
