//! Viewport telemetry port — window size and optional visual-viewport height
//!
//! The platform may or may not expose a *visual* viewport (the part of the
//! screen actually visible, excluding transient chrome). Adapters probe that
//! capability once; absence is an expected degradation, not an error.

use folio_domain::ViewportSize;

/// One reading of the viewport, in logical units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSample {
    pub window: ViewportSize,
    /// Visual-viewport height, `None` when the platform does not expose it
    pub visible_height: Option<f32>,
}

impl ViewportSample {
    /// Visible height with the window-height fallback applied
    pub fn effective_visible_height(&self) -> f32 {
        self.visible_height.unwrap_or(self.window.height)
    }
}

/// Reads viewport dimensions on demand.
///
/// Consumers re-sample on every viewport-change event they receive from the
/// event loop; the port itself does not push events.
pub trait ViewportTelemetryPort: Send + Sync {
    /// Capability probe: does this platform expose a visual viewport?
    ///
    /// Checked once at modal mount; the chosen behavior variant holds for
    /// the life of that subscription.
    fn has_visual_viewport(&self) -> bool;

    fn sample(&self) -> ViewportSample;
}
