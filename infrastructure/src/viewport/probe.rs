//! Crossterm viewport probe
//!
//! The cell grid gives the window size in logical units (cells scaled by the
//! configured cell metrics). Some terminals additionally report their pixel
//! dimensions; when present, that pixel height plays the role of the visual
//! viewport - the area actually visible, independent of cell rounding and
//! terminal chrome. The capability is probed once and the chosen variant
//! holds from then on.

use folio_application::{CellMetrics, ViewportSample, ViewportTelemetryPort};
use std::sync::OnceLock;
use tracing::debug;

pub struct CrosstermViewportProbe {
    cell: CellMetrics,
    pixel_capable: OnceLock<bool>,
}

impl CrosstermViewportProbe {
    pub fn new(cell: CellMetrics) -> Self {
        Self {
            cell,
            pixel_capable: OnceLock::new(),
        }
    }

    fn pixel_height() -> Option<f32> {
        // Unsupported terminals report an error or zero dimensions
        crossterm::terminal::window_size()
            .ok()
            .filter(|ws| ws.width > 0 && ws.height > 0)
            .map(|ws| f32::from(ws.height))
    }
}

impl ViewportTelemetryPort for CrosstermViewportProbe {
    fn has_visual_viewport(&self) -> bool {
        *self.pixel_capable.get_or_init(|| {
            let capable = Self::pixel_height().is_some();
            debug!(capable, "probed terminal pixel telemetry");
            capable
        })
    }

    fn sample(&self) -> ViewportSample {
        let (columns, rows) = crossterm::terminal::size().unwrap_or((80, 24));
        let window = self.cell.size_from_cells(columns, rows);
        let visible_height = if self.has_visual_viewport() {
            Self::pixel_height()
        } else {
            None
        };
        ViewportSample {
            window,
            visible_height,
        }
    }
}
