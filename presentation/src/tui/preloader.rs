//! Preloader overlay state
//!
//! Shown from first paint, hidden after the load-complete signal - but never
//! earlier than the minimum visible delay (flicker guard on fast loads) and
//! never later than the wait ceiling (the load signal may never fire).
//! Removal is fade-then-detach. Independent of all other page state.

use folio_application::SplashTiming;
use std::time::{Duration, Instant};

/// Lifecycle of the splash overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    Visible,
    Fading,
    Done,
}

#[derive(Debug)]
pub struct Preloader {
    timing: SplashTiming,
    shown_at: Instant,
    loaded_at: Option<Instant>,
    fade_started: Option<Instant>,
}

impl Preloader {
    pub fn new(timing: SplashTiming, now: Instant) -> Self {
        Self {
            timing,
            shown_at: now,
            loaded_at: None,
            fade_started: None,
        }
    }

    /// The load-complete signal. Idempotent.
    pub fn mark_loaded(&mut self, now: Instant) {
        if self.loaded_at.is_none() {
            self.loaded_at = Some(now);
        }
    }

    /// Advance the state machine; call once per frame tick.
    pub fn tick(&mut self, now: Instant) -> SplashPhase {
        if let Some(fade) = self.fade_started {
            return if now.saturating_duration_since(fade)
                >= Duration::from_millis(self.timing.fade_ms)
            {
                SplashPhase::Done
            } else {
                SplashPhase::Fading
            };
        }

        let shown_for = now.saturating_duration_since(self.shown_at);
        let min_elapsed = shown_for >= Duration::from_millis(self.timing.min_visible_ms);
        let ceiling_hit = shown_for >= Duration::from_millis(self.timing.max_wait_ms);

        if (self.loaded_at.is_some() && min_elapsed) || ceiling_hit {
            self.fade_started = Some(now);
            SplashPhase::Fading
        } else {
            SplashPhase::Visible
        }
    }

    /// Opacity during the fade (1.0 fully visible, 0.0 gone)
    pub fn alpha(&self, now: Instant) -> f32 {
        match self.fade_started {
            None => 1.0,
            Some(fade) => {
                let elapsed = now.saturating_duration_since(fade).as_millis() as f32;
                (1.0 - elapsed / self.timing.fade_ms as f32).clamp(0.0, 1.0)
            }
        }
    }
}
