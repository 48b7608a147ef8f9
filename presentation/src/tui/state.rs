//! Page view state
//!
//! Everything the page renderer needs outside the modal presenter (which
//! keeps its own session state) and the controller (which owns selection).

use super::preloader::Preloader;
use ratatui::layout::Rect;

/// Central page state - owned by the PageApp event loop
pub struct PageState {
    /// Index of the focused card, in catalog order
    pub focus: usize,
    /// Page scroll offset in rows (catalog area)
    pub page_scroll: u16,
    /// Splash overlay; `None` once detached (or skipped entirely)
    pub preloader: Option<Preloader>,
    /// Terminal area of the last render, for mouse hit-testing
    pub last_area: Rect,
    pub should_quit: bool,
}

impl PageState {
    pub fn new(preloader: Option<Preloader>) -> Self {
        Self {
            focus: 0,
            page_scroll: 0,
            preloader,
            last_area: Rect::ZERO,
            should_quit: false,
        }
    }

    // -- Card focus --

    pub fn focus_next(&mut self, card_count: usize) {
        if card_count > 0 {
            self.focus = (self.focus + 1) % card_count;
        }
    }

    pub fn focus_prev(&mut self, card_count: usize) {
        if card_count > 0 {
            self.focus = self.focus.checked_sub(1).unwrap_or(card_count - 1);
        }
    }

    // -- Page scroll (ignored while the scroll lock is held; the caller checks) --

    pub fn scroll_page_down(&mut self, max: u16) {
        self.page_scroll = self.page_scroll.saturating_add(2).min(max);
    }

    pub fn scroll_page_up(&mut self) {
        self.page_scroll = self.page_scroll.saturating_sub(2);
    }
}
