//! Page widgets — ratatui components for the single-page layout
//!
//! Layout:
//! ┌── NavBar (3) ────────────────────────────────────┐
//! ├── Hero (6) ──────────────────────────────────────┤
//! ├── Experience (4) ────────────────────────────────┤
//! ├── Card grid (flex, scrolls) ───────────────┬─sb──┤
//! └── StatusBar (1) ─────────────────────────────────┘

pub mod card;
pub mod experience;
pub mod hero;
pub mod nav_bar;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Card cell height in rows (content plus border)
pub const CARD_HEIGHT: u16 = 9;
/// Grid switches to two columns at this width
const TWO_COLUMN_MIN_WIDTH: u16 = 76;

/// Computed page regions
pub struct MainLayout {
    pub nav: Rect,
    pub hero: Rect,
    pub experience: Rect,
    pub grid: Rect,
    /// Right-hand scrollbar column; `None` while the scroll lock is held
    /// (the column stays reserved, so the grid never shifts)
    pub scrollbar: Option<Rect>,
    pub status_bar: Rect,
}

impl MainLayout {
    pub fn compute(area: Rect, scroll_enabled: bool) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let main = vertical[3];
        // The last column belongs to the scrollbar. When scroll is locked the
        // bar disappears but the column is kept as padding - that is the
        // scrollbar-width compensation, so the cards do not jump.
        let grid = Rect {
            width: main.width.saturating_sub(1),
            ..main
        };
        let scrollbar = if scroll_enabled && main.width > 0 {
            Some(Rect::new(main.x + main.width - 1, main.y, 1, main.height))
        } else {
            None
        };

        Self {
            nav: vertical[0],
            hero: vertical[1],
            experience: vertical[2],
            grid,
            scrollbar,
            status_bar: vertical[4],
        }
    }

    /// Number of grid columns for a given grid width
    pub fn grid_columns(width: u16) -> u16 {
        if width >= TWO_COLUMN_MIN_WIDTH {
            2
        } else {
            1
        }
    }

    /// Total content height of the grid in rows
    pub fn grid_content_height(width: u16, card_count: usize) -> u16 {
        let columns = Self::grid_columns(width);
        let rows = (card_count as u16).div_ceil(columns);
        rows * CARD_HEIGHT
    }

    /// Max page scroll for a given grid area and card count
    pub fn max_page_scroll(grid: Rect, card_count: usize) -> u16 {
        Self::grid_content_height(grid.width, card_count).saturating_sub(grid.height)
    }

    /// Card rectangles in listed order, clipped to the grid area.
    ///
    /// Fully scrolled-out cards come back as `Rect::ZERO` so indices keep
    /// lining up with the catalog.
    pub fn card_rects(grid: Rect, card_count: usize, scroll: u16) -> Vec<Rect> {
        let columns = Self::grid_columns(grid.width);
        let card_width = grid.width / columns;

        (0..card_count)
            .map(|i| {
                let row = i as u16 / columns;
                let col = i as u16 % columns;
                let top = i32::from(grid.y) + i32::from(row * CARD_HEIGHT) - i32::from(scroll);
                let bottom = top + i32::from(CARD_HEIGHT);
                // Clip vertically against the grid area
                let clip_top = top.max(i32::from(grid.y));
                let clip_bottom = bottom.min(i32::from(grid.y) + i32::from(grid.height));
                if clip_bottom <= clip_top {
                    return Rect::ZERO;
                }
                Rect::new(
                    grid.x + col * card_width,
                    clip_top as u16,
                    card_width,
                    (clip_bottom - clip_top) as u16,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_regions_stack() {
        let layout = MainLayout::compute(Rect::new(0, 0, 100, 40), true);
        assert_eq!(layout.nav.height, 3);
        assert_eq!(layout.hero.height, 6);
        assert_eq!(layout.experience.height, 4);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.grid.height, 40 - 3 - 6 - 4 - 1);
        assert!(layout.scrollbar.is_some());
    }

    #[test]
    fn test_scroll_lock_keeps_grid_width() {
        let area = Rect::new(0, 0, 100, 40);
        let unlocked = MainLayout::compute(area, true);
        let locked = MainLayout::compute(area, false);

        // The compensation column: same grid width with and without the bar
        assert_eq!(unlocked.grid.width, locked.grid.width);
        assert!(locked.scrollbar.is_none());
    }

    #[test]
    fn test_grid_columns_by_width() {
        assert_eq!(MainLayout::grid_columns(120), 2);
        assert_eq!(MainLayout::grid_columns(75), 1);
    }

    #[test]
    fn test_card_rects_two_columns() {
        let grid = Rect::new(0, 10, 100, 20);
        let rects = MainLayout::card_rects(grid, 4, 0);

        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0].x, 0);
        assert_eq!(rects[1].x, 50);
        assert_eq!(rects[0].y, rects[1].y);
        assert_eq!(rects[2].y, rects[0].y + CARD_HEIGHT);
    }

    #[test]
    fn test_card_rects_clip_on_scroll() {
        let grid = Rect::new(0, 10, 100, 12);
        let rects = MainLayout::card_rects(grid, 6, 5);

        // First row is partially scrolled out but still clipped into view
        assert_eq!(rects[0].y, 10);
        assert_eq!(rects[0].height, CARD_HEIGHT - 5);
        // All rects stay inside the grid
        for r in &rects {
            if *r != Rect::ZERO {
                assert!(r.y >= grid.y);
                assert!(r.y + r.height <= grid.y + grid.height);
            }
        }
    }

    #[test]
    fn test_max_page_scroll() {
        let grid = Rect::new(0, 0, 100, 12);
        // 6 cards, 2 columns -> 3 rows of 9 = 27 rows of content
        assert_eq!(MainLayout::max_page_scroll(grid, 6), 27 - 12);
        // Everything fits -> no scroll
        assert_eq!(MainLayout::max_page_scroll(Rect::new(0, 0, 100, 40), 6), 0);
    }
}
