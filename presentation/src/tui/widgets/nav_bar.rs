//! Nav bar widget — brand line plus the two contact shortcuts

use folio_domain::ContactInfo;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const TELEGRAM_LABEL: &str = " [t] Telegram ";
const EMAIL_LABEL: &str = " [e] Email ";

pub struct NavBarWidget<'a> {
    contact: &'a ContactInfo,
}

impl<'a> NavBarWidget<'a> {
    pub fn new(contact: &'a ContactInfo) -> Self {
        Self { contact }
    }

    /// Button rectangles (telegram, email), right-aligned inside the bar.
    ///
    /// Pure layout math shared by render and mouse hit-testing.
    pub fn button_rects(area: Rect) -> (Rect, Rect) {
        let tg_w = TELEGRAM_LABEL.len() as u16;
        let em_w = EMAIL_LABEL.len() as u16;
        if area.width < tg_w + em_w + 4 || area.height < 3 {
            return (Rect::ZERO, Rect::ZERO);
        }
        let y = area.y + 1;
        let email = Rect::new(area.x + area.width - 2 - em_w, y, em_w, 1);
        let telegram = Rect::new(email.x - 1 - tg_w, y, tg_w, 1);
        (telegram, email)
    }
}

impl<'a> Widget for NavBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::DarkGray));
        block.render(area, buf);

        let brand = Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled(
                "Services: automation • bots • AI",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        let inner = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width.saturating_sub(4),
            1,
        );
        Paragraph::new(brand).render(inner, buf);

        let (tg, em) = Self::button_rects(area);
        if tg != Rect::ZERO {
            Paragraph::new(Span::styled(
                TELEGRAM_LABEL,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ))
            .render(tg, buf);
            Paragraph::new(Span::styled(
                EMAIL_LABEL,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ))
            .render(em, buf);
        }

        // Handle shown next to the brand so the shortcut target is visible
        let handle = self.contact.telegram.as_str();
        if !handle.is_empty() && tg != Rect::ZERO && tg.x > inner.x + 36 + handle.len() as u16 {
            let hint = Rect::new(inner.x + 34, inner.y, handle.len() as u16, 1);
            Paragraph::new(Span::styled(handle, Style::default().fg(Color::DarkGray)))
                .render(hint, buf);
        }
    }
}
