//! Service card widget
//!
//! Summary view of one service: icon, title, short description, price and
//! delivery, the first two highlight tags, and the support blurb. The whole
//! card is one activation target.

use folio_domain::ServiceRecord;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

pub struct CardWidget<'a> {
    service: &'a ServiceRecord,
    focused: bool,
}

impl<'a> CardWidget<'a> {
    pub fn new(service: &'a ServiceRecord, focused: bool) -> Self {
        Self { service, focused }
    }
}

impl<'a> Widget for CardWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 {
            return;
        }

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let s = self.service;
        let title_style = if self.focused {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD)
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", s.icon.glyph()), Style::default().fg(Color::Cyan)),
                Span::styled(s.title.as_str(), title_style),
            ]),
            Line::from(Span::styled(
                s.short.as_str(),
                Style::default().fg(Color::Gray),
            )),
            Line::from(vec![
                Span::styled(
                    s.price.as_str(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(s.delivery.as_str(), Style::default().fg(Color::DarkGray)),
            ]),
        ];

        // First two highlights as badges
        let badges: Vec<Span> = s
            .card_highlights()
            .iter()
            .flat_map(|h| {
                [
                    Span::styled(
                        format!("[{}]", h),
                        Style::default().fg(Color::Magenta),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        if !badges.is_empty() {
            lines.push(Line::from(badges));
        }

        lines.push(Line::from(Span::styled(
            s.support.as_str(),
            Style::default().fg(Color::DarkGray),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
