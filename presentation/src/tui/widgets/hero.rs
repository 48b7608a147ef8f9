//! Hero widget — page title and subtitle

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

const TITLE: &str = "A script or a bot, built for your exact task";
const SUBTITLE: &str = "Spreadsheet automation, Apps Script, and Telegram bots for real \
processes: intake, broadcasts, parsing, reports, and small admin panels. \
Working MVP first, careful polish after.";

pub struct HeroWidget;

impl Widget for HeroWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
        ];
        let inner = Rect::new(
            area.x + 2,
            area.y + 1,
            area.width.saturating_sub(4),
            area.height.saturating_sub(1),
        );
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}
