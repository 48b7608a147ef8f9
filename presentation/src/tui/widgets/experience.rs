//! Experience strip — three credential tiles under the hero

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const TILES: [(&str, &str); 3] = [
    ("~2 years", "automating real processes"),
    ("MVP first", "demo before the final build"),
    ("14 days", "of support after delivery"),
];

pub struct ExperienceWidget;

impl Widget for ExperienceWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(area);

        for (rect, (value, label)) in columns.iter().zip(TILES) {
            let block = Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::DarkGray));
            let inner = block.inner(*rect);
            block.render(*rect, buf);

            let line = Line::from(vec![
                Span::styled(
                    value,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(label, Style::default().fg(Color::Gray)),
            ]);
            Paragraph::new(line).render(inner, buf);
        }
    }
}
