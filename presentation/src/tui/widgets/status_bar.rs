//! Status bar widget — key hints for the current state

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget {
    modal_open: bool,
}

impl StatusBarWidget {
    pub fn new(modal_open: bool) -> Self {
        Self { modal_open }
    }
}

impl Widget for StatusBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let hints = if self.modal_open {
            "j/k:scroll  t:telegram  e:email  x/Esc:close  q:quit"
        } else {
            "arrows:focus  Enter:open  j/k:scroll  t/e:contact  q:quit"
        };

        let line = Line::from(Span::styled(format!(" {}", hints), bg_style));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
