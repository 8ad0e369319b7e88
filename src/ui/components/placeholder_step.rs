use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{TEXT_MUTED, TEXT_PRIMARY};

/// A step without content yet: its title and one line of text
pub struct PlaceholderStepView<'a> {
    title: &'a str,
    text: &'a str,
}

impl<'a> PlaceholderStepView<'a> {
    pub fn new(title: &'a str, text: &'a str) -> Self {
        Self { title, text }
    }
}

impl Widget for PlaceholderStepView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = vec![
            Line::from(Span::styled(
                self.title,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(self.text, Style::default().fg(TEXT_MUTED))),
        ];
        Paragraph::new(lines).render(area, buf);
    }
}
