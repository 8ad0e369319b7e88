//! Single-line text input rendering with a block cursor

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// A one-row text input. The cursor is drawn only when `cursor` is set.
pub struct TextInput<'a> {
    value: &'a str,
    cursor: Option<usize>,
    placeholder: &'a str,
    style: Style,
    placeholder_style: Style,
}

impl<'a> TextInput<'a> {
    pub fn new(value: &'a str) -> Self {
        Self {
            value,
            cursor: None,
            placeholder: "",
            style: Style::default(),
            placeholder_style: Style::default(),
        }
    }

    /// Cursor position in chars
    pub fn cursor(mut self, cursor: Option<usize>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str, style: Style) -> Self {
        self.placeholder = placeholder;
        self.placeholder_style = style;
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Chars to skip so the cursor column stays inside `width`
    fn scroll_offset(&self, width: u16) -> usize {
        let Some(cursor) = self.cursor else {
            return 0;
        };
        let widths: Vec<usize> = self
            .value
            .chars()
            .take(cursor)
            .map(|c| c.width().unwrap_or(0))
            .collect();
        let mut col: usize = widths.iter().sum();
        let mut skip = 0;
        while col >= width as usize && skip < widths.len() {
            col -= widths[skip];
            skip += 1;
        }
        skip
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let area = Rect { height: 1, ..area };

        let skip = self.scroll_offset(area.width);
        let visible: String = self.value.chars().skip(skip).collect();

        if self.value.is_empty() {
            Paragraph::new(self.placeholder)
                .style(self.placeholder_style)
                .render(area, buf);
        } else {
            Paragraph::new(visible.as_str())
                .style(self.style)
                .render(area, buf);
        }

        if let Some(cursor) = self.cursor {
            let col: usize = visible
                .chars()
                .take(cursor.saturating_sub(skip))
                .map(|c| c.width().unwrap_or(0))
                .sum();
            let cursor_x = area.x + (col as u16).min(area.width.saturating_sub(1));
            buf[(cursor_x, area.y)].set_style(Style::default().add_modifier(Modifier::REVERSED));
        }
    }
}
