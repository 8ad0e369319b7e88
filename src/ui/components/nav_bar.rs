//! Back / Continue / Submit row under the step body

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{ACCENT_PRIMARY, ACCENT_SUCCESS, TEXT_FAINT, TEXT_MUTED, TEXT_SECONDARY};

pub const BACK_LABEL: &str = "← Back";
pub const CONTINUE_LABEL: &str = "Continue →";
pub const SUBMIT_LABEL: &str = "Submit Registration ✓";

pub struct NavBar<'a> {
    can_retreat: bool,
    is_last_step: bool,
    back_key: Option<&'a str>,
    next_key: Option<&'a str>,
}

impl<'a> NavBar<'a> {
    pub fn new(can_retreat: bool, is_last_step: bool) -> Self {
        Self {
            can_retreat,
            is_last_step,
            back_key: None,
            next_key: None,
        }
    }

    /// Key hints shown next to the buttons
    pub fn keys(mut self, back: Option<&'a str>, next: Option<&'a str>) -> Self {
        self.back_key = back;
        self.next_key = next;
        self
    }

    fn button(label: &'a str, key: Option<&'a str>, style: Style) -> Line<'a> {
        let mut spans = vec![Span::styled(format!(" {} ", label), style)];
        if let Some(key) = key {
            spans.push(Span::styled(format!(" {}", key), Style::default().fg(TEXT_FAINT)));
        }
        Line::from(spans)
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [left, right] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);

        // Back is shown disabled on the first step
        let back_style = if self.can_retreat {
            Style::default().fg(TEXT_SECONDARY)
        } else {
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::DIM)
        };
        let back_key = self.back_key.filter(|_| self.can_retreat);
        Paragraph::new(Self::button(BACK_LABEL, back_key, back_style)).render(left, buf);

        let (label, style) = if self.is_last_step {
            (SUBMIT_LABEL, Style::default().fg(ACCENT_SUCCESS))
        } else {
            (CONTINUE_LABEL, Style::default().fg(ACCENT_PRIMARY))
        };
        Paragraph::new(Self::button(
            label,
            self.next_key,
            style.add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .render(right, buf);
    }
}
