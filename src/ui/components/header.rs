//! Card header with the skip affordance

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{ACCENT_WARNING, TEXT_FAINT, TEXT_MUTED, TEXT_PRIMARY};

pub const TITLE: &str = "Complete Your Registration";
pub const SUBTITLE: &str = "Follow the steps to verify your identity";
pub const SKIP_LABEL: &str = "⚡ Skip Registration";
const SKIP_NOTE: &str = "(UI Review Only - Will be removed)";

pub struct Header<'a> {
    show_skip: bool,
    skip_key: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub const HEIGHT: u16 = 2;

    pub fn new(show_skip: bool, skip_key: Option<&'a str>) -> Self {
        Self {
            show_skip,
            skip_key,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let skip_width = if self.show_skip { SKIP_NOTE.len() as u16 + 2 } else { 0 };
        let [title_area, skip_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(skip_width)]).areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(TEXT_MUTED))),
        ])
        .render(title_area, buf);

        if self.show_skip {
            let key = self.skip_key.map(|k| format!(" {}", k)).unwrap_or_default();
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled(
                        SKIP_LABEL,
                        Style::default()
                            .fg(ACCENT_WARNING)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(key, Style::default().fg(TEXT_FAINT)),
                ]),
                Line::from(Span::styled(SKIP_NOTE, Style::default().fg(TEXT_FAINT))),
            ])
            .alignment(Alignment::Right)
            .render(skip_area, buf);
        }
    }
}
