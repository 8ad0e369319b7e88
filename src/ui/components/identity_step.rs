//! Identity & Address step rendering

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::data::{DocumentType, FormStore, UploadSlot};
use crate::form::{FieldName, Focus, IdentityStep, CNIC_PLACEHOLDER};

use super::text_input::TextInput;
use super::{
    ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};

pub const STEP_TITLE: &str = "Identity & Address";
const SUBTITLE: &str = "Verify your identity and provide current address";
const ADDRESS_PLACEHOLDER: &str = "Enter your complete address";
const PASSPORT_PLACEHOLDER: &str = "AB1234567";
const PROVINCE_PLACEHOLDER: &str = "Select Province/State";

/// Columns taken by the focus marker and label
const LABEL_WIDTH: u16 = 22;

pub struct IdentityStepView<'a> {
    step: &'a IdentityStep,
    store: &'a FormStore,
}

impl<'a> IdentityStepView<'a> {
    pub fn new(step: &'a IdentityStep, store: &'a FormStore) -> Self {
        Self { step, store }
    }
}

/// Row-by-row painter over the step area
struct Rows<'b> {
    area: Rect,
    y: u16,
    buf: &'b mut Buffer,
}

impl Rows<'_> {
    fn next_row(&mut self) -> Option<Rect> {
        if self.y >= self.area.bottom() {
            return None;
        }
        let row = Rect::new(self.area.x, self.y, self.area.width, 1);
        self.y += 1;
        Some(row)
    }

    fn line(&mut self, line: Line<'_>) {
        if let Some(row) = self.next_row() {
            Paragraph::new(line).render(row, self.buf);
        }
    }

    fn blank(&mut self) {
        self.y = self.y.saturating_add(1);
    }

    /// Label column for a field; returns the value column
    fn labelled(&mut self, label: &str, focused: bool) -> Option<Rect> {
        let row = self.next_row()?;
        let (marker, style) = if focused {
            (
                "› ",
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(TEXT_SECONDARY))
        };
        Paragraph::new(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(label.to_string(), style),
        ]))
        .render(row, self.buf);

        let label_width = LABEL_WIDTH.min(row.width);
        Some(Rect::new(
            row.x + label_width,
            row.y,
            row.width - label_width,
            1,
        ))
    }

    fn error(&mut self, message: Option<String>) {
        let Some(message) = message else {
            return;
        };
        if let Some(row) = self.next_row() {
            let indent = " ".repeat(LABEL_WIDTH as usize);
            Paragraph::new(Line::from(vec![
                Span::raw(indent),
                Span::styled(format!("⚠ {}", message), Style::default().fg(ACCENT_ERROR)),
            ]))
            .render(row, self.buf);
        }
    }
}

fn selector_line(value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let arrows = if focused {
        Style::default().fg(ACCENT_PRIMARY)
    } else {
        Style::default().fg(TEXT_MUTED)
    };
    let value = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(TEXT_MUTED))
    } else {
        Span::styled(value.to_string(), Style::default().fg(TEXT_PRIMARY))
    };
    Line::from(vec![
        Span::styled("‹ ", arrows),
        value,
        Span::styled(" ›", arrows),
    ])
}

fn radio_line(selected: DocumentType) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, option) in [DocumentType::Cnic, DocumentType::Passport]
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let (mark, style) = if option == selected {
            ("(•) ", Style::default().fg(TEXT_PRIMARY))
        } else {
            ("( ) ", Style::default().fg(TEXT_MUTED))
        };
        spans.push(Span::styled(format!("{}{}", mark, option.label()), style));
    }
    Line::from(spans)
}

impl Widget for IdentityStepView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form = self.store.get();
        let focus = self.step.focus();
        let cursor = self.step.cursor_position(self.store);
        let text_style = Style::default().fg(TEXT_PRIMARY);
        let placeholder_style = Style::default().fg(TEXT_MUTED);
        let error_text = |field: FieldName| self.step.error(field).map(|e| e.to_string());

        let mut rows = Rows { area, y: area.y, buf };

        rows.line(Line::from(Span::styled(
            STEP_TITLE,
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )));
        rows.line(Line::from(Span::styled(
            SUBTITLE,
            Style::default().fg(TEXT_MUTED),
        )));
        rows.blank();

        let focused = focus == Focus::Address;
        if let Some(value_area) = rows.labelled("Complete Address", focused) {
            TextInput::new(&form.complete_address)
                .cursor(if focused { cursor } else { None })
                .placeholder(ADDRESS_PLACEHOLDER, placeholder_style)
                .style(text_style)
                .render(value_area, rows.buf);
        }
        rows.error(error_text(FieldName::CompleteAddress));

        let focused = focus == Focus::Country;
        if let Some(value_area) = rows.labelled("Country", focused) {
            Paragraph::new(selector_line(form.country.label(), "", focused))
                .render(value_area, rows.buf);
        }

        let focused = focus == Focus::Province;
        if let Some(value_area) = rows.labelled("Province/State", focused) {
            Paragraph::new(selector_line(&form.province, PROVINCE_PLACEHOLDER, focused))
                .render(value_area, rows.buf);
        }

        if let Some(value_area) = rows.labelled("Document Type", focus == Focus::DocumentType) {
            Paragraph::new(radio_line(form.document_type)).render(value_area, rows.buf);
        }

        let focused = focus == Focus::DocumentNumber;
        let (label, value, placeholder, field) = match form.document_type {
            DocumentType::Cnic => ("CNIC Number", &form.cnic, CNIC_PLACEHOLDER, FieldName::Cnic),
            DocumentType::Passport => (
                "Passport Number",
                &form.passport,
                PASSPORT_PLACEHOLDER,
                FieldName::Passport,
            ),
        };
        if let Some(value_area) = rows.labelled(label, focused) {
            TextInput::new(value)
                .cursor(if focused { cursor } else { None })
                .placeholder(placeholder, placeholder_style)
                .style(text_style)
                .render(value_area, rows.buf);
        }
        rows.error(error_text(field));

        rows.blank();
        let heading = match form.document_type {
            DocumentType::Cnic => "Upload CNIC Photos (Both sides required)",
            DocumentType::Passport => "Upload Passport",
        };
        rows.line(Line::from(Span::styled(
            heading,
            Style::default().fg(TEXT_SECONDARY),
        )));

        for slot in UploadSlot::for_document(form.document_type) {
            let focused = focus == Focus::Upload(*slot);
            let Some(value_area) = rows.labelled(slot.label(), focused) else {
                break;
            };
            let button_style = if focused {
                Style::default()
                    .fg(ACCENT_PRIMARY)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            let status = match form.attachment(*slot) {
                Some(file) => Span::styled(
                    format!("✓ {}", file.name),
                    Style::default().fg(ACCENT_SUCCESS),
                ),
                None => Span::styled("No file chosen", placeholder_style),
            };
            Paragraph::new(Line::from(vec![
                Span::styled("[ Choose file ]", button_style),
                Span::raw("  "),
                status,
            ]))
            .render(value_area, rows.buf);
        }
    }
}
