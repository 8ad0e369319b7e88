//! Path prompt used to attach a document photo

use std::path::PathBuf;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::{KeyContext, KeybindingConfig};
use crate::data::{AttachmentError, FileAttachment, UploadSlot};
use crate::form::TextCursor;
use crate::ui::action::Action;

use super::dialog::{DialogFrame, StatusLine};
use super::key_hints::{hints_for, render_key_hints, KeyHintBarStyle};
use super::text_input::TextInput;
use super::{TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY};

/// State of the path prompt. Which slot it fills is tracked by the input mode.
#[derive(Debug, Clone, Default)]
pub struct FilePickerState {
    input: String,
    cursor: TextCursor,
    error: Option<String>,
}

impl FilePickerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh prompt
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor.position(&self.input)
    }

    /// Whether the typed path currently names a regular file
    pub fn points_at_file(&self) -> bool {
        !self.input.trim().is_empty() && self.expanded_path().is_file()
    }

    /// The typed path with a leading `~` expanded to the home directory
    pub fn expanded_path(&self) -> PathBuf {
        let input = self.input.trim();
        if let Some(rest) = input.strip_prefix('~') {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest.trim_start_matches('/'));
            }
        }
        PathBuf::from(input)
    }

    /// Read the chosen file. An empty path means nothing was chosen.
    ///
    /// On failure the error is kept for display and the prompt stays usable.
    pub fn confirm(&mut self) -> Result<Option<FileAttachment>, AttachmentError> {
        if self.input.trim().is_empty() {
            return Ok(None);
        }
        match FileAttachment::from_path(&self.expanded_path()) {
            Ok(file) => {
                self.error = None;
                Ok(Some(file))
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn edit<F: FnOnce(&mut TextCursor, &str) -> String>(&mut self, f: F) {
        self.input = f(&mut self.cursor, &self.input);
        self.error = None;
    }

    pub fn insert_char(&mut self, c: char) {
        self.edit(|cursor, text| cursor.insert_char(text, c));
    }

    pub fn delete_char(&mut self) {
        self.edit(|cursor, text| cursor.delete_char(text));
    }

    pub fn delete_forward(&mut self) {
        self.edit(|cursor, text| cursor.delete_forward(text));
    }

    pub fn delete_word(&mut self) {
        self.edit(|cursor, text| cursor.delete_word(text));
    }

    pub fn delete_to_start(&mut self) {
        self.edit(|cursor, text| cursor.delete_to_start(text));
    }

    pub fn move_left(&mut self) {
        self.cursor.move_left(&self.input);
    }

    pub fn move_right(&mut self) {
        self.cursor.move_right(&self.input);
    }

    pub fn move_start(&mut self) {
        self.cursor.move_start();
    }

    pub fn move_end(&mut self) {
        self.cursor.move_end(&self.input);
    }
}

pub struct FilePicker<'a> {
    state: &'a FilePickerState,
    slot: UploadSlot,
    bindings: &'a KeybindingConfig,
}

impl<'a> FilePicker<'a> {
    pub fn new(state: &'a FilePickerState, slot: UploadSlot, bindings: &'a KeybindingConfig) -> Self {
        Self {
            state,
            slot,
            bindings,
        }
    }
}

impl Widget for FilePicker<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Attach {}", self.slot.label());
        let inner = DialogFrame::new(&title, 64, 8).render(area, buf);

        let [label_area, input_area, status_area, _, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(Line::from(Span::styled(
            "  Path to file:",
            Style::default().fg(TEXT_SECONDARY),
        )))
        .render(label_area, buf);

        let input_area = Rect {
            x: input_area.x + 2,
            width: input_area.width.saturating_sub(4),
            ..input_area
        };
        TextInput::new(self.state.input())
            .cursor(Some(self.state.cursor_position()))
            .placeholder("~/Pictures/document.jpg", Style::default().fg(TEXT_MUTED))
            .style(Style::default().fg(TEXT_PRIMARY))
            .render(input_area, buf);

        let status = match self.state.error() {
            Some(error) => StatusLine::new().error(error),
            None if self.state.points_at_file() => StatusLine::new().success("File found"),
            None => StatusLine::new(),
        };
        status.render(status_area, buf);

        let hints = hints_for(
            self.bindings,
            KeyContext::FilePicker,
            &[Action::Confirm, Action::Cancel],
        );
        render_key_hints(hints_area, buf, &hints, KeyHintBarStyle::instruction_bar());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn type_str(state: &mut FilePickerState, s: &str) {
        for c in s.chars() {
            state.insert_char(c);
        }
    }

    #[test]
    fn test_empty_path_chooses_nothing() {
        let mut state = FilePickerState::new();
        type_str(&mut state, "   ");
        assert!(state.confirm().unwrap().is_none());
    }

    #[test]
    fn test_confirm_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("passport.jpg");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"jpeg")
            .unwrap();

        let mut state = FilePickerState::new();
        type_str(&mut state, &path.display().to_string());
        assert!(state.points_at_file());
        let file = state.confirm().unwrap().unwrap();
        assert_eq!(file.name, "passport.jpg");
        assert_eq!(file.len(), 4);
    }

    #[test]
    fn test_missing_file_keeps_error_until_edit() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = FilePickerState::new();
        type_str(&mut state, &dir.path().join("nope.png").display().to_string());
        assert!(state.confirm().is_err());
        assert!(state.error().is_some());

        state.delete_char();
        assert!(state.error().is_none());
    }

    #[test]
    fn test_tilde_expands_to_home() {
        let mut state = FilePickerState::new();
        type_str(&mut state, "~/doc.png");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(state.expanded_path(), home.join("doc.png"));
        }
    }
}
